//! Error types for the synthesis pipeline.

use thiserror::Error;

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur while synthesizing or encoding samples.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SynthError {
    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Signals or channels of incompatible lengths.
    #[error("length mismatch: expected {expected} samples, found {found}")]
    LengthMismatch {
        /// Expected length.
        expected: usize,
        /// Found length.
        found: usize,
    },

    /// Signal that cannot be rescaled.
    #[error("degenerate signal: {message}")]
    DegenerateSignal {
        /// Error message.
        message: String,
    },

    /// PCM buffer that does not hold whole 16-bit samples.
    #[error("malformed PCM buffer: {len} bytes is not a multiple of 2")]
    MalformedBuffer {
        /// Buffer length in bytes.
        len: usize,
    },
}

impl SynthError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Creates a degenerate signal error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateSignal {
            message: message.into(),
        }
    }

    /// Stable error code for machine-readable reports.
    pub fn code(&self) -> &'static str {
        match self {
            SynthError::InvalidParameter { .. } => "SYNTH_001",
            SynthError::LengthMismatch { .. } => "SYNTH_002",
            SynthError::DegenerateSignal { .. } => "SYNTH_003",
            SynthError::MalformedBuffer { .. } => "SYNTH_004",
        }
    }
}

/// Rejects NaN and infinite parameter values.
pub(crate) fn ensure_finite(name: &str, value: f64) -> SynthResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SynthError::invalid_param(
            name,
            format!("must be finite, got {}", value),
        ))
    }
}

/// Checks that a signal has the expected length.
pub(crate) fn ensure_len(expected: usize, found: usize) -> SynthResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(SynthError::LengthMismatch { expected, found })
    }
}
