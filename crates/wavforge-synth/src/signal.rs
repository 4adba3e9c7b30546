//! Signal summing and peak normalization.
//!
//! Neither operation clips; clipping happens only during PCM encoding.

use crate::error::{ensure_finite, ensure_len, SynthError, SynthResult};

/// Adds two equal-length signals elementwise.
///
/// # Errors
/// Returns [`SynthError::LengthMismatch`] if the lengths differ.
pub fn add_signals(a: &[f64], b: &[f64]) -> SynthResult<Vec<f64>> {
    ensure_len(a.len(), b.len())?;
    Ok(a.iter().zip(b).map(|(x, y)| x + y).collect())
}

/// Adds any number of equal-length signals elementwise.
///
/// Signals are accumulated left to right, so `sum_signals(&[a, b, c])` equals
/// `(a + b) + c` exactly.
///
/// # Errors
/// Returns [`SynthError::InvalidParameter`] for an empty list and
/// [`SynthError::LengthMismatch`] if any length differs from the first.
pub fn sum_signals<S: AsRef<[f64]>>(signals: &[S]) -> SynthResult<Vec<f64>> {
    let (first, rest) = signals
        .split_first()
        .ok_or_else(|| SynthError::invalid_param("signals", "at least one signal is required"))?;

    let mut output = first.as_ref().to_vec();
    for signal in rest {
        let signal = signal.as_ref();
        ensure_len(output.len(), signal.len())?;
        for (sample, s) in output.iter_mut().zip(signal) {
            *sample += s;
        }
    }

    Ok(output)
}

/// Returns the largest absolute sample value, or 0.0 for an empty signal.
pub fn peak(samples: &[f64]) -> f64 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f64, |a, b| a.max(b))
}

/// Rescales a signal so its peak absolute value equals `norm_target`.
///
/// The relative shape of the signal is preserved: every sample is multiplied
/// by `norm_target / peak(samples)`.
///
/// # Arguments
/// * `samples` - Signal to rescale
/// * `norm_target` - Desired peak amplitude (typically in (0, 1])
///
/// # Errors
/// Returns [`SynthError::DegenerateSignal`] for an empty or all-zero signal,
/// which has no peak to scale from, and for a signal holding NaN or infinite
/// samples, which would rescale to NaN.
pub fn normalize(samples: &[f64], norm_target: f64) -> SynthResult<Vec<f64>> {
    ensure_finite("norm_target", norm_target)?;

    if samples.is_empty() {
        return Err(SynthError::degenerate("cannot normalize an empty signal"));
    }

    if samples.iter().any(|s| !s.is_finite()) {
        return Err(SynthError::degenerate(
            "cannot normalize a signal with non-finite samples",
        ));
    }

    let max_sample = peak(samples);
    if max_sample == 0.0 {
        return Err(SynthError::degenerate(
            "cannot normalize a silent signal to a non-zero peak",
        ));
    }

    let coeff = norm_target / max_sample;
    Ok(samples.iter().map(|s| coeff * s).collect())
}
