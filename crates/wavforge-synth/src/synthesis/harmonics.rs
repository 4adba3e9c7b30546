//! Additive synthesis with overtones.
//!
//! A tone is built from a sine fundamental plus one sine partial per
//! overtone, each scaled relative to the fundamental.

use crate::error::{ensure_finite, ensure_len, SynthError, SynthResult};

use super::oscillators::sine;

/// One harmonic contribution relative to a fundamental.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overtone {
    /// Frequency multiplier applied to the fundamental (2.0 = octave).
    pub freq_factor: f64,
    /// Amplitude relative to the fundamental's amplitude.
    pub amp_factor: f64,
}

impl Overtone {
    /// Creates a new overtone.
    pub fn new(freq_factor: f64, amp_factor: f64) -> Self {
        Self {
            freq_factor,
            amp_factor,
        }
    }

    /// Integer harmonics `2..=last` with amplitudes decaying geometrically.
    ///
    /// Harmonic `n` gets amplitude `decay^(n - 1)`.
    pub fn decaying_series(last: u32, decay: f64) -> Vec<Overtone> {
        (2..=last)
            .map(|n| Overtone::new(n as f64, decay.powi(n as i32 - 1)))
            .collect()
    }

    fn validate(&self) -> SynthResult<()> {
        ensure_finite("freq_factor", self.freq_factor)?;
        ensure_finite("amp_factor", self.amp_factor)?;
        if self.freq_factor <= 0.0 {
            return Err(SynthError::invalid_param(
                "freq_factor",
                format!("must be positive, got {}", self.freq_factor),
            ));
        }
        Ok(())
    }
}

impl From<(f64, f64)> for Overtone {
    fn from((freq_factor, amp_factor): (f64, f64)) -> Self {
        Self::new(freq_factor, amp_factor)
    }
}

/// Generates a sine fundamental with additive overtones.
///
/// Starts from `sine(root_freq, amplitude, duration)` and adds
/// `sine(root_freq * freq_factor, amplitude * amp_factor, duration)` for each
/// overtone, in slice order. The summation order is fixed so results are
/// bit-for-bit reproducible.
///
/// # Arguments
/// * `root_freq` - Fundamental frequency in Hz
/// * `amplitude` - Fundamental amplitude
/// * `overtones` - Overtones to add, in order
/// * `duration` - Length in seconds
pub fn sine_with_overtones(
    root_freq: f64,
    amplitude: f64,
    overtones: &[Overtone],
    duration: f64,
) -> SynthResult<Vec<f64>> {
    let mut signal = sine(root_freq, amplitude, duration)?;

    for overtone in overtones {
        overtone.validate()?;
        let partial = sine(
            root_freq * overtone.freq_factor,
            amplitude * overtone.amp_factor,
            duration,
        )?;
        ensure_len(signal.len(), partial.len())?;

        for (sample, p) in signal.iter_mut().zip(&partial) {
            *sample += p;
        }
    }

    Ok(signal)
}
