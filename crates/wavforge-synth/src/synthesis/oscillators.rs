//! Basic oscillator synthesis (sine, square).

use crate::error::{ensure_finite, SynthResult};
use crate::time::generate_sample_time_points;

use super::TWO_PI;

/// Generates a sine wave.
///
/// `y = amplitude * sin(2π * freq * t)` for every sample instant `t`, so the
/// first sample is always zero. Negative frequencies or amplitudes invert
/// the waveform.
///
/// # Arguments
/// * `freq` - Frequency in Hz
/// * `amplitude` - Peak amplitude
/// * `duration` - Length in seconds
///
/// # Errors
/// Returns [`crate::SynthError::InvalidParameter`] for non-finite frequency or
/// amplitude, or an invalid duration.
pub fn sine(freq: f64, amplitude: f64, duration: f64) -> SynthResult<Vec<f64>> {
    ensure_finite("freq", freq)?;
    ensure_finite("amplitude", amplitude)?;

    let time_points = generate_sample_time_points(duration)?;
    Ok(time_points
        .iter()
        .map(|&t| amplitude * (freq * TWO_PI * t).sin())
        .collect())
}

/// Generates a square wave.
///
/// `y = amplitude * sign(sin(2π * freq * t))` with `sign(0) = 0`: samples that
/// land exactly on a zero crossing are silent, every other sample is
/// `±amplitude`.
pub fn square(freq: f64, amplitude: f64, duration: f64) -> SynthResult<Vec<f64>> {
    ensure_finite("amplitude", amplitude)?;

    let unit = sine(freq, 1.0, duration)?;
    Ok(unit.iter().map(|&s| amplitude * sign(s)).collect())
}

/// Sign function with `sign(0) = 0`.
///
/// `f64::signum` maps `0.0` to `1.0`, which would turn zero crossings into
/// full-scale samples.
#[inline]
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}
