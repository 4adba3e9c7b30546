//! Sample time points at the fixed sampling rate.

use crate::error::{SynthError, SynthResult};
use crate::SAMPLING_FREQ;

/// Longest duration that can be rendered, in seconds (one hour).
pub const MAX_DURATION: f64 = 3600.0;

/// Number of samples needed to cover `duration` seconds.
///
/// Equals `ceil(duration * SAMPLING_FREQ)`, so a partial trailing sample
/// period still produces a sample.
///
/// # Errors
/// Returns [`SynthError::InvalidParameter`] for negative or non-finite
/// durations and for durations longer than [`MAX_DURATION`].
pub fn sample_count(duration: f64) -> SynthResult<usize> {
    if !duration.is_finite() || duration < 0.0 {
        return Err(SynthError::invalid_param(
            "duration",
            format!("must be a finite, non-negative number of seconds, got {}", duration),
        ));
    }
    if duration > MAX_DURATION {
        return Err(SynthError::invalid_param(
            "duration",
            format!("must be at most {} seconds, got {}", MAX_DURATION, duration),
        ));
    }

    Ok((duration * SAMPLING_FREQ as f64).ceil() as usize)
}

/// Generates evenly spaced sample instants in seconds.
///
/// The value at index `i` is `i / SAMPLING_FREQ`.
///
/// # Arguments
/// * `duration` - Length of the time axis in seconds
///
/// # Returns
/// `sample_count(duration)` time points starting at 0.0
pub fn generate_sample_time_points(duration: f64) -> SynthResult<Vec<f64>> {
    let num_samples = sample_count(duration)?;
    let rate = SAMPLING_FREQ as f64;

    Ok((0..num_samples).map(|i| i as f64 / rate).collect())
}
