//! Channel interleaving.
//!
//! Multi-channel audio is stored frame by frame: frame 0 channel 0, frame 0
//! channel 1, frame 1 channel 0, and so on. Channel 0 is the left channel.


use crate::error::{ensure_len, SynthError, SynthResult};
use crate::MAX_CHANNELS;

/// Interleaves equal-length mono signals into one frame-major signal.
///
/// `output[i * C + c] == channels[c][i]` for `C = channels.len()`.
///
/// # Errors
/// Returns [`SynthError::InvalidParameter`] when no channels are given and
/// [`SynthError::LengthMismatch`] when channel lengths differ.
pub fn merge_channels<S: AsRef<[f64]>>(channels: &[S]) -> SynthResult<Vec<f64>> {
    let first = channels
        .first()
        .ok_or_else(|| SynthError::invalid_param("channels", "at least one channel is required"))?;
    let num_frames = first.as_ref().len();

    for channel in channels {
        ensure_len(num_frames, channel.as_ref().len())?;
    }

    let mut output = Vec::with_capacity(num_frames * channels.len());
    for i in 0..num_frames {
        for channel in channels {
            output.push(channel.as_ref()[i]);
        }
    }

    Ok(output)
}

/// Splits a frame-major signal into its channels.
///
/// `channels[c][i] == samples[i * num_channels + c]`. A trailing incomplete
/// frame is dropped, so every returned channel has
/// `samples.len() / num_channels` samples.
///
/// # Errors
/// Returns [`SynthError::InvalidParameter`] when `num_channels` is zero or
/// above [`MAX_CHANNELS`].
pub fn separate_channels(samples: &[f64], num_channels: usize) -> SynthResult<Vec<Vec<f64>>> {
    if num_channels == 0 {
        return Err(SynthError::invalid_param("num_channels", "must be at least 1"));
    }
    if num_channels > MAX_CHANNELS as usize {
        return Err(SynthError::invalid_param(
            "num_channels",
            format!("must be at most {}, got {}", MAX_CHANNELS, num_channels),
        ));
    }

    let mut channels = vec![Vec::with_capacity(samples.len() / num_channels); num_channels];
    for frame in samples.chunks_exact(num_channels) {
        for (channel, &sample) in channels.iter_mut().zip(frame) {
            channel.push(sample);
        }
    }

    Ok(channels)
}

/// Splits a frame-major signal into its channels, rejecting partial frames.
///
/// # Errors
/// Returns [`SynthError::LengthMismatch`] when `samples.len()` is not a
/// multiple of `num_channels`; `expected` is the length of the complete
/// frames.
pub fn separate_channels_exact(
    samples: &[f64],
    num_channels: usize,
) -> SynthResult<Vec<Vec<f64>>> {
    let channels = separate_channels(samples, num_channels)?;
    ensure_len(channels[0].len() * num_channels, samples.len())?;
    Ok(channels)
}
