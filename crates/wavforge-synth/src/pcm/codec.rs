//! Float to 16-bit PCM conversion and back.

use crate::error::{SynthError, SynthResult};
use crate::MAX_INT_SAMPLE_VALUE;

/// Converts f64 samples to 16-bit PCM bytes.
///
/// Each sample is clipped to [-1.0, 1.0], multiplied by 32767 and truncated
/// toward zero, so 1.0 encodes as 32767 and -1.0 as -32767. Truncation
/// biases quantization toward zero by up to one step; NaN encodes as 0.
///
/// # Arguments
/// * `samples` - Audio samples, interleaved if multi-channel
///
/// # Returns
/// PCM data as little-endian 16-bit samples, two bytes per input sample
pub fn convert_to_bytes(samples: &[f64]) -> Vec<u8> {
    let scale = MAX_INT_SAMPLE_VALUE as f64;
    let mut pcm = Vec::with_capacity(samples.len() * 2);

    for &sample in samples {
        let clipped = sample.clamp(-1.0, 1.0);
        // `as` truncates toward zero and maps NaN to 0
        let pcm_value = (clipped * scale) as i16;
        pcm.extend_from_slice(&pcm_value.to_le_bytes());
    }

    pcm
}

/// Converts 16-bit PCM bytes back to f64 samples.
///
/// Each little-endian `i16` is divided by 32767. The otherwise unused value
/// -32768 decodes to slightly below -1.0.
///
/// # Errors
/// Returns [`SynthError::MalformedBuffer`] if the buffer length is odd.
pub fn convert_to_samples(bytes: &[u8]) -> SynthResult<Vec<f64>> {
    if bytes.len() % 2 != 0 {
        return Err(SynthError::MalformedBuffer { len: bytes.len() });
    }

    let scale = MAX_INT_SAMPLE_VALUE as f64;
    Ok(bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f64 / scale)
        .collect())
}
