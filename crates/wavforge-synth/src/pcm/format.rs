//! PCM format metadata handed to container writers.

use crate::{SAMPLE_WIDTH, SAMPLING_FREQ};

/// Largest channel count whose block align still fits the 16-bit header field.
pub const MAX_CHANNELS: u16 = u16::MAX / 2;

/// PCM format parameters.
///
/// Sample rate and width are fixed at 44100 Hz / 16 bits; only the channel
/// count varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PcmFormat {
    /// Number of channels (1 = mono, 2 = stereo).
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bits per sample.
    pub bits_per_sample: u16,
}

impl PcmFormat {
    /// Creates a format with the given channel count.
    pub fn with_channels(channels: u16) -> Self {
        Self {
            channels,
            sample_rate: SAMPLING_FREQ,
            bits_per_sample: SAMPLE_WIDTH,
        }
    }

    /// Creates a mono format.
    pub fn mono() -> Self {
        Self::with_channels(1)
    }

    /// Creates a stereo format.
    pub fn stereo() -> Self {
        Self::with_channels(2)
    }

    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Block align (bytes per sample frame).
    ///
    /// None when the channel count is above [`MAX_CHANNELS`] and the value
    /// does not fit the 16-bit header field.
    pub fn block_align(&self) -> Option<u16> {
        self.channels.checked_mul(self.bytes_per_sample())
    }

    /// Byte rate (bytes per second), None when the block align overflows.
    pub fn byte_rate(&self) -> Option<u32> {
        self.sample_rate.checked_mul(u32::from(self.block_align()?))
    }

    /// Number of whole frames in a PCM buffer of `pcm_len` bytes.
    pub fn frame_count(&self, pcm_len: usize) -> usize {
        match self.block_align() {
            None | Some(0) => 0,
            Some(align) => pcm_len / align as usize,
        }
    }

    /// Duration in seconds of a PCM buffer of `pcm_len` bytes.
    pub fn duration_seconds(&self, pcm_len: usize) -> f64 {
        self.frame_count(pcm_len) as f64 / self.sample_rate as f64
    }
}
