//! Independent WAV decoding for round-trip checks.
//!
//! Files written by `wavforge` are read back with `hound`, so a bug shared by
//! the writer and wavforge's own reader cannot hide itself.

use std::path::Path;

/// A WAV file decoded by `hound`.
#[derive(Debug, Clone)]
pub struct DecodedWav {
    /// Format reported by the file header.
    pub spec: hound::WavSpec,
    /// Interleaved integer samples.
    pub samples: Vec<i16>,
}

impl DecodedWav {
    /// Number of frames.
    pub fn frames(&self) -> usize {
        self.samples.len() / self.spec.channels as usize
    }

    /// Samples of one channel.
    pub fn channel(&self, index: usize) -> Vec<i16> {
        self.samples
            .iter()
            .skip(index)
            .step_by(self.spec.channels as usize)
            .copied()
            .collect()
    }

    /// Interleaved samples re-encoded as little-endian PCM bytes.
    pub fn pcm_bytes(&self) -> Vec<u8> {
        self.samples.iter().flat_map(|s| s.to_le_bytes()).collect()
    }
}

/// Reads a 16-bit WAV file with `hound`.
pub fn read_wav(path: &Path) -> Result<DecodedWav, hound::Error> {
    let mut reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    let samples = reader.samples::<i16>().collect::<Result<Vec<_>, _>>()?;
    Ok(DecodedWav { spec, samples })
}
