//! Named compositions rendered by the `compose` command.
//!
//! Each piece is built from just-intonation intervals over A3 (220 Hz) and
//! rendered straight to 16-bit PCM.

use wavforge_synth::{
    convert_to_bytes, merge_channels, normalize, pcm_hash, sine, sine_with_overtones,
    sum_signals, Overtone, PcmFormat, SynthResult,
};

/// Root frequency of every composition (A3).
pub const ROOT_FREQ: f64 = 220.0;

/// Peak amplitude used when a composition is normalized.
pub const NORM_TARGET: f64 = 0.89;

/// A rendered clip: PCM bytes plus the metadata a container writer needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedClip {
    /// Interleaved 16-bit little-endian PCM data.
    pub pcm: Vec<u8>,
    /// Channel count, sample width and rate.
    pub format: PcmFormat,
}

impl RenderedClip {
    /// Encodes interleaved samples with the given channel count.
    pub fn from_interleaved(samples: &[f64], channels: u16) -> Self {
        Self {
            pcm: convert_to_bytes(samples),
            format: PcmFormat::with_channels(channels),
        }
    }

    /// Number of frames in the clip.
    pub fn frames(&self) -> usize {
        self.format.frame_count(self.pcm.len())
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.format.duration_seconds(self.pcm.len())
    }

    /// BLAKE3 hash of the PCM data.
    pub fn pcm_hash(&self) -> String {
        pcm_hash(&self.pcm)
    }
}

/// The built-in compositions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composition {
    /// Root and fifth mixed, normalized, identical on both channels.
    PerfectFifth,
    /// Root on the left channel, fifth on the right.
    PerfectFifthPanned,
    /// Root, major third, fifth and octave, mono.
    MajorChord,
    /// Fundamental with fourteen geometrically decaying harmonics, mono.
    Overtones,
}

impl Composition {
    /// All compositions in render order.
    pub const ALL: [Composition; 4] = [
        Composition::PerfectFifth,
        Composition::PerfectFifthPanned,
        Composition::MajorChord,
        Composition::Overtones,
    ];

    /// File stem used for the rendered WAV.
    pub fn name(&self) -> &'static str {
        match self {
            Composition::PerfectFifth => "perfect_fifth",
            Composition::PerfectFifthPanned => "perfect_fifth_panned",
            Composition::MajorChord => "major_chord",
            Composition::Overtones => "overtones",
        }
    }

    /// Looks up a composition by its file stem.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Duration rendered when no override is given.
    pub fn default_duration(&self) -> f64 {
        match self {
            Composition::PerfectFifth | Composition::PerfectFifthPanned => 30.0,
            Composition::MajorChord | Composition::Overtones => 10.0,
        }
    }

    /// Renders the composition.
    ///
    /// # Arguments
    /// * `duration` - Length in seconds, or None for the default
    pub fn render(&self, duration: Option<f64>) -> SynthResult<RenderedClip> {
        let duration = duration.unwrap_or_else(|| self.default_duration());

        match self {
            Composition::PerfectFifth => {
                let root = sine(ROOT_FREQ, 0.4, duration)?;
                let fifth = sine(ROOT_FREQ * 3.0 / 2.0, 0.3, duration)?;
                let mixed = normalize(&sum_signals(&[&root, &fifth])?, NORM_TARGET)?;
                let frames = merge_channels(&[&mixed, &mixed])?;
                Ok(RenderedClip::from_interleaved(&frames, 2))
            }
            Composition::PerfectFifthPanned => {
                let root = sine(ROOT_FREQ, 0.9, duration)?;
                let fifth = sine(ROOT_FREQ * 3.0 / 2.0, 0.7, duration)?;
                let frames = merge_channels(&[&root, &fifth])?;
                Ok(RenderedClip::from_interleaved(&frames, 2))
            }
            Composition::MajorChord => {
                let notes = [1.0, 5.0 / 4.0, 3.0 / 2.0, 2.0]
                    .iter()
                    .map(|ratio| sine(ROOT_FREQ * ratio, 1.0, duration))
                    .collect::<SynthResult<Vec<_>>>()?;
                let chord = normalize(&sum_signals(&notes)?, NORM_TARGET)?;
                Ok(RenderedClip::from_interleaved(&chord, 1))
            }
            Composition::Overtones => {
                let overtones = Overtone::decaying_series(15, 0.15);
                let tone = sine_with_overtones(ROOT_FREQ, 1.0, &overtones, duration)?;
                let tone = normalize(&tone, NORM_TARGET)?;
                Ok(RenderedClip::from_interleaved(&tone, 1))
            }
        }
    }
}
