//! wavforge synthesis core
//!
//! This crate implements the waveform synthesis and sample-encoding pipeline
//! used by the `wavforge` CLI.
//!
//! # Overview
//!
//! Every stage is a pure function over in-memory buffers:
//!
//! - **Time axis** - Evenly spaced sample instants at 44.1 kHz
//! - **Waveforms** - Sine, square and additive overtone series
//! - **Signals** - Elementwise summing and peak normalization
//! - **Channels** - Interleaving mono signals into frames and back
//! - **PCM** - 16-bit little-endian encoding with clipping, and decoding
//!
//! The crate performs no I/O. Callers hand the resulting PCM bytes and the
//! accompanying [`PcmFormat`] to a container writer.
//!
//! # Example
//!
//! ```
//! use wavforge_synth::{convert_to_bytes, merge_channels, normalize, sine, sum_signals};
//!
//! let root = sine(220.0, 0.4, 0.1)?;
//! let fifth = sine(330.0, 0.3, 0.1)?;
//! let mixed = normalize(&sum_signals(&[&root, &fifth])?, 0.89)?;
//! let frames = merge_channels(&[&mixed, &mixed])?;
//! let pcm = convert_to_bytes(&frames);
//! assert_eq!(pcm.len(), 4 * 4410);
//! # Ok::<(), wavforge_synth::SynthError>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`time`] - Sample time points
//! - [`synthesis`] - Waveform generators
//! - [`signal`] - Signal summing and normalization
//! - [`channels`] - Channel interleaving
//! - [`pcm`] - PCM codec, format metadata and hashing
//! - [`error`] - Error types

pub mod channels;
pub mod error;
pub mod pcm;
pub mod signal;
pub mod synthesis;
pub mod time;

// Re-export main types at crate root
pub use channels::{merge_channels, separate_channels, separate_channels_exact};
pub use error::{SynthError, SynthResult};
pub use pcm::{convert_to_bytes, convert_to_samples, pcm_hash, PcmFormat, MAX_CHANNELS};
pub use signal::{add_signals, normalize, peak, sum_signals};
pub use synthesis::{sine, sine_with_overtones, square, Overtone};
pub use time::{generate_sample_time_points, sample_count, MAX_DURATION};

/// Sampling rate in Hz (CD quality).
pub const SAMPLING_FREQ: u32 = 44100;

/// Bits per PCM sample.
pub const SAMPLE_WIDTH: u16 = 16;

/// Largest integer sample magnitude, `2^(SAMPLE_WIDTH - 1) - 1`.
pub const MAX_INT_SAMPLE_VALUE: i16 = i16::MAX;
