//! Waveform generators.
//!
//! Each generator samples a closed-form waveform on the time axis from
//! [`crate::time`] and returns a new signal:
//! - `oscillators` - Pure sine and square waves
//! - `harmonics` - Sine fundamental with additive overtones

mod harmonics;
mod oscillators;

pub use harmonics::{sine_with_overtones, Overtone};
pub use oscillators::{sine, square};

/// Two times pi.
pub const TWO_PI: f64 = 2.0 * std::f64::consts::PI;
