//! wavforge CLI library.
//!
//! This crate drives the synthesis core: it renders named compositions and
//! arbitrary tones, writes them into WAV containers and inspects existing
//! WAV files.

pub mod commands;
pub mod compositions;
pub mod wav;
