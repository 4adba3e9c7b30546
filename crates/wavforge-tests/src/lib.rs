//! wavforge End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the rendering flows:
//!
//! - Rendering: composition or tone -> WAV file on disk
//! - Reading back: WAV files decoded with an independent reader (`hound`)
//! - **Determinism**: byte-identical PCM across repeated renders
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wavforge-tests
//! ```

pub mod determinism;
pub mod wav_reader;
