//! 16-bit PCM encoding.
//!
//! Samples are clipped to [-1, 1], scaled by [`crate::MAX_INT_SAMPLE_VALUE`]
//! and truncated toward zero, then stored as little-endian `i16` values with
//! no header. The PCM hash can be used to check that two renders are
//! byte-identical.

mod codec;
mod format;
mod hash;


// Re-export public API
pub use codec::{convert_to_bytes, convert_to_samples};
pub use format::{PcmFormat, MAX_CHANNELS};
pub use hash::pcm_hash;
