//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on every command.

use serde::{Deserialize, Serialize};

use crate::compositions::RenderedClip;

/// Error codes for CLI operations.
///
/// Synthesis failures pass through the core's `SYNTH_XXX` codes instead.
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// File could not be written
    pub const FILE_WRITE: &str = "CLI_002";
    /// File is not a supported WAV
    pub const UNSUPPORTED_FORMAT: &str = "CLI_003";
    /// Unknown composition name
    pub const UNKNOWN_COMPOSITION: &str = "CLI_004";
    /// JSON serialization error
    pub const JSON_SERIALIZE: &str = "CLI_005";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "SYNTH_003")
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl JsonError {
    /// Creates a new error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Summary of one written WAV file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WrittenFile {
    /// Output path
    pub path: String,
    /// Number of channels
    pub channels: u16,
    /// Number of frames
    pub frames: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM data
    pub pcm_hash: String,
}

impl WrittenFile {
    /// Summarizes a rendered clip written to `path`.
    pub fn from_clip(path: impl Into<String>, clip: &RenderedClip) -> Self {
        Self {
            path: path.into(),
            channels: clip.format.channels,
            frames: clip.frames(),
            duration_seconds: clip.duration_seconds(),
            pcm_hash: clip.pcm_hash(),
        }
    }
}

/// Output of `compose --json` and `tone --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RenderOutput {
    /// Whether every requested file was written
    pub success: bool,
    /// Files written
    pub files: Vec<WrittenFile>,
    /// Errors encountered
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<JsonError>,
}

/// Output of `inspect --json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectOutput {
    /// Whether the file could be decoded
    pub success: bool,
    /// Input path
    pub path: String,
    /// Decoded file summary (absent on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<InspectResult>,
    /// Errors encountered
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub errors: Vec<JsonError>,
}

/// Decoded contents of an inspected WAV file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InspectResult {
    /// Number of channels
    pub channels: u16,
    /// Number of frames
    pub frames: usize,
    /// Duration in seconds
    pub duration_seconds: f64,
    /// Peak absolute sample per channel, in [-1, 1] units
    pub channel_peaks: Vec<f64>,
    /// BLAKE3 hash of the PCM data
    pub pcm_hash: String,
}

/// Prints a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| {
        anyhow::anyhow!("{}: failed to serialize output: {}", error_codes::JSON_SERIALIZE, e)
    })?;
    println!("{}", json);
    Ok(())
}
