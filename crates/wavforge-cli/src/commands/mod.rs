//! CLI command implementations

pub mod compose;
pub mod inspect;
pub mod json_output;
pub mod tone;

use colored::Colorize;
use std::path::Path;
use wavforge_synth::SynthError;

use crate::compositions::RenderedClip;
use crate::wav::write_wav_file;
use json_output::{error_codes, JsonError, WrittenFile};

/// Writes a rendered clip as a WAV file and summarizes it.
pub(crate) fn write_clip(path: &Path, clip: &RenderedClip) -> Result<WrittenFile, JsonError> {
    write_wav_file(path, &clip.format, &clip.pcm).map_err(|e| {
        JsonError::new(
            error_codes::FILE_WRITE,
            format!("failed to write {}: {}", path.display(), e),
        )
    })?;
    Ok(WrittenFile::from_clip(path.display().to_string(), clip))
}

/// Maps a synthesis error to its JSON form.
pub(crate) fn synth_error_to_json(err: &SynthError) -> JsonError {
    JsonError::new(err.code(), err.to_string())
}

/// Prints the human-readable summary line for a written file.
pub(crate) fn print_written(file: &WrittenFile) {
    println!(
        "{} {} ({} frames, {} ch, {:.2}s)",
        "Wrote:".green().bold(),
        file.path,
        file.frames,
        file.channels,
        file.duration_seconds
    );
    println!("  {} {}", "PCM hash:".dimmed(), file.pcm_hash.dimmed());
}
