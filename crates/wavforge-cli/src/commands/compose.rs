//! Compose command implementation
//!
//! Renders the built-in compositions to `<out_dir>/<name>.wav`.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{error_codes, print_json, JsonError, RenderOutput, WrittenFile};
use super::{print_written, synth_error_to_json, write_clip};
use crate::compositions::Composition;

/// Piece name that selects every composition.
pub const ALL_PIECES: &str = "all";

/// Resolves a `--piece` argument to the compositions it selects.
pub fn resolve_pieces(piece: &str) -> Option<Vec<Composition>> {
    if piece == ALL_PIECES {
        return Some(Composition::ALL.to_vec());
    }
    Composition::from_name(piece).map(|c| vec![c])
}

/// Run the compose command
///
/// # Arguments
/// * `piece` - Composition name, or `all`
/// * `out_dir` - Output directory (created if missing)
/// * `duration` - Optional duration override in seconds
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if every file was written, 1 otherwise
pub fn run(
    piece: &str,
    out_dir: &str,
    duration: Option<f64>,
    json_output: bool,
) -> Result<ExitCode> {
    let pieces = match resolve_pieces(piece) {
        Some(pieces) => pieces,
        None => {
            let known: Vec<&str> = Composition::ALL.iter().map(|c| c.name()).collect();
            let message = format!(
                "unknown composition '{}' (expected {} or {})",
                piece,
                ALL_PIECES,
                known.join(", ")
            );
            if json_output {
                print_json(&RenderOutput {
                    success: false,
                    files: vec![],
                    errors: vec![JsonError::new(error_codes::UNKNOWN_COMPOSITION, message)],
                })?;
                return Ok(ExitCode::from(1));
            }
            anyhow::bail!(message);
        }
    };

    if !json_output {
        println!("{} {}", "Composing:".cyan().bold(), piece);
        println!("{} {}", "Output dir:".cyan().bold(), out_dir);
    }

    let mut files = Vec::new();
    let mut errors = Vec::new();
    for composition in pieces {
        match render_piece(composition, Path::new(out_dir), duration) {
            Ok(file) => {
                if !json_output {
                    print_written(&file);
                }
                files.push(file);
            }
            Err(err) => {
                if !json_output {
                    eprintln!(
                        "{} {}: {}",
                        "FAILED".red().bold(),
                        composition.name(),
                        err.message
                    );
                }
                errors.push(err);
            }
        }
    }

    let success = errors.is_empty();
    if json_output {
        print_json(&RenderOutput {
            success,
            files,
            errors,
        })?;
    }

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

/// Renders one composition and writes it into `out_dir`.
fn render_piece(
    composition: Composition,
    out_dir: &Path,
    duration: Option<f64>,
) -> Result<WrittenFile, JsonError> {
    let clip = composition
        .render(duration)
        .map_err(|e| synth_error_to_json(&e))?;
    let path = out_dir.join(format!("{}.wav", composition.name()));
    write_clip(&path, &clip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_all() {
        assert_eq!(resolve_pieces("all").unwrap().len(), 4);
    }

    #[test]
    fn test_resolve_single() {
        assert_eq!(
            resolve_pieces("major_chord"),
            Some(vec![Composition::MajorChord])
        );
        assert_eq!(resolve_pieces("nope"), None);
    }

    #[test]
    fn test_render_piece_writes_wav() {
        let dir = tempfile::tempdir().unwrap();
        let file = render_piece(Composition::MajorChord, dir.path(), Some(0.01)).unwrap();

        assert!(file.path.ends_with("major_chord.wav"));
        assert_eq!(file.frames, 441);
        assert_eq!(file.channels, 1);
        assert!(dir.path().join("major_chord.wav").exists());
    }

    #[test]
    fn test_render_piece_reports_synthesis_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = render_piece(Composition::Overtones, dir.path(), Some(-1.0)).unwrap_err();
        assert_eq!(err.code, "SYNTH_001");
    }
}
