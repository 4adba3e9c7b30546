//! Inspect command implementation
//!
//! Decodes a 16-bit PCM WAV file and reports its layout, per-channel peaks
//! and PCM hash.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::process::ExitCode;
use wavforge_synth::{convert_to_samples, pcm_hash, peak, separate_channels};

use super::json_output::{error_codes, print_json, InspectOutput, InspectResult, JsonError};
use super::synth_error_to_json;
use crate::wav::{extract_pcm_data, read_wav_format};

/// Run the inspect command
///
/// # Arguments
/// * `input` - Path to the WAV file
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 if the file decoded, 1 otherwise
pub fn run(input: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(input)
    } else {
        run_human(input)
    }
}

/// Run inspect with human-readable (colored) output
fn run_human(input: &str) -> Result<ExitCode> {
    println!("{} {}", "Inspecting:".cyan().bold(), input);

    let bytes = fs::read(input).with_context(|| format!("failed to read {}", input))?;
    let result = inspect_bytes(&bytes).map_err(|e| anyhow::anyhow!("[{}] {}", e.code, e.message))?;

    println!("{} {}", "Channels:".cyan().bold(), result.channels);
    println!("{} {}", "Frames:".cyan().bold(), result.frames);
    println!(
        "{} {:.3}s",
        "Duration:".cyan().bold(),
        result.duration_seconds
    );
    for (channel, channel_peak) in result.channel_peaks.iter().enumerate() {
        println!(
            "  {} {:.4}",
            format!("Peak ch{}:", channel).dimmed(),
            channel_peak
        );
    }
    println!("{} {}", "PCM hash:".dimmed(), result.pcm_hash.dimmed());

    Ok(ExitCode::SUCCESS)
}

/// Run inspect with machine-readable JSON output
fn run_json(input: &str) -> Result<ExitCode> {
    let outcome = fs::read(input)
        .map_err(|e| {
            JsonError::new(
                error_codes::FILE_READ,
                format!("failed to read {}: {}", input, e),
            )
        })
        .and_then(|bytes| inspect_bytes(&bytes));

    let (output, code) = match outcome {
        Ok(result) => (
            InspectOutput {
                success: true,
                path: input.to_string(),
                result: Some(result),
                errors: vec![],
            },
            ExitCode::SUCCESS,
        ),
        Err(err) => (
            InspectOutput {
                success: false,
                path: input.to_string(),
                result: None,
                errors: vec![err],
            },
            ExitCode::from(1),
        ),
    };

    print_json(&output)?;
    Ok(code)
}

/// Decodes WAV bytes into an inspection summary.
pub fn inspect_bytes(bytes: &[u8]) -> Result<InspectResult, JsonError> {
    let unsupported = || {
        JsonError::new(
            error_codes::UNSUPPORTED_FORMAT,
            "not a 16-bit PCM WAV file at 44100 Hz",
        )
    };

    let format = read_wav_format(bytes).ok_or_else(unsupported)?;
    let pcm = extract_pcm_data(bytes).ok_or_else(unsupported)?;

    let samples = convert_to_samples(pcm).map_err(|e| synth_error_to_json(&e))?;
    let channels =
        separate_channels(&samples, format.channels as usize).map_err(|e| synth_error_to_json(&e))?;

    Ok(InspectResult {
        channels: format.channels,
        frames: format.frame_count(pcm.len()),
        duration_seconds: format.duration_seconds(pcm.len()),
        channel_peaks: channels.iter().map(|c| peak(c)).collect(),
        pcm_hash: pcm_hash(pcm),
    })
}
