//! Tone command implementation
//!
//! Renders a single waveform, optionally normalized, duplicated across the
//! requested number of channels.

use anyhow::Result;
use clap::ValueEnum;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use wavforge_synth::{
    merge_channels, normalize, sine, sine_with_overtones, square, Overtone, SynthError,
    SynthResult, MAX_CHANNELS,
};

use super::json_output::{print_json, RenderOutput};
use super::{print_written, synth_error_to_json, write_clip};
use crate::compositions::RenderedClip;

/// Waveform selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Waveform {
    /// Pure sine wave
    Sine,
    /// Square wave (silent on exact zero crossings)
    Square,
    /// Sine fundamental plus `--overtone` partials
    Overtones,
}

/// Parameters of the tone command.
#[derive(Debug, Clone, PartialEq)]
pub struct ToneParams {
    /// Waveform to render.
    pub waveform: Waveform,
    /// Frequency in Hz.
    pub freq: f64,
    /// Peak amplitude before normalization.
    pub amplitude: f64,
    /// Length in seconds.
    pub duration: f64,
    /// Number of output channels, each carrying the same signal.
    pub channels: u16,
    /// Optional normalization target.
    pub normalize: Option<f64>,
    /// Overtones for [`Waveform::Overtones`].
    pub overtones: Vec<Overtone>,
}

impl ToneParams {
    /// Renders the tone to PCM.
    pub fn render(&self) -> SynthResult<RenderedClip> {
        if self.channels > MAX_CHANNELS {
            return Err(SynthError::invalid_param(
                "channels",
                format!("must be at most {}, got {}", MAX_CHANNELS, self.channels),
            ));
        }

        let signal = match self.waveform {
            Waveform::Sine => sine(self.freq, self.amplitude, self.duration)?,
            Waveform::Square => square(self.freq, self.amplitude, self.duration)?,
            Waveform::Overtones => {
                sine_with_overtones(self.freq, self.amplitude, &self.overtones, self.duration)?
            }
        };

        let signal = match self.normalize {
            Some(target) => normalize(&signal, target)?,
            None => signal,
        };

        let channels = vec![signal; self.channels as usize];
        let frames = merge_channels(&channels)?;
        Ok(RenderedClip::from_interleaved(&frames, self.channels))
    }
}

/// Parses an overtone given as `<freq_factor>:<amp_factor>`, e.g. `2:0.5`.
pub fn parse_overtone(s: &str) -> Result<Overtone, String> {
    let (freq, amp) = s
        .split_once(':')
        .ok_or_else(|| format!("expected <freq_factor>:<amp_factor>, got '{}'", s))?;
    let freq_factor: f64 = freq
        .trim()
        .parse()
        .map_err(|e| format!("invalid frequency factor '{}': {}", freq, e))?;
    let amp_factor: f64 = amp
        .trim()
        .parse()
        .map_err(|e| format!("invalid amplitude factor '{}': {}", amp, e))?;
    Ok(Overtone::new(freq_factor, amp_factor))
}

/// Run the tone command
///
/// # Arguments
/// * `params` - Tone parameters
/// * `output` - Output WAV path
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 success, 1 synthesis or write error
pub fn run(params: &ToneParams, output: &str, json_output: bool) -> Result<ExitCode> {
    if !json_output {
        println!(
            "{} {:?} {} Hz, amplitude {}, {}s",
            "Rendering:".cyan().bold(),
            params.waveform,
            params.freq,
            params.amplitude,
            params.duration
        );
    }

    let result = params
        .render()
        .map_err(|e| synth_error_to_json(&e))
        .and_then(|clip| write_clip(Path::new(output), &clip));

    match result {
        Ok(file) => {
            if json_output {
                print_json(&RenderOutput {
                    success: true,
                    files: vec![file],
                    errors: vec![],
                })?;
            } else {
                print_written(&file);
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            if json_output {
                print_json(&RenderOutput {
                    success: false,
                    files: vec![],
                    errors: vec![err],
                })?;
                Ok(ExitCode::from(1))
            } else {
                anyhow::bail!("[{}] {}", err.code, err.message)
            }
        }
    }
}
