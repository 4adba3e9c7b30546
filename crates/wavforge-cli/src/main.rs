//! wavforge CLI - Command-line interface for tone synthesis
//!
//! This binary renders built-in compositions and arbitrary tones to 16-bit
//! PCM WAV files, and inspects existing WAV files.

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use wavforge_cli::commands;
use wavforge_cli::commands::tone::{parse_overtone, ToneParams, Waveform};
use wavforge_synth::Overtone;

/// wavforge - Waveform synthesis to 16-bit PCM WAV
#[derive(Parser)]
#[command(name = "wavforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render built-in compositions to WAV files
    Compose {
        /// Composition to render: perfect_fifth, perfect_fifth_panned, major_chord,
        /// overtones, or all
        #[arg(short, long, default_value = "all")]
        piece: String,

        /// Output directory (created if missing)
        #[arg(short, long, default_value = "output")]
        out_dir: String,

        /// Override every composition's duration in seconds
        #[arg(short, long)]
        duration: Option<f64>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Render a single waveform to a WAV file
    Tone {
        /// Waveform to render
        #[arg(short, long, value_enum, default_value_t = Waveform::Sine)]
        waveform: Waveform,

        /// Frequency in Hz
        #[arg(short, long, default_value_t = 440.0)]
        freq: f64,

        /// Peak amplitude
        #[arg(short, long, default_value_t = 0.5)]
        amplitude: f64,

        /// Duration in seconds
        #[arg(short, long, default_value_t = 1.0)]
        duration: f64,

        /// Number of channels (the signal is duplicated on each)
        #[arg(short, long, default_value_t = 1)]
        channels: u16,

        /// Normalize the peak to this amplitude before encoding
        #[arg(short, long)]
        normalize: Option<f64>,

        /// Overtone as <freq_factor>:<amp_factor> (repeatable, used with --waveform overtones)
        #[arg(long = "overtone", value_parser = parse_overtone)]
        overtones: Vec<Overtone>,

        /// Output WAV path
        #[arg(short, long)]
        output: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Decode a WAV file and report channels, duration, peaks and PCM hash
    Inspect {
        /// Path to the WAV file
        #[arg(short, long)]
        input: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compose {
            piece,
            out_dir,
            duration,
            json,
        } => commands::compose::run(&piece, &out_dir, duration, json),
        Commands::Tone {
            waveform,
            freq,
            amplitude,
            duration,
            channels,
            normalize,
            overtones,
            output,
            json,
        } => {
            let params = ToneParams {
                waveform,
                freq,
                amplitude,
                duration,
                channels,
                normalize,
                overtones,
            };
            commands::tone::run(&params, &output, json)
        }
        Commands::Inspect { input, json } => commands::inspect::run(&input, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
