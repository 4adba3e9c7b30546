//! End-to-end tests for the tone and inspect commands.

use pretty_assertions::assert_eq;
use std::fs;
use std::process::ExitCode;

use wavforge_cli::commands::inspect::{self, inspect_bytes};
use wavforge_cli::commands::tone::{self, ToneParams, Waveform};
use wavforge_synth::{convert_to_bytes, pcm_hash, square, Overtone};
use wavforge_tests::wav_reader::read_wav;

fn tone(waveform: Waveform) -> ToneParams {
    ToneParams {
        waveform,
        freq: 441.0,
        amplitude: 0.5,
        duration: 0.02,
        channels: 1,
        normalize: None,
        overtones: vec![],
    }
}

#[test]
fn square_tone_round_trips_through_hound() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("square.wav");

    let code = tone::run(&tone(Waveform::Square), path.to_str().unwrap(), false).unwrap();
    assert_eq!(code, ExitCode::SUCCESS);

    let wav = read_wav(&path).unwrap();
    assert_eq!(wav.spec.channels, 1);
    assert_eq!(wav.frames(), 882);
    assert_eq!(wav.pcm_bytes(), convert_to_bytes(&square(441.0, 0.5, 0.02).unwrap()));
    assert!(wav
        .samples
        .iter()
        .all(|&s| s == 16383 || s == -16383 || s == 0));
}

#[test]
fn stereo_tone_duplicates_signal() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stereo.wav");

    let mut params = tone(Waveform::Sine);
    params.channels = 2;
    tone::run(&params, path.to_str().unwrap(), true).unwrap();

    let wav = read_wav(&path).unwrap();
    assert_eq!(wav.spec.channels, 2);
    assert_eq!(wav.channel(0), wav.channel(1));
}

#[test]
fn normalized_overtones_reach_target_peak() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("overtones.wav");

    let mut params = tone(Waveform::Overtones);
    params.freq = 220.0;
    params.overtones = Overtone::decaying_series(6, 0.5);
    params.normalize = Some(0.89);
    tone::run(&params, path.to_str().unwrap(), true).unwrap();

    let wav = read_wav(&path).unwrap();
    let peak = wav.samples.iter().map(|s| s.unsigned_abs()).max().unwrap();
    // 0.89 * 32767 = 29162.63, truncated
    assert_eq!(peak, 29162);
}

#[test]
fn tone_failures_exit_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("silent.wav");

    let mut params = tone(Waveform::Sine);
    params.amplitude = 0.0;
    params.normalize = Some(1.0);

    assert!(tone::run(&params, path.to_str().unwrap(), false).is_err());
    assert_eq!(
        tone::run(&params, path.to_str().unwrap(), true).unwrap(),
        ExitCode::from(1)
    );
    assert!(!path.exists());
}

#[test]
fn overlong_tone_reports_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("forever.wav");

    let mut params = tone(Waveform::Sine);
    params.duration = 1e30;

    let err = tone::run(&params, path.to_str().unwrap(), false).unwrap_err();
    assert!(err.to_string().contains("SYNTH_001"));
    assert_eq!(
        tone::run(&params, path.to_str().unwrap(), true).unwrap(),
        ExitCode::from(1)
    );
    assert!(!path.exists());
}

#[test]
fn inspect_reports_written_tone() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("inspect.wav");

    let mut params = tone(Waveform::Sine);
    params.channels = 3;
    params.duration = 0.5;
    tone::run(&params, path.to_str().unwrap(), true).unwrap();

    let bytes = fs::read(&path).unwrap();
    let result = inspect_bytes(&bytes).unwrap();
    assert_eq!(result.channels, 3);
    assert_eq!(result.frames, 22050);
    assert!((result.duration_seconds - 0.5).abs() < 1e-12);
    assert_eq!(result.channel_peaks.len(), 3);
    for channel_peak in &result.channel_peaks {
        assert!((channel_peak - 0.5).abs() < 1e-3);
    }

    let wav = read_wav(&path).unwrap();
    assert_eq!(result.pcm_hash, pcm_hash(&wav.pcm_bytes()));

    assert_eq!(
        inspect::run(path.to_str().unwrap(), true).unwrap(),
        ExitCode::SUCCESS
    );
}

#[test]
fn inspect_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.wav");

    assert!(inspect::run(path.to_str().unwrap(), false).is_err());
    assert_eq!(
        inspect::run(path.to_str().unwrap(), true).unwrap(),
        ExitCode::from(1)
    );
}

#[test]
fn inspect_reads_hound_written_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hound.wav");

    let spec = hound::WavSpec {
        channels: 2,
        sample_rate: 44100,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for sample in [32767i16, -16384, 0, 8192] {
        writer.write_sample(sample).unwrap();
    }
    writer.finalize().unwrap();

    let result = inspect_bytes(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(result.channels, 2);
    assert_eq!(result.frames, 2);
    assert_eq!(result.channel_peaks, vec![1.0, 16384.0 / 32767.0]);
}

#[test]
fn inspect_reads_multichannel_hound_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("surround.wav");

    // hound may use WAVE_FORMAT_EXTENSIBLE for more than two channels
    let spec = hound::WavSpec {
        channels: 4,
        sample_rate: 44100,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for frame in 0..10i16 {
        for channel in 0..4i16 {
            writer.write_sample(frame * 100 + channel).unwrap();
        }
    }
    writer.finalize().unwrap();

    let result = inspect_bytes(&fs::read(&path).unwrap()).unwrap();
    assert_eq!(result.channels, 4);
    assert_eq!(result.frames, 10);
    assert_eq!(result.channel_peaks[3], 903.0 / 32767.0);
}
