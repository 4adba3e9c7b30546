//! Property-based tests for the synthesis pipeline using proptest.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wavforge-tests --test proptest_pipeline
//! ```

use proptest::prelude::*;

use wavforge_synth::{
    convert_to_bytes, convert_to_samples, merge_channels, normalize, peak, sample_count,
    separate_channels, sine, sine_with_overtones, square, Overtone, SynthError,
};

const STEP: f64 = 1.0 / 32767.0;

/// Durations up to 50 ms keep each case cheap.
fn short_duration() -> impl Strategy<Value = f64> {
    0.0..0.05f64
}

fn signal(len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-2.0..2.0f64, len)
}

// ============================================================================
// 1. Waveform generators
// ============================================================================

proptest! {
    /// Sine length follows ceil(duration * 44100).
    #[test]
    fn sine_length_matches_sample_count(
        freq in -2000.0..2000.0f64,
        amp in -1.0..1.0f64,
        duration in short_duration()
    ) {
        let samples = sine(freq, amp, duration).unwrap();
        prop_assert_eq!(samples.len(), (duration * 44100.0).ceil() as usize);
        prop_assert_eq!(samples.len(), sample_count(duration).unwrap());
    }

    /// Sine always starts at zero phase.
    #[test]
    fn sine_starts_at_zero(
        freq in -2000.0..2000.0f64,
        amp in -1.0..1.0f64,
        duration in 0.001..0.05f64
    ) {
        let samples = sine(freq, amp, duration).unwrap();
        prop_assert_eq!(samples[0], 0.0);
    }

    /// Square values are -a, 0 or a.
    #[test]
    fn square_has_three_levels(
        freq in 1.0..5000.0f64,
        amp in -1.0..1.0f64,
        duration in short_duration()
    ) {
        for s in square(freq, amp, duration).unwrap() {
            prop_assert!(s == amp || s == -amp || s == 0.0, "unexpected sample {}", s);
        }
    }

    /// Negative durations are always rejected.
    #[test]
    fn negative_duration_rejected(duration in -100.0..-1e-9f64) {
        let rejected = matches!(
            sine(440.0, 1.0, duration),
            Err(SynthError::InvalidParameter { .. })
        );
        prop_assert!(rejected);
    }

    /// A single overtone equals the manual sum of two sines exactly.
    #[test]
    fn overtone_equals_manual_sum(
        root in 20.0..2000.0f64,
        factor in 1.0..8.0f64,
        amp_factor in 0.0..1.0f64,
        duration in short_duration()
    ) {
        let additive =
            sine_with_overtones(root, 1.0, &[Overtone::new(factor, amp_factor)], duration).unwrap();
        let fundamental = sine(root, 1.0, duration).unwrap();
        let partial = sine(root * factor, amp_factor, duration).unwrap();
        let manual: Vec<f64> = fundamental.iter().zip(&partial).map(|(a, b)| a + b).collect();
        prop_assert_eq!(additive, manual);
    }
}

// ============================================================================
// 2. Normalization
// ============================================================================

proptest! {
    /// The normalized peak equals the target.
    #[test]
    fn normalize_hits_target(
        samples in prop::collection::vec(-10.0..10.0f64, 1..200),
        target in 0.01..1.0f64
    ) {
        prop_assume!(peak(&samples) > 1e-6);
        let normalized = normalize(&samples, target).unwrap();
        prop_assert!((peak(&normalized) - target).abs() <= 1e-12);
    }

    /// Silence of any length cannot be normalized.
    #[test]
    fn normalize_rejects_silence(len in 0usize..100, target in 0.01..1.0f64) {
        let rejected = matches!(
            normalize(&vec![0.0; len], target),
            Err(SynthError::DegenerateSignal { .. })
        );
        prop_assert!(rejected);
    }
}

// ============================================================================
// 3. Channel interleaving
// ============================================================================

proptest! {
    /// separate(merge(channels)) is the identity for equal-length channels.
    #[test]
    fn merge_separate_round_trip(
        (num_channels, channels) in (1usize..6, 0usize..64).prop_flat_map(|(c, len)| {
            (Just(c), prop::collection::vec(signal(len), c))
        })
    ) {
        let merged = merge_channels(&channels).unwrap();
        prop_assert_eq!(merged.len(), num_channels * channels[0].len());
        prop_assert_eq!(separate_channels(&merged, num_channels).unwrap(), channels);
    }

    /// Every channel gets floor(len / channels) samples.
    #[test]
    fn separate_truncates_partial_frames(
        samples in prop::collection::vec(-1.0..1.0f64, 0..100),
        num_channels in 1usize..8
    ) {
        let channels = separate_channels(&samples, num_channels).unwrap();
        prop_assert_eq!(channels.len(), num_channels);
        for channel in &channels {
            prop_assert_eq!(channel.len(), samples.len() / num_channels);
        }
    }
}

// ============================================================================
// 4. PCM codec
// ============================================================================

proptest! {
    /// Encoding emits two bytes per sample.
    #[test]
    fn pcm_length_is_twice_sample_count(samples in prop::collection::vec(any::<f64>(), 0..200)) {
        prop_assert_eq!(convert_to_bytes(&samples).len(), 2 * samples.len());
    }

    /// Round trip stays within one quantization step of the clipped input.
    #[test]
    fn pcm_round_trip_within_one_step(samples in prop::collection::vec(-1.5..1.5f64, 0..200)) {
        let decoded = convert_to_samples(&convert_to_bytes(&samples)).unwrap();
        prop_assert_eq!(decoded.len(), samples.len());
        for (original, restored) in samples.iter().zip(&decoded) {
            let clipped = original.clamp(-1.0, 1.0);
            prop_assert!((clipped - restored).abs() <= STEP + 1e-15);
            // Truncation never increases magnitude
            prop_assert!(restored.abs() <= clipped.abs() + 1e-15);
        }
    }

    /// Arbitrary even-length buffers decode; odd-length buffers are rejected.
    #[test]
    fn decode_arbitrary_bytes(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        match convert_to_samples(&bytes) {
            Ok(samples) => {
                prop_assert_eq!(bytes.len() % 2, 0);
                prop_assert_eq!(samples.len(), bytes.len() / 2);
                prop_assert!(samples.iter().all(|s| s.abs() <= 32768.0 / 32767.0));
            }
            Err(err) => {
                prop_assert_eq!(bytes.len() % 2, 1);
                prop_assert_eq!(err, SynthError::MalformedBuffer { len: bytes.len() });
            }
        }
    }

    /// Decoding then re-encoding any buffer without -32768 is lossless.
    #[test]
    fn decode_encode_is_lossless(values in prop::collection::vec(-32767i16..=32767, 0..200)) {
        let bytes: Vec<u8> = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        let samples = convert_to_samples(&bytes).unwrap();
        prop_assert_eq!(convert_to_bytes(&samples), bytes);
    }
}
