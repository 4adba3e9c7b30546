#![no_main]

use libfuzzer_sys::fuzz_target;
use wavforge_synth::{convert_to_bytes, convert_to_samples, SynthError};

fuzz_target!(|data: &[u8]| {
    match convert_to_samples(data) {
        Ok(samples) => {
            assert_eq!(samples.len(), data.len() / 2);
            let reencoded = convert_to_bytes(&samples);
            assert_eq!(reencoded.len(), data.len());

            // Only -32768 fails to survive the round trip; it clips to -32767
            for (original, restored) in data.chunks_exact(2).zip(reencoded.chunks_exact(2)) {
                let original = i16::from_le_bytes([original[0], original[1]]);
                let restored = i16::from_le_bytes([restored[0], restored[1]]);
                assert_eq!(original.max(-i16::MAX), restored);
            }
        }
        Err(err) => {
            assert_eq!(data.len() % 2, 1);
            assert_eq!(err, SynthError::MalformedBuffer { len: data.len() });
        }
    }
});
