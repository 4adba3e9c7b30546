//! Determinism checks for rendered output.
//!
//! A render is deterministic when every run produces byte-identical output.

use std::fmt;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Size of the first run's output in bytes.
    pub output_size: usize,
    /// BLAKE3 hash of the first run's output.
    pub hash: String,
    /// First difference found, if any.
    pub diff_info: Option<DiffInfo>,
}

/// The first byte difference found between runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffInfo {
    /// Byte offset of the difference, or the shorter length on a size mismatch.
    pub offset: usize,
    /// Value from the first run (None past its end).
    pub expected: Option<u8>,
    /// Value from the differing run (None past its end).
    pub actual: Option<u8>,
    /// Which run (0-indexed) differed from run 0.
    pub run_index: usize,
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "difference at byte {}: expected {:?}, got {:?} (run {})",
            self.offset, self.expected, self.actual, self.run_index
        )
    }
}

/// Runs `generate` `runs` times and compares every output with the first.
///
/// # Panics
/// Panics if `runs` is zero.
pub fn verify_determinism<F>(mut generate: F, runs: usize) -> DeterminismResult
where
    F: FnMut() -> Vec<u8>,
{
    assert!(runs > 0, "at least one run is required");

    let reference = generate();
    let hash = blake3::hash(&reference).to_hex().to_string();

    let mut diff_info = None;
    for run_index in 1..runs {
        let output = generate();
        if let Some((offset, expected, actual)) = first_difference(&reference, &output) {
            diff_info = Some(DiffInfo {
                offset,
                expected,
                actual,
                run_index,
            });
            break;
        }
    }

    DeterminismResult {
        is_deterministic: diff_info.is_none(),
        runs,
        output_size: reference.len(),
        hash,
        diff_info,
    }
}

fn first_difference(a: &[u8], b: &[u8]) -> Option<(usize, Option<u8>, Option<u8>)> {
    let shared = a.len().min(b.len());
    if let Some(offset) = (0..shared).find(|&i| a[i] != b[i]) {
        return Some((offset, Some(a[offset]), Some(b[offset])));
    }
    if a.len() != b.len() {
        return Some((shared, a.get(shared).copied(), b.get(shared).copied()));
    }
    None
}
