//! Shannon entropy screening for secret-like byte runs.
//!
//! A regex ruleset only catches shapes someone anticipated. This module
//! catches the rest statistically: contiguous runs drawn from the base64
//! or hex alphabets that are long enough and random-looking enough to be
//! key material.

/// Entropy threshold above which a base64-alphabet run is considered
/// complex enough to be a potential key.
pub const BASE64_THRESHOLD: f64 = 4.5;

/// Entropy threshold above which a hex-alphabet run is considered
/// complex enough to be a potential key.
pub const HEX_THRESHOLD: f64 = 3.0;

/// Runs shorter than this are never considered.
pub const MIN_RUN_LEN: usize = 20;

/// Outcome of screening one block of data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntropyCheck {
    /// Number of flagged runs across both alphabet passes. A stretch
    /// flagged by both passes counts twice.
    pub runs: usize,
}

impl EntropyCheck {
    /// True iff no run was flagged by either pass.
    pub fn is_clean(&self) -> bool {
        self.runs == 0
    }
}

/// Calculate the Shannon entropy for a block of data.
///
/// Empty input has zero entropy by definition.
pub fn shannon_entropy(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let mut frequency = [0u64; 256];
    for &byte in data {
        frequency[byte as usize] += 1;
    }

    let data_len = data.len() as f64;
    let mut entropy = 0.0;

    for &freq in &frequency {
        if freq > 0 {
            let probability = freq as f64 / data_len;
            entropy -= probability * probability.log2();
        }
    }

    entropy
}

/// Screen a block of data for high entropy runs.
///
/// Two independent passes over the same bytes: base64-alphabet runs
/// checked against [`BASE64_THRESHOLD`], hex-alphabet runs against
/// [`HEX_THRESHOLD`]. Hex is a subset of the base64 alphabet, so one
/// stretch of input can legitimately be flagged by both passes.
pub fn check(data: &[u8]) -> EntropyCheck {
    let runs = flagged_runs(data, is_base64_byte, BASE64_THRESHOLD)
        + flagged_runs(data, is_hex_byte, HEX_THRESHOLD);
    EntropyCheck { runs }
}

/// Count maximal alphabet runs of at least [`MIN_RUN_LEN`] bytes whose
/// entropy exceeds `threshold`.
fn flagged_runs(data: &[u8], in_alphabet: fn(u8) -> bool, threshold: f64) -> usize {
    let mut flagged = 0;
    let mut run_start = None;

    for (i, &byte) in data.iter().enumerate() {
        match (run_start, in_alphabet(byte)) {
            (None, true) => run_start = Some(i),
            (Some(start), false) => {
                if is_suspect(&data[start..i], threshold) {
                    flagged += 1;
                }
                run_start = None;
            }
            _ => {}
        }
    }

    if let Some(start) = run_start {
        if is_suspect(&data[start..], threshold) {
            flagged += 1;
        }
    }

    flagged
}

fn is_suspect(run: &[u8], threshold: f64) -> bool {
    run.len() >= MIN_RUN_LEN && shannon_entropy(run) > threshold
}

fn is_base64_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'+' || b == b'/' || b == b'='
}

fn is_hex_byte(b: u8) -> bool {
    b.is_ascii_hexdigit()
}
