#![allow(dead_code)]

use sqlspeaker_core::{Batch, split, split_batches};
pub use sqlspeaker_core::join_batches;

pub fn batches(script: &str) -> Vec<String> {
    split(script)
}

pub fn batch_values(script: &str) -> Vec<Batch> {
    split_batches(script)
}

/// Asserts that `script` splits into exactly `expected`.
pub fn assert_split(script: &str, expected: &[&str]) {
    let actual = split(script);
    assert_eq!(
        actual, expected,
        "Unexpected batches.\n  Script:   {script:?}\n  Expected: {expected:?}\n  Actual:   {actual:?}"
    );
}

/// Re-joins batches with a `GO` line between each pair.
pub fn rejoin(batches: &[String]) -> String {
    batches.join("GO\n")
}
