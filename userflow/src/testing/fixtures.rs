//! Record fixtures.

use crate::core::RawRecord;

/// The demo batch: two valid records followed by one with an obfuscated `@`.
#[must_use]
pub fn sample_records() -> Vec<RawRecord> {
    vec![
        RawRecord::new("simon@arrow-kt.io", "Simon"),
        RawRecord::new("raul@arrow-kt.io", "Raul"),
        RawRecord::new("jorge[at]arrow-kt.io", "Jorge"),
    ]
}

/// `count` records with distinct, well-formed emails.
#[must_use]
pub fn valid_records(count: usize) -> Vec<RawRecord> {
    (0..count)
        .map(|i| RawRecord::new(format!("user{i}@example.com"), format!("User {i}")))
        .collect()
}
