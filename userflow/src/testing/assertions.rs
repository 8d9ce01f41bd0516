//! Assertions over processed batches.

use std::collections::HashSet;

use crate::core::{ProcessedRecord, RawRecord};

/// Asserts that no two records share an id.
pub fn assert_unique_ids(records: &[ProcessedRecord]) {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        assert!(
            seen.insert(record.id()),
            "Duplicate id {} for {}",
            record.id(),
            record.email()
        );
    }
}

/// Asserts that `output` holds the same emails and names as `input`, position by position.
pub fn assert_order_preserved(input: &[RawRecord], output: &[ProcessedRecord]) {
    assert_eq!(
        input.len(),
        output.len(),
        "Expected {} records, got {}",
        input.len(),
        output.len()
    );

    for (index, (raw, processed)) in input.iter().zip(output).enumerate() {
        assert_eq!(
            (raw.email(), raw.name()),
            (processed.email(), processed.name()),
            "Record {index} out of order"
        );
    }
}
