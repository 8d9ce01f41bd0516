//! Core value types flowing through the pipeline.

mod records;

pub use records::{ProcessedRecord, RawRecord};
