//! Testing utilities for userflow pipelines.
//!
//! This module provides:
//! - Call-counting sources and validators
//! - Record fixtures
//! - Assertions over processed batches

mod assertions;
mod fixtures;
mod mocks;

pub use assertions::{assert_order_preserved, assert_unique_ids};
pub use fixtures::{sample_records, valid_records};
pub use mocks::{CountingValidator, FailingSource, RecordingSource};
