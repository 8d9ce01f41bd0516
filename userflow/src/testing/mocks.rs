//! Test doubles for sources and validators.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::core::{ProcessedRecord, RawRecord};
use crate::errors::{FetchFailure, ValidationFailure};
use crate::sources::Source;
use crate::validators::Validator;

/// A source that always fails and counts its calls.
#[derive(Debug, Default)]
pub struct FailingSource {
    call_count: Mutex<usize>,
}

impl FailingSource {
    /// Creates a new failing source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of fetch attempts.
    #[must_use]
    pub fn call_count(&self) -> usize {
        *self.call_count.lock()
    }
}

#[async_trait]
impl Source for FailingSource {
    async fn fetch_all(&self) -> Result<Vec<RawRecord>, FetchFailure> {
        *self.call_count.lock() += 1;
        Err(FetchFailure)
    }
}

/// Wraps a source and counts calls to [`Source::fetch_all`].
#[derive(Debug)]
pub struct RecordingSource<S> {
    inner: S,
    call_count: Mutex<usize>,
}

impl<S: Source> RecordingSource<S> {
    /// Wraps `inner`.
    #[must_use]
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            call_count: Mutex::new(0),
        }
    }

    /// Returns the number of fetches.
    #[must_use]
    pub fn call_count(&self) -> usize {
        *self.call_count.lock()
    }
}

#[async_trait]
impl<S: Source> Source for RecordingSource<S> {
    async fn fetch_all(&self) -> Result<Vec<RawRecord>, FetchFailure> {
        *self.call_count.lock() += 1;
        self.inner.fetch_all().await
    }
}

/// Wraps a validator and counts calls to [`Validator::validate_one`].
///
/// Batch validation goes through the provided
/// [`Validator::validate_all`], so the counters observe exactly which records
/// were looked at before a batch aborted.
#[derive(Debug)]
pub struct CountingValidator<V> {
    inner: V,
    call_count: Mutex<usize>,
    accepted: Mutex<Vec<ProcessedRecord>>,
}

impl<V: Validator> CountingValidator<V> {
    /// Wraps `inner`.
    #[must_use]
    pub fn new(inner: V) -> Self {
        Self {
            inner,
            call_count: Mutex::new(0),
            accepted: Mutex::new(Vec::new()),
        }
    }

    /// Returns the number of `validate_one` calls.
    #[must_use]
    pub fn call_count(&self) -> usize {
        *self.call_count.lock()
    }

    /// Returns every record the inner validator accepted, including ones
    /// later dropped because the batch aborted.
    #[must_use]
    pub fn accepted(&self) -> Vec<ProcessedRecord> {
        self.accepted.lock().clone()
    }

    /// Resets call tracking.
    pub fn reset(&self) {
        *self.call_count.lock() = 0;
        self.accepted.lock().clear();
    }
}

#[async_trait]
impl<V: Validator> Validator for CountingValidator<V> {
    async fn validate_one(&self, record: RawRecord) -> Result<ProcessedRecord, ValidationFailure> {
        *self.call_count.lock() += 1;
        let processed = self.inner.validate_one(record).await?;
        self.accepted.lock().push(processed.clone());
        Ok(processed)
    }
}
