//! The validator capability and its implementations.
//!
//! A validator turns one [`RawRecord`] into a [`ProcessedRecord`] or rejects
//! it. Batch validation is derived from the single-record operation and
//! stops at the first rejection.

use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;
use tracing::debug;

use crate::core::{ProcessedRecord, RawRecord};
use crate::errors::ValidationFailure;

mod email;

pub use email::{is_valid_email, EmailValidator};

/// Trait for record validators.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Validator: Send + Sync + Debug {
    /// Validates a single record.
    async fn validate_one(&self, record: RawRecord) -> Result<ProcessedRecord, ValidationFailure>;

    /// Validates a batch of records in order.
    ///
    /// Each record is awaited to completion before the next one starts. The
    /// first rejection is returned as-is; records after it are never
    /// validated and the already processed prefix is dropped.
    async fn validate_all(
        &self,
        records: Vec<RawRecord>,
    ) -> Result<Vec<ProcessedRecord>, ValidationFailure> {
        let mut processed = Vec::with_capacity(records.len());

        for (index, record) in records.into_iter().enumerate() {
            match self.validate_one(record).await {
                Ok(record) => processed.push(record),
                Err(failure) => {
                    debug!(index, accepted = processed.len(), "Record rejected, aborting batch");
                    return Err(failure);
                }
            }
        }

        Ok(processed)
    }
}

#[async_trait]
impl<T: Validator + ?Sized> Validator for &T {
    async fn validate_one(&self, record: RawRecord) -> Result<ProcessedRecord, ValidationFailure> {
        (**self).validate_one(record).await
    }

    async fn validate_all(
        &self,
        records: Vec<RawRecord>,
    ) -> Result<Vec<ProcessedRecord>, ValidationFailure> {
        (**self).validate_all(records).await
    }
}

#[async_trait]
impl<T: Validator + ?Sized> Validator for Box<T> {
    async fn validate_one(&self, record: RawRecord) -> Result<ProcessedRecord, ValidationFailure> {
        (**self).validate_one(record).await
    }

    async fn validate_all(
        &self,
        records: Vec<RawRecord>,
    ) -> Result<Vec<ProcessedRecord>, ValidationFailure> {
        (**self).validate_all(records).await
    }
}

#[async_trait]
impl<T: Validator + ?Sized> Validator for Arc<T> {
    async fn validate_one(&self, record: RawRecord) -> Result<ProcessedRecord, ValidationFailure> {
        (**self).validate_one(record).await
    }

    async fn validate_all(
        &self,
        records: Vec<RawRecord>,
    ) -> Result<Vec<ProcessedRecord>, ValidationFailure> {
        (**self).validate_all(records).await
    }
}
