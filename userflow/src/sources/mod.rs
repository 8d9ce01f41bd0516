//! The source capability and its implementations.
//!
//! A source produces the complete, ordered batch of raw records for one run.
//! It either succeeds with every record or fails wholesale; there is no
//! partial result.

use async_trait::async_trait;
use std::fmt::Debug;
use std::sync::Arc;

use crate::core::RawRecord;
use crate::errors::FetchFailure;

mod json_file;
mod static_source;

pub use json_file::JsonFileSource;
pub use static_source::StaticSource;

/// Trait for record sources.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Source: Send + Sync + Debug {
    /// Fetches every available record, preserving order.
    async fn fetch_all(&self) -> Result<Vec<RawRecord>, FetchFailure>;
}

#[async_trait]
impl<T: Source + ?Sized> Source for &T {
    async fn fetch_all(&self) -> Result<Vec<RawRecord>, FetchFailure> {
        (**self).fetch_all().await
    }
}

#[async_trait]
impl<T: Source + ?Sized> Source for Box<T> {
    async fn fetch_all(&self) -> Result<Vec<RawRecord>, FetchFailure> {
        (**self).fetch_all().await
    }
}

#[async_trait]
impl<T: Source + ?Sized> Source for Arc<T> {
    async fn fetch_all(&self) -> Result<Vec<RawRecord>, FetchFailure> {
        (**self).fetch_all().await
    }
}
