//! In-memory source returning a fixed batch.

use async_trait::async_trait;

use super::Source;
use crate::core::RawRecord;
use crate::errors::FetchFailure;

/// A side-effect-free source that always returns the same records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSource {
    records: Vec<RawRecord>,
}

impl StaticSource {
    /// Creates a source over the given records.
    #[must_use]
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    /// The demo dataset. The last record has an obfuscated `@` and is
    /// rejected by [`EmailValidator`](crate::validators::EmailValidator).
    #[must_use]
    pub fn sample() -> Self {
        Self::new(vec![
            RawRecord::new("simon@arrow-kt.io", "Simon"),
            RawRecord::new("raul@arrow-kt.io", "Raul"),
            RawRecord::new("jorge[at]arrow-kt.io", "Jorge"),
        ])
    }

    /// Returns the number of records this source yields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if this source yields no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<RawRecord> for StaticSource {
    fn from_iter<I: IntoIterator<Item = RawRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[async_trait]
impl Source for StaticSource {
    async fn fetch_all(&self) -> Result<Vec<RawRecord>, FetchFailure> {
        Ok(self.records.clone())
    }
}
