//! Source reading a JSON array of records from disk.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::Source;
use crate::core::RawRecord;
use crate::errors::FetchFailure;

/// Reads `[{"email": ..., "name": ...}, ...]` from a file on every fetch.
///
/// Read and parse errors are logged and collapsed into [`FetchFailure`].
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Creates a source for the given path. The file is not touched until
    /// the first fetch.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl Source for JsonFileSource {
    async fn fetch_all(&self) -> Result<Vec<RawRecord>, FetchFailure> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|err| {
            warn!(path = %self.path.display(), error = %err, "Failed to read records");
            FetchFailure
        })?;

        let records: Vec<RawRecord> = serde_json::from_slice(&bytes).map_err(|err| {
            warn!(path = %self.path.display(), error = %err, "Failed to parse records");
            FetchFailure
        })?;

        debug!(path = %self.path.display(), count = records.len(), "Fetched records");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_reads_records_in_order() {
        let file = write_temp(
            r#"[
                {"email": "simon@arrow-kt.io", "name": "Simon"},
                {"email": "jorge[at]arrow-kt.io", "name": "Jorge"}
            ]"#,
        );

        let records = JsonFileSource::new(file.path()).fetch_all().await.unwrap();
        assert_eq!(
            records,
            vec![
                RawRecord::new("simon@arrow-kt.io", "Simon"),
                RawRecord::new("jorge[at]arrow-kt.io", "Jorge"),
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_file_is_fetch_failure() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("missing.json"));

        assert_eq!(source.fetch_all().await, Err(FetchFailure));
    }

    #[tokio::test]
    async fn test_malformed_json_is_fetch_failure() {
        let file = write_temp(r#"[{"email": "a@b.com"}"#);
        assert_eq!(
            JsonFileSource::new(file.path()).fetch_all().await,
            Err(FetchFailure)
        );
    }

    #[tokio::test]
    async fn test_wrong_shape_is_fetch_failure() {
        let file = write_temp(r#"{"email": "a@b.com", "name": "A"}"#);
        assert_eq!(
            JsonFileSource::new(file.path()).fetch_all().await,
            Err(FetchFailure)
        );
    }
}
