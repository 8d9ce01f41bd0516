//! Error types for the userflow pipeline.
//!
//! The pipeline has exactly two terminal failure kinds: the source could not
//! produce any records, or a record was rejected by the validator. Neither
//! carries a payload; the failing record and the already validated prefix are
//! dropped on purpose.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The source could not produce its batch of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Error)]
#[error("failed to fetch records")]
pub struct FetchFailure;

/// A record failed the validity predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Error)]
#[error("record failed validation")]
pub struct ValidationFailure;

/// The unified pipeline-level failure.
///
/// Rendering is left to the host, which is expected to match on this
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The source failed before any record was validated.
    #[error("Fetching Error!")]
    FetchFailure,

    /// At least one fetched record was rejected.
    #[error("Processing Error!")]
    ValidationFailure,
}

impl FailureKind {
    /// Returns a stable machine-readable code for this failure.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::FetchFailure => "FETCH_FAILURE",
            Self::ValidationFailure => "VALIDATION_FAILURE",
        }
    }
}

impl From<FetchFailure> for FailureKind {
    fn from(_: FetchFailure) -> Self {
        Self::FetchFailure
    }
}

impl From<ValidationFailure> for FailureKind {
    fn from(_: ValidationFailure) -> Self {
        Self::ValidationFailure
    }
}

/// Error raised while loading a [`PipelineConfig`](crate::config::PipelineConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The config document is not valid JSON for the expected shape.
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_kind_from_fetch_failure() {
        assert_eq!(FailureKind::from(FetchFailure), FailureKind::FetchFailure);
    }

    #[test]
    fn test_failure_kind_from_validation_failure() {
        assert_eq!(
            FailureKind::from(ValidationFailure),
            FailureKind::ValidationFailure
        );
    }

    #[test]
    fn test_failure_kind_messages_are_distinct() {
        assert_eq!(FailureKind::FetchFailure.to_string(), "Fetching Error!");
        assert_eq!(FailureKind::ValidationFailure.to_string(), "Processing Error!");
    }

    #[test]
    fn test_failure_kind_codes() {
        assert_eq!(FailureKind::FetchFailure.code(), "FETCH_FAILURE");
        assert_eq!(FailureKind::ValidationFailure.code(), "VALIDATION_FAILURE");
    }

    #[test]
    fn test_failure_kind_serializes_snake_case() {
        let json = serde_json::to_string(&FailureKind::ValidationFailure).unwrap();
        assert_eq!(json, "\"validation_failure\"");

        let parsed: FailureKind = serde_json::from_str("\"fetch_failure\"").unwrap();
        assert_eq!(parsed, FailureKind::FetchFailure);
    }

    #[test]
    fn test_question_mark_converts_failures() {
        fn fetch() -> Result<Vec<u8>, FetchFailure> {
            Err(FetchFailure)
        }

        fn run() -> Result<usize, FailureKind> {
            let records = fetch()?;
            Ok(records.len())
        }

        assert_eq!(run(), Err(FailureKind::FetchFailure));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::from(serde_json::from_str::<u8>("nope").unwrap_err());
        assert!(err.to_string().starts_with("invalid config:"));
    }
}
