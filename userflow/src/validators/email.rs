//! Email shape validation.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use super::Validator;
use crate::config::PipelineConfig;
use crate::core::{ProcessedRecord, RawRecord};
use crate::errors::ValidationFailure;
use crate::utils::IdStrategy;

// `<local>@<rest>`: a non-empty local part without '@', then a non-empty remainder.
// `(?s)` lets the remainder span newlines, the same as `[^@]` does for the local part.
#[allow(clippy::expect_used)]
static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^[^@]+@.+$").expect("hard-coded regular expression to be valid")
});

/// Returns true if `email` has a literal `@` separating two non-empty parts.
///
/// This is a shape check only; it does not attempt RFC 5322 compliance.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_SHAPE.is_match(email)
}

/// Validates records by the shape of their email and assigns each a fresh id.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailValidator {
    id_strategy: IdStrategy,
}

impl EmailValidator {
    /// Creates a validator using the default id strategy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator from pipeline configuration.
    #[must_use]
    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new().with_id_strategy(config.id_strategy)
    }

    /// Sets the id strategy.
    #[must_use]
    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    /// Returns the id strategy.
    #[must_use]
    pub fn id_strategy(&self) -> IdStrategy {
        self.id_strategy
    }
}

#[async_trait]
impl Validator for EmailValidator {
    async fn validate_one(&self, record: RawRecord) -> Result<ProcessedRecord, ValidationFailure> {
        ProcessedRecord::from_raw(self.id_strategy.generate(), record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_email_shapes() {
        assert!(is_valid_email("simon@arrow-kt.io"));
        assert!(is_valid_email("a@b"));
        assert!(is_valid_email("first.last+tag@sub.example.com"));
        assert!(is_valid_email("a@b@c"));
    }

    #[test]
    fn test_invalid_email_shapes() {
        assert!(!is_valid_email("jorge[at]arrow-kt.io"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("@arrow-kt.io"));
        assert!(!is_valid_email("simon@"));
        assert!(!is_valid_email("@"));
        assert!(!is_valid_email("no-at-sign"));
    }

    #[test]
    fn test_newlines_are_ordinary_characters_on_both_sides() {
        assert!(is_valid_email("a@b\nc"));
        assert!(is_valid_email("a@\n"));
        assert!(is_valid_email("a\nb@c"));
        assert!(is_valid_email("\n@\n"));
        assert!(!is_valid_email("a\nb"));
        assert!(!is_valid_email("\n@"));
        assert!(!is_valid_email("@\n"));
    }

    #[test]
    fn test_validate_one_in_sync_context() {
        let validator = EmailValidator::new();
        let record = tokio_test::block_on(
            validator.validate_one(RawRecord::new("raul@arrow-kt.io", "Raul")),
        )
        .unwrap();

        assert_eq!(record.email(), "raul@arrow-kt.io");
        assert_eq!(record.name(), "Raul");
    }

    #[tokio::test]
    async fn test_validate_one_rejects_obfuscated_at() {
        let validator = EmailValidator::new();
        let result = validator
            .validate_one(RawRecord::new("jorge[at]arrow-kt.io", "Jorge"))
            .await;

        assert_eq!(result, Err(ValidationFailure));
    }

    #[tokio::test]
    async fn test_validate_one_is_stable_for_equal_input() {
        let validator = EmailValidator::new();
        let inputs = [
            RawRecord::new("a@b.com", "A"),
            RawRecord::new("jorge[at]arrow-kt.io", "Jorge"),
        ];

        for raw in inputs {
            let first = validator.validate_one(raw.clone()).await;
            let second = validator.validate_one(raw).await;
            assert_eq!(first.is_ok(), second.is_ok());

            if let (Ok(first), Ok(second)) = (first, second) {
                assert_ne!(first.id(), second.id());
                assert_eq!(first.email(), second.email());
            }
        }
    }

    #[tokio::test]
    async fn test_validate_one_uses_id_strategy() {
        let validator = EmailValidator::new().with_id_strategy(IdStrategy::Random);
        let record = validator
            .validate_one(RawRecord::new("a@b.com", "A"))
            .await
            .unwrap();

        assert_eq!(record.id().get_version_num(), 4);
    }

    #[test]
    fn test_from_config() {
        let config = PipelineConfig::new().with_id_strategy(IdStrategy::Random);
        assert_eq!(
            EmailValidator::from_config(&config).id_strategy(),
            IdStrategy::Random
        );
    }
}
