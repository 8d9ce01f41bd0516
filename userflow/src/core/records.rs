//! Raw and processed user records.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::errors::ValidationFailure;
use crate::validators::is_valid_email;

/// An unvalidated user record as produced by a [`Source`](crate::sources::Source).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawRecord {
    email: String,
    name: String,
}

impl RawRecord {
    /// Creates a new raw record.
    #[must_use]
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }

    /// Returns the unvalidated email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A validated user record carrying a freshly allocated id.
///
/// The email of a processed record always satisfies
/// [`is_valid_email`]; [`ProcessedRecord::from_raw`] is the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProcessedRecord {
    id: Uuid,
    email: String,
    name: String,
}

impl ProcessedRecord {
    /// Promotes a raw record, rejecting it if its email is malformed.
    pub fn from_raw(id: Uuid, raw: RawRecord) -> Result<Self, ValidationFailure> {
        if !is_valid_email(&raw.email) {
            return Err(ValidationFailure);
        }

        Ok(Self {
            id,
            email: raw.email,
            name: raw.name,
        })
    }

    /// Returns the record id.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the validated email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ProcessedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> [{}]", self.name, self.email, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::generate_uuid;

    #[test]
    fn test_raw_record_accessors() {
        let raw = RawRecord::new("simon@arrow-kt.io", "Simon");
        assert_eq!(raw.email(), "simon@arrow-kt.io");
        assert_eq!(raw.name(), "Simon");
    }

    #[test]
    fn test_raw_record_deserializes() {
        let raw: RawRecord =
            serde_json::from_str(r#"{"email": "a@b.com", "name": "A"}"#).unwrap();
        assert_eq!(raw, RawRecord::new("a@b.com", "A"));
    }

    #[test]
    fn test_from_raw_keeps_fields() {
        let id = generate_uuid();
        let processed = ProcessedRecord::from_raw(id, RawRecord::new("a@b.com", "A")).unwrap();

        assert_eq!(processed.id(), id);
        assert_eq!(processed.email(), "a@b.com");
        assert_eq!(processed.name(), "A");
    }

    #[test]
    fn test_from_raw_rejects_invalid_email() {
        let result = ProcessedRecord::from_raw(
            generate_uuid(),
            RawRecord::new("jorge[at]arrow-kt.io", "Jorge"),
        );
        assert_eq!(result, Err(ValidationFailure));
    }

    #[test]
    fn test_processed_record_serializes_id() {
        let id = generate_uuid();
        let processed = ProcessedRecord::from_raw(id, RawRecord::new("a@b.com", "A")).unwrap();
        let json = serde_json::to_value(&processed).unwrap();

        assert_eq!(json["id"], serde_json::json!(id.to_string()));
        assert_eq!(json["email"], "a@b.com");
    }

    #[test]
    fn test_processed_record_display() {
        let id = generate_uuid();
        let processed = ProcessedRecord::from_raw(id, RawRecord::new("a@b.com", "A")).unwrap();
        assert_eq!(processed.to_string(), format!("A <a@b.com> [{id}]"));
    }
}
