//! UUID generation for processed records.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a new UUID v4.
#[must_use]
pub fn generate_uuid() -> Uuid {
    Uuid::new_v4()
}

/// Generates a new UUID v7 (time-ordered).
#[must_use]
pub fn generate_uuid_v7() -> Uuid {
    Uuid::now_v7()
}

/// How fresh record identifiers are allocated.
///
/// Both strategies are non-deterministic with respect to the record being
/// processed; two calls never return the same id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdStrategy {
    /// Fully random UUID v4.
    Random,
    /// Sortable UUID v7, monotonic within a process.
    #[default]
    TimeOrdered,
}

impl IdStrategy {
    /// Allocates a new identifier.
    #[must_use]
    pub fn generate(self) -> Uuid {
        match self {
            Self::Random => generate_uuid(),
            Self::TimeOrdered => generate_uuid_v7(),
        }
    }
}
