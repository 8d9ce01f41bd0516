//! Pipeline configuration.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::ConfigError;
use crate::utils::IdStrategy;

/// Configuration for a [`Pipeline`](crate::pipeline::Pipeline).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Pipeline name, used in logs and events.
    #[serde(default = "default_name")]
    pub name: String,
    /// How processed record ids are allocated.
    #[serde(default)]
    pub id_strategy: IdStrategy,
    /// Whether lifecycle events are logged through `tracing`.
    #[serde(default)]
    pub log_events: bool,
}

fn default_name() -> String {
    "user-pipeline".to_string()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            id_strategy: IdStrategy::default(),
            log_events: false,
        }
    }
}

impl PipelineConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Sets the pipeline name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the id strategy.
    #[must_use]
    pub fn with_id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.id_strategy = strategy;
        self
    }

    /// Enables or disables event logging.
    #[must_use]
    pub fn with_log_events(mut self, enabled: bool) -> Self {
        self.log_events = enabled;
        self
    }
}
