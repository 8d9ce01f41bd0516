//! Pipeline lifecycle events and sinks.

mod sink;

pub use sink::{CollectingEventSink, EventSink, LoggingEventSink, NoOpEventSink};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// What happened during a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PipelineEventKind {
    /// The run started.
    RunStarted,
    /// The source returned its batch.
    FetchCompleted {
        /// Number of raw records fetched.
        records: usize,
    },
    /// The source failed; no validation will happen.
    FetchFailed,
    /// A record was rejected; the run aborts.
    ValidationFailed,
    /// Every record was validated.
    RunCompleted {
        /// Number of processed records returned.
        records: usize,
    },
}

impl PipelineEventKind {
    /// Returns the dotted event name, e.g. `"pipeline.fetch_completed"`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::RunStarted => "pipeline.run_started",
            Self::FetchCompleted { .. } => "pipeline.fetch_completed",
            Self::FetchFailed => "pipeline.fetch_failed",
            Self::ValidationFailed => "pipeline.validation_failed",
            Self::RunCompleted { .. } => "pipeline.run_completed",
        }
    }

    /// Returns true for events that end a run with a failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::FetchFailed | Self::ValidationFailed)
    }
}

/// A single event emitted by a [`Pipeline`](crate::pipeline::Pipeline).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineEvent {
    /// Id of the run that emitted this event.
    pub run_id: Uuid,
    /// Name of the emitting pipeline.
    pub pipeline: String,
    /// When the event was emitted.
    pub timestamp: DateTime<Utc>,
    /// The event payload.
    #[serde(flatten)]
    pub kind: PipelineEventKind,
}

impl PipelineEvent {
    /// Creates an event stamped with the current time.
    #[must_use]
    pub fn new(run_id: Uuid, pipeline: impl Into<String>, kind: PipelineEventKind) -> Self {
        Self {
            run_id,
            pipeline: pipeline.into(),
            timestamp: Utc::now(),
            kind,
        }
    }
}
