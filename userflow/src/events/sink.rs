//! Event sink trait and implementations.

use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::{debug, info, warn, Level};

use super::{PipelineEvent, PipelineEventKind};

/// Trait for sinks receiving pipeline lifecycle events.
///
/// Emitting must never fail the run; implementations swallow their own errors.
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Emits an event.
    async fn emit(&self, event: PipelineEvent);
}

/// A no-op event sink that discards all events.
///
/// Used as the default when no sink is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpEventSink;

#[async_trait]
impl EventSink for NoOpEventSink {
    async fn emit(&self, _event: PipelineEvent) {
        // Intentionally empty - discards all events
    }
}

/// An event sink that logs events using the tracing framework.
///
/// Failure events are always logged at `WARN`.
#[derive(Debug, Clone)]
pub struct LoggingEventSink {
    level: Level,
}

impl Default for LoggingEventSink {
    fn default() -> Self {
        Self { level: Level::INFO }
    }
}

impl LoggingEventSink {
    /// Creates a new logging event sink with the specified level.
    #[must_use]
    pub fn new(level: Level) -> Self {
        Self { level }
    }

    /// Creates a debug-level logging sink.
    #[must_use]
    pub fn debug() -> Self {
        Self::new(Level::DEBUG)
    }

    /// Returns the level used for non-failure events.
    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    fn log_event(&self, event: &PipelineEvent) {
        let records = match event.kind {
            PipelineEventKind::FetchCompleted { records }
            | PipelineEventKind::RunCompleted { records } => Some(records),
            _ => None,
        };

        if event.kind.is_failure() {
            warn!(
                run_id = %event.run_id,
                pipeline = %event.pipeline,
                "Event: {}", event.kind.name()
            );
        } else if self.level == Level::DEBUG {
            debug!(
                run_id = %event.run_id,
                pipeline = %event.pipeline,
                records = ?records,
                "Event: {}", event.kind.name()
            );
        } else {
            info!(
                run_id = %event.run_id,
                pipeline = %event.pipeline,
                records = ?records,
                "Event: {}", event.kind.name()
            );
        }
    }
}

#[async_trait]
impl EventSink for LoggingEventSink {
    async fn emit(&self, event: PipelineEvent) {
        self.log_event(&event);
    }
}

/// A collecting event sink for testing purposes.
#[derive(Debug, Default)]
pub struct CollectingEventSink {
    events: RwLock<Vec<PipelineEvent>>,
}

impl CollectingEventSink {
    /// Creates a new collecting sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected events.
    #[must_use]
    pub fn events(&self) -> Vec<PipelineEvent> {
        self.events.read().clone()
    }

    /// Returns the kinds of all collected events, in emission order.
    #[must_use]
    pub fn kinds(&self) -> Vec<PipelineEventKind> {
        self.events.read().iter().map(|e| e.kind).collect()
    }

    /// Returns the number of collected events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.read().len()
    }

    /// Returns true if no events have been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.read().is_empty()
    }

    /// Clears all collected events.
    pub fn clear(&self) {
        self.events.write().clear();
    }
}

#[async_trait]
impl EventSink for CollectingEventSink {
    async fn emit(&self, event: PipelineEvent) {
        self.events.write().push(event);
    }
}
