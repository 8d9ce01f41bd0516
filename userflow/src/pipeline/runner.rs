//! Fetch-then-validate execution.

use std::fmt;
use std::sync::Arc;
use tracing::{debug, info_span, Instrument};
use uuid::Uuid;

use crate::config::PipelineConfig;
use crate::core::ProcessedRecord;
use crate::errors::FailureKind;
use crate::events::{EventSink, LoggingEventSink, NoOpEventSink, PipelineEvent, PipelineEventKind};
use crate::sources::Source;
use crate::utils::generate_uuid;
use crate::validators::Validator;

/// Fetches every record from `source` and validates them with `validator`.
///
/// The validator only runs if the fetch succeeded, and batch validation stops
/// at the first rejected record.
pub async fn run<S, V>(source: &S, validator: &V) -> Result<Vec<ProcessedRecord>, FailureKind>
where
    S: Source + ?Sized,
    V: Validator + ?Sized,
{
    let records = source.fetch_all().await?;
    let processed = validator.validate_all(records).await?;
    Ok(processed)
}

/// A named pipeline owning an injected source and validator.
///
/// Each call to [`Pipeline::run`] is independent; the pipeline holds no
/// state that carries over between runs.
pub struct Pipeline<S, V> {
    name: String,
    source: S,
    validator: V,
    events: Arc<dyn EventSink>,
}

impl<S, V> Pipeline<S, V>
where
    S: Source,
    V: Validator,
{
    /// Creates a pipeline that discards its events.
    #[must_use]
    pub fn new(name: impl Into<String>, source: S, validator: V) -> Self {
        Self {
            name: name.into(),
            source,
            validator,
            events: Arc::new(NoOpEventSink),
        }
    }

    /// Creates a pipeline named and wired according to `config`.
    #[must_use]
    pub fn from_config(config: &PipelineConfig, source: S, validator: V) -> Self {
        let pipeline = Self::new(config.name.clone(), source, validator);
        if config.log_events {
            pipeline.with_event_sink(Arc::new(LoggingEventSink::default()))
        } else {
            pipeline
        }
    }

    /// Sets the event sink.
    #[must_use]
    pub fn with_event_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.events = sink;
        self
    }

    /// Returns the pipeline name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the validator.
    #[must_use]
    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Runs the pipeline once.
    ///
    /// Semantics match [`run`]; in addition every run gets its own id, a
    /// `pipeline.run` tracing span and a sequence of [`PipelineEvent`]s.
    pub async fn run(&self) -> Result<Vec<ProcessedRecord>, FailureKind> {
        let run_id = generate_uuid();
        let span = info_span!("pipeline.run", pipeline = %self.name, %run_id);
        self.execute(run_id).instrument(span).await
    }

    async fn execute(&self, run_id: Uuid) -> Result<Vec<ProcessedRecord>, FailureKind> {
        self.emit(run_id, PipelineEventKind::RunStarted).await;

        let records = match self.source.fetch_all().await {
            Ok(records) => records,
            Err(failure) => {
                self.emit(run_id, PipelineEventKind::FetchFailed).await;
                return Err(failure.into());
            }
        };

        debug!(records = records.len(), "Fetched records");
        self.emit(
            run_id,
            PipelineEventKind::FetchCompleted {
                records: records.len(),
            },
        )
        .await;

        let processed = match self.validator.validate_all(records).await {
            Ok(processed) => processed,
            Err(failure) => {
                self.emit(run_id, PipelineEventKind::ValidationFailed).await;
                return Err(failure.into());
            }
        };

        debug!(records = processed.len(), "Validated records");
        self.emit(
            run_id,
            PipelineEventKind::RunCompleted {
                records: processed.len(),
            },
        )
        .await;

        Ok(processed)
    }

    async fn emit(&self, run_id: Uuid, kind: PipelineEventKind) {
        self.events
            .emit(PipelineEvent::new(run_id, self.name.as_str(), kind))
            .await;
    }
}

impl<S: fmt::Debug, V: fmt::Debug> fmt::Debug for Pipeline<S, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("name", &self.name)
            .field("source", &self.source)
            .field("validator", &self.validator)
            .finish_non_exhaustive()
    }
}
