//! # Userflow
//!
//! A small fetch-then-validate pipeline for user records with explicit,
//! typed failures.
//!
//! Userflow composes two independently failable capabilities:
//!
//! - **Source**: produces the full, ordered batch of [`RawRecord`]s, or fails wholesale
//! - **Validator**: turns one [`RawRecord`] into a [`ProcessedRecord`], or rejects it
//!
//! The [`Pipeline`] chains them and unifies both failures under
//! [`FailureKind`]. Each stage only runs if the previous one succeeded, and
//! batch validation stops at the first rejected record.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use userflow::prelude::*;
//!
//! let pipeline = Pipeline::new("users", StaticSource::sample(), EmailValidator::new());
//!
//! match pipeline.run().await {
//!     Ok(records) => println!("{} users processed", records.len()),
//!     Err(FailureKind::FetchFailure) => println!("Fetching Error!"),
//!     Err(FailureKind::ValidationFailure) => println!("Processing Error!"),
//! }
//! ```
//!
//! [`RawRecord`]: crate::core::RawRecord
//! [`ProcessedRecord`]: crate::core::ProcessedRecord
//! [`Pipeline`]: crate::pipeline::Pipeline
//! [`FailureKind`]: crate::errors::FailureKind

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod core;
pub mod errors;
pub mod events;
pub mod pipeline;
pub mod sources;
pub mod testing;
pub mod utils;
pub mod validators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::PipelineConfig;
    pub use crate::core::{ProcessedRecord, RawRecord};
    pub use crate::errors::{ConfigError, FailureKind, FetchFailure, ValidationFailure};
    pub use crate::events::{
        CollectingEventSink, EventSink, LoggingEventSink, NoOpEventSink, PipelineEvent,
        PipelineEventKind,
    };
    pub use crate::pipeline::{run, Pipeline};
    pub use crate::sources::{JsonFileSource, Source, StaticSource};
    pub use crate::utils::{generate_uuid, generate_uuid_v7, IdStrategy};
    pub use crate::validators::{is_valid_email, EmailValidator, Validator};
}
