//! Pipeline composition and execution.
//!
//! This module provides:
//! - The bare two-stage chain [`run`]
//! - [`Pipeline`], which owns its collaborators and reports lifecycle events

mod runner;

pub use runner::{run, Pipeline};
