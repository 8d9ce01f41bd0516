//! Demo host: runs the pipeline once and prints the outcome.
//!
//! Environment:
//! - `RUST_LOG`: log filter, defaults to `info`
//! - `USERFLOW_CONFIG`: optional path to a JSON [`PipelineConfig`]
//! - `USERFLOW_INPUT`: optional path to a JSON array of records; the built-in
//!   sample batch is used otherwise

use anyhow::Context;
use std::env;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

use userflow::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match env::var_os("USERFLOW_CONFIG") {
        Some(path) => PipelineConfig::from_file(&path)
            .with_context(|| format!("failed to load config from {}", path.to_string_lossy()))?,
        None => PipelineConfig::default(),
    };

    let source: Box<dyn Source> = match env::var_os("USERFLOW_INPUT") {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(StaticSource::sample()),
    };

    let pipeline = Pipeline::from_config(&config, source, EmailValidator::from_config(&config));
    info!(pipeline = %pipeline.name(), "Starting pipeline");

    match pipeline.run().await {
        Ok(records) => {
            for record in &records {
                println!("{record}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(failure @ FailureKind::FetchFailure) => {
            eprintln!("{failure} ({}): no records could be read", failure.code());
            Ok(ExitCode::FAILURE)
        }
        Err(failure @ FailureKind::ValidationFailure) => {
            eprintln!("{failure} ({}): a record has a malformed email", failure.code());
            Ok(ExitCode::FAILURE)
        }
    }
}
