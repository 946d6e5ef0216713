// file: src/logging/logger.rs
// version: 1.0.0
// guid: 4dac19a5-3a11-4568-a46b-4b832679e4a8

//! Logger initialization and configuration
//!
//! Logs always go to stderr; stdout is reserved for the JSON payload.

use crate::error::ZoneFactsError;
use crate::Result;
use tracing::Instrument;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn level_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }

    if quiet {
        EnvFilter::new("error")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    }
}

/// Initialize the logging system
pub fn init_logger(verbose: bool, quiet: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(level_filter(verbose, quiet))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
        .map_err(|e| ZoneFactsError::config(format!("Failed to initialize logger: {}", e)))?;

    Ok(())
}

/// Initialize structured JSON logging
pub fn init_json_logger(verbose: bool, quiet: bool) -> Result<()> {
    tracing_subscriber::registry()
        .with(level_filter(verbose, quiet))
        .with(fmt::layer().json().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| ZoneFactsError::config(format!("Failed to initialize JSON logger: {}", e)))?;

    Ok(())
}

/// Run `f` inside an `operation` span
pub fn with_operation_span<F, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    let span = tracing::info_span!("operation", name = operation);
    let _enter = span.enter();
    f()
}

/// Run the future produced by `f` inside an `operation` span
pub async fn with_async_operation_span<F, Fut, R>(operation: &str, f: F) -> R
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = R>,
{
    let span = tracing::info_span!("operation", name = operation);
    f().instrument(span).await
}
