//! Logging configuration for grapnel CLI
//!
//! Terminal output goes through a compact `tracing` fmt layer without
//! timestamps; `--verbose` raises the level to debug. An optional log
//! file gets the full debug stream with timestamps regardless of the
//! terminal level.

use crate::error::Result;
use std::path::Path;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

type BoxedLayer = Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>;

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable debug level logging
/// * `log_file` - Optional path to write logs to a file
///
/// # Errors
///
/// Returns an error when the log file cannot be opened for appending.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };

    // RUST_LOG wins over the derived default
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| {
            EnvFilter::try_new(format!(
                "grapnel={level},grapnel_engine={level},grapnel_core={level}"
            ))
        })
        .expect("failed to create default env filter");

    // Timestamps belong to the file layer; stderr stays compact
    let stderr_layer: BoxedLayer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .with_ansi(true)
        .without_time()
        .with_filter(env_filter)
        .boxed();

    let mut layers = vec![stderr_layer];

    if let Some(log_path) = log_file {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        layers.push(
            fmt::layer()
                .with_writer(file)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .pretty()
                .with_filter(EnvFilter::try_new("debug").expect("'debug' is a valid filter"))
                .boxed(),
        );
    }

    tracing_subscriber::registry().with(layers).init();
    Ok(())
}
