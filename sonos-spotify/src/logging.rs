//! Logging setup for applications embedding the plugin
//!
//! The library itself only emits `tracing` events. Binaries call
//! [`init_logging`] once to choose where those events go.

use tracing_subscriber::{fmt, EnvFilter, Registry};

/// Logging mode for different use cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoggingMode {
    /// No output
    Silent,
    /// Compact stderr output
    Development,
    /// Verbose diagnostics with source locations
    Debug,
}

/// Logging configuration error
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracingInit(String),
}

/// Initialize logging with the specified mode
///
/// # Environment Variables
///
/// - `SONOS_SPOTIFY_LOG`: filter directives (e.g. `sonos_spotify=debug`),
///   falling back to `RUST_LOG`
pub fn init_logging(mode: LoggingMode) -> Result<(), LoggingError> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    match mode {
        LoggingMode::Silent => Ok(()),
        LoggingMode::Development => Registry::default()
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .with(create_env_filter("info"))
            .try_init()
            .map_err(|e| LoggingError::TracingInit(e.to_string())),
        LoggingMode::Debug => Registry::default()
            .with(
                fmt::layer()
                    .pretty()
                    .with_writer(std::io::stderr)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(create_env_filter("debug"))
            .try_init()
            .map_err(|e| LoggingError::TracingInit(e.to_string())),
    }
}

/// Parse a mode name, e.g. from `SONOS_SPOTIFY_LOG_MODE`
///
/// Unknown names fall back to silent.
pub fn mode_from_name(name: &str) -> LoggingMode {
    match name {
        "development" | "dev" => LoggingMode::Development,
        "debug" => LoggingMode::Debug,
        _ => LoggingMode::Silent,
    }
}

fn create_env_filter(default_level: &str) -> EnvFilter {
    std::env::var("SONOS_SPOTIFY_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(EnvFilter::new)
        .unwrap_or_else(|_| EnvFilter::new(default_level))
}
