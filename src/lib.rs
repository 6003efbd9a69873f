//! Chatify Calls - call history screen for the Chatify messenger
//!
//! This library provides the Calls screen: a tabbed call history (all calls /
//! missed calls) with confirmed deletion of single entries and bulk clearing
//! of missed calls, rendered in the terminal with ratatui.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod history;
pub mod settings;
pub mod tui;


use settings::Settings;

/// Result type alias for Chatify Calls operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Chatify Calls operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid or unusable settings
    #[error("Settings error: {0}")]
    Settings(String),

    /// Logging setup error
    #[error("Logging error: {0}")]
    Logging(String),

    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}

/// Initialize logging from settings
///
/// Log lines go to `settings.log_file`; the terminal belongs to the UI, so
/// with no log file configured nothing is installed.
pub fn init_logging(settings: &Settings) -> Result<()> {
    let Some(path) = &settings.log_file else {
        return Ok(());
    };

    let filter = tracing_subscriber::EnvFilter::try_new(&settings.log_level)
        .map_err(|e| Error::Logging(format!("Invalid log level '{}': {}", settings.log_level, e)))?;

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing::info!("Logging to {}", path);
    Ok(())
}
