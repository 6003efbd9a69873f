//! Application settings and configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Longest accepted notification lifetime, in milliseconds
pub const MAX_NOTIFICATION_MS: u64 = 60_000;

/// Host color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Light background, dark text
    Light,
    /// Dark background, light text
    #[default]
    Dark,
}

impl ColorScheme {
    /// The other scheme
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Application settings
///
/// Settings are stored in JSON format and can be loaded/saved from disk.
/// Missing fields fall back to their defaults.
///
/// # Example
/// ```rust,no_run
/// use chatify_calls::settings::{ColorScheme, Settings};
///
/// // Load settings (returns default if file doesn't exist)
/// let mut settings = Settings::load("calls_settings.json").expect("Failed to load");
///
/// settings.color_scheme = ColorScheme::Light;
/// settings.save("calls_settings.json").expect("Failed to save");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Color scheme handed to the renderer
    pub color_scheme: ColorScheme,
    /// How long a notification stays visible, in milliseconds
    pub notification_ms: u64,
    /// Input poll timeout of the event loop, in milliseconds
    pub tick_rate_ms: u64,
    /// File receiving log output (no logging when unset)
    pub log_file: Option<String>,
    /// `tracing` filter directive, e.g. "info" or "chatify_calls=debug"
    pub log_level: String,
}

impl Settings {
    /// Load settings from a JSON file
    ///
    /// # Returns
    /// The loaded settings, or default settings if the file doesn't exist or is empty
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let data = std::fs::read_to_string(path)?;

        if data.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Self = serde_json::from_str(&data)?;
        settings.validate()?;

        Ok(settings)
    }

    /// Save settings to a JSON file, creating parent directories as needed
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;

        Ok(())
    }

    /// Check that timing values are usable
    pub fn validate(&self) -> Result<()> {
        if self.notification_ms == 0 {
            return Err(Error::Settings("notification_ms must be greater than zero".to_string()));
        }
        if self.notification_ms > MAX_NOTIFICATION_MS {
            return Err(Error::Settings(format!(
                "notification_ms must be at most {}",
                MAX_NOTIFICATION_MS
            )));
        }
        if self.tick_rate_ms == 0 {
            return Err(Error::Settings("tick_rate_ms must be greater than zero".to_string()));
        }
        Ok(())
    }

    /// Notification lifetime as a chrono duration
    ///
    /// Values above the accepted maximum are clamped to it.
    pub fn notification_lifetime(&self) -> chrono::Duration {
        let max = chrono::Duration::milliseconds(MAX_NOTIFICATION_MS as i64);
        i64::try_from(self.notification_ms.min(MAX_NOTIFICATION_MS))
            .ok()
            .and_then(chrono::Duration::try_milliseconds)
            .unwrap_or(max)
    }

    /// Event loop poll timeout
    pub fn tick_rate(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_rate_ms)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color_scheme: ColorScheme::Dark,
            notification_ms: 3_000,
            tick_rate_ms: 100,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}
