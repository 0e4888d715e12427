use std::path::Path;

use log::LevelFilter;

#[allow(clippy::missing_errors_doc)]
pub trait SettingsService {
    fn get_settings(&self) -> Result<Settings, SettingsError>;
    fn set_settings(&self, settings: Settings) -> Result<(), SettingsError>;
}

#[allow(clippy::missing_errors_doc)]
pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, SettingsError>;
    fn write_settings(&self, settings: Settings) -> Result<(), SettingsError>;
}

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("{0}")]
    Unknown(String),
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// List workouts with their exercises and sets instead of a one-line summary.
    pub show_details: bool,
    pub confirm_delete: bool,
    pub log_level: LogLevel,
}

impl Settings {
    /// # Errors
    ///
    /// Returns an error if the string is not a valid settings object.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not contain valid settings.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_details: false,
            confirm_delete: true,
            log_level: LogLevel::Info,
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
