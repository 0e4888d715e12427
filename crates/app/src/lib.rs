#![warn(clippy::pedantic)]

pub mod log;
mod service;
mod settings;

pub use service::Service;
pub use settings::{LogLevel, Settings, SettingsError, SettingsRepository, SettingsService};
