//! Application configuration.

use clap::Parser;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const APP_NAME: &str = "fraisier";
const APP_QUALIFIER: &str = "com";
const APP_ORGANIZATION: &str = "tecknian";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration from CLI arguments and environment.
#[derive(Debug, Parser)]
#[command(
    name = "fraisier",
    version,
    about = "A lightweight expense-report terminal client",
    long_about = None
)]
pub struct AppConfig {
    /// Base URL of the bills API.
    #[arg(long, value_name = "URL", env = "FRAISIER_API_URL")]
    pub api_url: Option<String>,

    /// Log file path.
    #[arg(long, value_name = "PATH")]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

impl AppConfig {
    /// Returns the log file path, defaulting to the platform data
    /// directory when none was given.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        if let Some(path) = &self.log_path {
            return Some(path.clone());
        }
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("fraisier.log"))
    }

    /// Returns the directory holding persisted client state.
    #[must_use]
    pub fn state_dir() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
    }
}
