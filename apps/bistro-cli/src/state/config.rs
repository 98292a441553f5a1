//! # Configuration State
//!
//! Settings resolved at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--store-name`, ...)
//! 2. Environment variables (`BISTRO_*`)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Title shown above the main menu.
    pub store_name: String,

    /// How the sales report is printed.
    pub report_format: ReportFormat,

    /// Start with the house menu (Soup, Steak, Cake, Coffee).
    pub seed_house_menu: bool,
}

/// Output format for the sales report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// `Total Sales for 2026-10-19: $33.96`
    #[default]
    Text,

    /// Pretty-printed `SalesReport` JSON.
    Json,
}

impl FromStr for ReportFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            _ => Err(ConfigError::InvalidValue(ENV_REPORT_FORMAT.to_string())),
        }
    }
}

pub const ENV_STORE_NAME: &str = "BISTRO_STORE_NAME";
pub const ENV_REPORT_FORMAT: &str = "BISTRO_REPORT_FORMAT";
pub const ENV_SEED_MENU: &str = "BISTRO_SEED_MENU";

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            store_name: "Restaurant Management System".to_string(),
            report_format: ReportFormat::Text,
            seed_house_menu: true,
        }
    }
}

impl AppConfig {
    /// Loads configuration from `BISTRO_*` environment variables over defaults.
    ///
    /// ## Environment Variables
    /// - `BISTRO_STORE_NAME`: title above the main menu
    /// - `BISTRO_REPORT_FORMAT`: `text` or `json`
    /// - `BISTRO_SEED_MENU`: `true`/`false`, whether to load the house menu
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = AppConfig::default();

        if let Some(store_name) = lookup(ENV_STORE_NAME) {
            let store_name = store_name.trim();
            if store_name.is_empty() {
                return Err(ConfigError::InvalidValue(ENV_STORE_NAME.to_string()));
            }
            config.store_name = store_name.to_string();
        }

        if let Some(format) = lookup(ENV_REPORT_FORMAT) {
            config.report_format = format.parse()?;
        }

        if let Some(seed) = lookup(ENV_SEED_MENU) {
            config.seed_house_menu = seed
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue(ENV_SEED_MENU.to_string()))?;
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Invalid menu item '{entry}': expected NAME:PRICE:CATEGORY ({reason})")]
    InvalidMenuEntry { entry: String, reason: String },
}
