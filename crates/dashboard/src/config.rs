//! Configuration loading for the console layout
//!
//! Supports loading settings from (in order of priority):
//! 1. JSON file (~/.config/zinc/dashboard.json)
//! 2. Runtime environment variables (ZINC_*)
//! 3. Built-in defaults
//!
//! The loaded value is read-only for the rest of the process.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings filename in the Zinc config directory
const SETTINGS_FILE: &str = "dashboard.json";

const DEFAULT_QUOTA_THRESHOLD_PERCENT: u32 = 80;
const DEFAULT_API_BASE_URL: &str = "http://localhost:5080";

/// Process-wide settings consumed by the main layout
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Whether the analytics tracker is started on layout setup
    pub enable_analytics: bool,
    /// Project key handed to the analytics tracker
    pub open_replay_key: String,
    /// Percentage of a quota at which usage warnings start
    pub quota_threshold_percent: u32,
    /// Base URL of the dashboard API
    pub api_base_url: String,
    /// Base URL that image asset paths are resolved against
    pub asset_base_url: String,
}

/// On-disk format. Values mirror the web build's environment, where every
/// setting arrives as a string.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    enable_analytics: Option<String>,
    open_replay_key: Option<String>,
    zinc_quota_threshold: Option<String>,
    api_base_url: Option<String>,
    asset_base_url: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            enable_analytics: false,
            open_replay_key: String::new(),
            quota_threshold_percent: DEFAULT_QUOTA_THRESHOLD_PERCENT,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            asset_base_url: format!("{}/web/", DEFAULT_API_BASE_URL),
        }
    }
}

impl DashboardConfig {
    /// Load settings using the following priority:
    /// 1. JSON file (~/.config/zinc/dashboard.json)
    /// 2. Runtime environment variables
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        if config::config_exists(SETTINGS_FILE) {
            let file: SettingsFile = config::load_json(SETTINGS_FILE)?;
            return Self::from_settings_file(file);
        }

        Self::from_env()
    }

    /// Load settings from a specific JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let file: SettingsFile = config::load_json_file(path)?;
        Self::from_settings_file(file)
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let file: SettingsFile =
            serde_json::from_str(json).context("Failed to parse dashboard settings JSON")?;
        Self::from_settings_file(file)
    }

    /// Load settings from environment variables, defaulting anything unset
    pub fn from_env() -> Result<Self> {
        let file = SettingsFile {
            enable_analytics: config::env_string("ZINC_ENABLE_ANALYTICS"),
            open_replay_key: config::env_string("ZINC_OPEN_REPLAY_KEY"),
            zinc_quota_threshold: config::env_string("ZINC_QUOTA_THRESHOLD"),
            api_base_url: config::env_string("ZINC_API_BASE_URL"),
            asset_base_url: config::env_string("ZINC_ASSET_BASE_URL"),
        };
        Self::from_settings_file(file)
    }

    fn from_settings_file(file: SettingsFile) -> Result<Self> {
        let defaults = Self::default();

        let quota_threshold_percent = match file.zinc_quota_threshold {
            Some(raw) => parse_percent(&raw)?,
            None => defaults.quota_threshold_percent,
        };

        let api_base_url = file.api_base_url.unwrap_or(defaults.api_base_url);
        url::Url::parse(&api_base_url)
            .with_context(|| format!("Invalid API base URL: {}", api_base_url))?;

        let asset_base_url = file
            .asset_base_url
            .unwrap_or_else(|| format!("{}/web/", api_base_url.trim_end_matches('/')));

        Ok(Self {
            enable_analytics: file
                .enable_analytics
                .as_deref()
                .is_some_and(config::parse_flag),
            open_replay_key: file.open_replay_key.unwrap_or_default(),
            quota_threshold_percent,
            api_base_url,
            asset_base_url,
        })
    }

    /// Get the default settings file path (~/.config/zinc/dashboard.json)
    pub fn default_settings_path() -> Option<PathBuf> {
        config::config_path(SETTINGS_FILE)
    }
}

/// Parse a percentage the way `parseInt` reads it: leading digits only
fn parse_percent(raw: &str) -> Result<u32> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits
        .parse()
        .with_context(|| format!("Invalid quota threshold percentage: {:?}", raw))
}
