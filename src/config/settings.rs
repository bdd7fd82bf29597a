//! User settings for FitCoach
//!
//! Manages which user the CLI acts for, where the reference food table lives,
//! and how the external food lookup is reached.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::paths::FitcoachPaths;
use crate::error::FitcoachError;

/// External food lookup settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupSettings {
    /// Whether unknown foods are searched for online
    #[serde(default = "default_lookup_enabled")]
    pub enabled: bool,

    /// Base URL of the Open Food Facts instance
    #[serde(default = "default_lookup_base_url")]
    pub base_url: String,

    /// Maximum number of candidates requested per search
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_lookup_enabled() -> bool {
    true
}

fn default_lookup_base_url() -> String {
    "https://world.openfoodfacts.org".to_string()
}

fn default_page_size() -> u32 {
    5
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            enabled: default_lookup_enabled(),
            base_url: default_lookup_base_url(),
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// User settings for FitCoach
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Identity used when neither `--user` nor `FITCOACH_USER` is given
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Reference food table; defaults to `data/foods.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foods_file: Option<PathBuf>,

    /// External lookup configuration
    #[serde(default)]
    pub lookup: LookupSettings,

    /// Number of days shown by `stats`
    #[serde(default = "default_stats_days")]
    pub stats_days: u32,
}

fn default_schema_version() -> u32 {
    1
}

fn default_user_id() -> String {
    "guest".to_string()
}

fn default_stats_days() -> u32 {
    7
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            user_id: default_user_id(),
            foods_file: None,
            lookup: LookupSettings::default(),
            stats_days: default_stats_days(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &FitcoachPaths) -> Result<Self, FitcoachError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                FitcoachError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                FitcoachError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &FitcoachPaths) -> Result<(), FitcoachError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            FitcoachError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            FitcoachError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Resolved path of the reference food table
    pub fn foods_path(&self, paths: &FitcoachPaths) -> PathBuf {
        self.foods_file
            .clone()
            .unwrap_or_else(|| paths.foods_file())
    }
}
