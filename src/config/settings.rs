//! User settings for teller
//!
//! A small JSON settings file holding display preferences. Loaded at startup
//! and created with defaults on first run.

use serde::{Deserialize, Serialize};
use std::fs;

use super::paths::TellerPaths;
use crate::error::TellerError;

/// User settings for teller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Bank name shown in greetings and statements
    #[serde(default = "default_bank_name")]
    pub bank_name: String,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_bank_name() -> String {
    "Teller Bank".to_string()
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            bank_name: default_bank_name(),
            currency_symbol: default_currency(),
        }
    }
}

impl Settings {
    /// Load settings from disk, creating the file with defaults if missing
    pub fn load_or_create(paths: &TellerPaths) -> Result<Self, TellerError> {
        let path = paths.settings_file();
        if path.exists() {
            let contents = fs::read_to_string(&path).map_err(|e| {
                TellerError::Config(format!("Failed to read {}: {}", path.display(), e))
            })?;
            let settings: Settings = serde_json::from_str(&contents)?;
            Ok(settings)
        } else {
            let settings = Settings::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TellerPaths) -> Result<(), TellerError> {
        paths.ensure_directories()?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(paths.settings_file(), json)
            .map_err(|e| TellerError::Config(format!("Failed to write settings: {}", e)))?;
        Ok(())
    }
}
