//! Path management for teller
//!
//! Provides XDG-compliant path resolution for configuration and data files.
//!
//! ## Path Resolution Order
//!
//! 1. `TELLER_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/teller` or `~/.config/teller`
//! 3. Windows: `%APPDATA%\teller`

use std::path::PathBuf;

use crate::error::TellerError;

/// Manages all paths used by teller
#[derive(Debug, Clone)]
pub struct TellerPaths {
    /// Base directory for all teller data
    base_dir: PathBuf,
}

impl TellerPaths {
    /// Create a new TellerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TellerError> {
        let base_dir = if let Ok(custom) = std::env::var("TELLER_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create TellerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/teller/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory holding per-customer statement files
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the customer roster file
    pub fn roster_file(&self) -> PathBuf {
        self.base_dir.join("customers.txt")
    }

    /// Get the path to one customer's statement file
    pub fn statement_file(&self, username: &str) -> PathBuf {
        self.data_dir().join(format!("{}.txt", username))
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), TellerError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TellerError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TellerError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if teller has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, TellerError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("teller"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, TellerError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| TellerError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("teller"))
}
