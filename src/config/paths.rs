//! Path management for MoneyTrack
//!
//! ## Path Resolution Order
//!
//! 1. `MONEYTRACK_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/moneytrack` or `~/.config/moneytrack`
//! 3. Windows: `%APPDATA%\moneytrack`

use std::path::PathBuf;

use crate::error::MoneyTrackError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "MONEYTRACK_DATA_DIR";

/// Manages all paths used by MoneyTrack
#[derive(Debug, Clone)]
pub struct MoneyTrackPaths {
    base_dir: PathBuf,
}

impl MoneyTrackPaths {
    /// Resolve the base directory from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if no home or application data directory can be found.
    pub fn new() -> Result<Self, MoneyTrackError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding one JSON file per user
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Directory where report files are written
    pub fn reports_dir(&self) -> PathBuf {
        self.base_dir.join("reports")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Path of the data file for `login`
    pub fn user_file(&self, login: &str) -> PathBuf {
        self.data_dir().join(format!("data_{}.json", login))
    }

    /// Ensure the base and data directories exist
    ///
    /// The reports directory is created lazily by the report sink.
    pub fn ensure_directories(&self) -> Result<(), MoneyTrackError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MoneyTrackError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| MoneyTrackError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }
}

#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, MoneyTrackError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) if !xdg.is_empty() => PathBuf::from(xdg),
        _ => {
            let home = std::env::var("HOME").map_err(|_| {
                MoneyTrackError::Config("Could not determine HOME directory".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join("moneytrack"))
}

#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, MoneyTrackError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| MoneyTrackError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("moneytrack"))
}
