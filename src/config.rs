//! Statistics settings persisted as TOML in the platform config directory.

use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const SETTINGS_FILE: &str = "settings.toml";

/// Alert thresholds and fetch limits for the statistics view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsSettings {
    /// Change percentage at which a row is highlighted as a warning.
    pub warning_percentage: f64,
    /// Change percentage at which a row is highlighted as critical.
    pub critical_percentage: f64,
    /// Default `limit` for history fetches.
    pub max_operations: usize,
}

impl Default for StatisticsSettings {
    fn default() -> Self {
        Self {
            warning_percentage: 10.0,
            critical_percentage: 20.0,
            max_operations: 50,
        }
    }
}

/// Manages the settings file location and load/save operations.
#[derive(Clone)]
pub struct SettingsManager {
    config_dir: PathBuf,
}

impl SettingsManager {
    /// Create a SettingsManager with a custom config directory (primarily
    /// for testing).
    pub fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Create a new SettingsManager for the given app name.
    pub fn new(app_name: &str) -> Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| eyre!("Could not determine config directory"))?
            .join(app_name);
        Ok(Self { config_dir })
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(SETTINGS_FILE)
    }

    /// Load settings. A missing file yields the defaults; a malformed file
    /// is an error.
    pub fn load(&self) -> Result<StatisticsSettings> {
        let path = self.settings_path();
        if !path.exists() {
            return Ok(StatisticsSettings::default());
        }
        let contents = std::fs::read_to_string(&path)?;
        let settings = toml::from_str(&contents)
            .map_err(|e| eyre!("Invalid settings file {}: {}", path.display(), e))?;
        Ok(settings)
    }

    /// Save settings, creating the config directory if needed.
    pub fn save(&self, settings: &StatisticsSettings) -> Result<()> {
        if !self.config_dir.exists() {
            std::fs::create_dir_all(&self.config_dir)?;
        }
        let contents = toml::to_string_pretty(settings)?;
        std::fs::write(self.settings_path(), contents)?;
        Ok(())
    }
}
