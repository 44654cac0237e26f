use anyhow::{Context, Result, anyhow, bail};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::warning::Thresholds;

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// default_city = "Lisbon"
///
/// [thresholds]
/// heat_warning_c = 28.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// OpenWeather API key.
    pub api_key: Option<String>,

    /// Key for the air pollution endpoint, when it differs from `api_key`.
    pub air_quality_api_key: Option<String>,

    /// City shown when none is given on the command line.
    pub default_city: Option<String>,

    /// Override for the OpenWeather base URL.
    pub base_url: Option<String>,

    pub thresholds: Thresholds,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        cfg.thresholds
            .validate()
            .with_context(|| format!("Invalid [thresholds] in config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycheck", "skycheck")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Returns the API key, ignoring blank values.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Blank input clears the separate key so the main key is used again.
    pub fn set_air_quality_api_key(&mut self, api_key: String) {
        let trimmed = api_key.trim();
        self.air_quality_api_key = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }

    pub fn default_city(&self) -> Option<&str> {
        self.default_city.as_deref().filter(|c| !c.is_empty())
    }

    /// Store a trimmed default city. Blank input is rejected.
    pub fn set_default_city(&mut self, city: &str) -> Result<()> {
        let city = city.trim();
        if city.is_empty() {
            bail!("Please enter a city name");
        }

        self.default_city = Some(city.to_string());
        Ok(())
    }

    /// Pick the explicit city if given, otherwise the saved default.
    pub fn resolve_city(&self, explicit: Option<&str>) -> Result<String> {
        if let Some(city) = explicit.map(str::trim).filter(|c| !c.is_empty()) {
            return Ok(city.to_string());
        }

        self.default_city().map(str::to_string).ok_or_else(|| {
            anyhow!(
                "No city given and no default city configured.\n\
                 Hint: run `skycheck default-city <CITY>` or pass a city to `skycheck show`."
            )
        })
    }
}
