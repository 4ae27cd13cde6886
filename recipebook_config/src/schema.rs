use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use recipebook_core::{Category, DEFAULT_SLOT_KEY};

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Directory holding the recipe slot. Defaults to `~/recipebook/data`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default = "StorageConfig::default_slot_key")]
    pub slot_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            slot_key: Self::default_slot_key(),
        }
    }
}

impl StorageConfig {
    fn default_slot_key() -> String {
        DEFAULT_SLOT_KEY.to_string()
    }

    /// The configured data directory, or `data/` under the config directory.
    pub fn resolved_data_dir(&self) -> anyhow::Result<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => Ok(Config::config_dir()?.join("data")),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Category preselected for new recipes.
    #[serde(default = "DisplayConfig::default_category")]
    pub default_category: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_category: Self::default_category(),
        }
    }
}

impl DisplayConfig {
    fn default_category() -> String {
        Category::MainDish.as_str().to_string()
    }

    /// The default category, falling back to 主菜 when the setting is blank.
    #[must_use]
    pub fn category(&self) -> Category {
        self.default_category
            .parse()
            .unwrap_or(Category::MainDish)
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("recipebook"))
    }

    /// Load `~/recipebook/config.json`, or defaults when it does not exist.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_dir()?.join(CONFIG_FILE))
    }

    pub fn load_from(config_path: &Path) -> anyhow::Result<Self> {
        if !config_path.exists() {
            info!(
                "No config at {}, using defaults. Run 'recipebook init' to create one.",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Invalid config file {}: {e}", config_path.display())
        })?;

        info!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_dir = Self::ensure_config_dir()?;
        Self::create_config_in(&config_dir)
    }

    /// Write the default config template into `config_dir`.
    pub fn create_config_in(config_dir: &Path) -> anyhow::Result<PathBuf> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = r#"{
  "storage": {
    "slot_key": "recipes"
  },
  "display": {
    "default_category": "主菜"
  }
}
"#;

        std::fs::create_dir_all(config_dir)?;
        std::fs::write(&config_path, config_template)?;
        info!("Created config file at {}", config_path.display());
        Ok(config_path)
    }
}
