//! Host configuration
//!
//! Handles loading of `price_fee.yaml`, which tells the cart hook how to
//! present the fee line and where the settings record lives.
//!
//! ```yaml
//! version: 1
//! hook:
//!   default_label: "Price Adjustment"
//!   taxable: false
//!   skip_admin: true
//! store:
//!   path: spf_settings.json
//! validation:
//!   max_rules: 100
//!   warn_on_overlap: false
//! ```

use crate::error::{Error, Result};
use crate::settings::DEFAULT_LABEL;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file name looked up by [`HostConfig::load_from_dir`]
pub const CONFIG_FILE: &str = "price_fee.yaml";

/// Root host configuration (`price_fee.yaml`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HostConfig {
    /// Schema version for migrations
    pub version: u32,

    /// Cart hook behaviour
    #[serde(default)]
    pub hook: HookConfig,

    /// Settings storage location
    #[serde(default)]
    pub store: StoreConfig,

    /// Settings validation rules
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// How the cart hook adds the fee line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HookConfig {
    /// Label used when the stored label is blank
    #[serde(default = "default_label")]
    pub default_label: String,

    /// Taxable flag passed to the host with the fee line
    #[serde(default)]
    pub taxable: bool,

    /// Skip fee calculation on admin requests that are not AJAX
    #[serde(default = "default_true")]
    pub skip_admin: bool,
}

fn default_label() -> String {
    DEFAULT_LABEL.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for HookConfig {
    fn default() -> Self {
        Self {
            default_label: default_label(),
            taxable: false,
            skip_admin: true,
        }
    }
}

/// Where settings are persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StoreConfig {
    /// Settings file (`.json`, `.yaml` or `.yml`), relative to the config
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

fn default_store_path() -> PathBuf {
    PathBuf::from("spf_settings.json")
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

/// Settings validation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationConfig {
    /// Maximum rules (warn if exceeded)
    #[serde(default = "default_max_rules")]
    pub max_rules: usize,

    /// Report overlapping bands. Overlap is legal; amounts are summed.
    #[serde(default)]
    pub warn_on_overlap: bool,
}

fn default_max_rules() -> usize {
    100
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_rules: default_max_rules(),
            warn_on_overlap: false,
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            version: 1,
            hook: HookConfig::default(),
            store: StoreConfig::default(),
            validation: ValidationConfig::default(),
        }
    }
}

impl HostConfig {
    /// Parse config from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: HostConfig = serde_norway::from_str(yaml)
            .map_err(|e| Error::Other(format!("Failed to parse {}: {}", CONFIG_FILE, e)))?;

        // Validate version
        if config.version != 1 {
            return Err(Error::Other(format!(
                "Unsupported {} version: {}",
                CONFIG_FILE, config.version
            )));
        }

        Ok(config)
    }

    /// Load `price_fee.yaml` from a directory
    pub fn load_from_dir(dir: &Path) -> Result<Option<Self>> {
        let config_file = dir.join(CONFIG_FILE);
        if !config_file.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_file).map_err(Error::Io)?;
        Self::from_yaml(&content).map(Some)
    }

    /// Settings path resolved against `dir` when relative
    pub fn settings_path(&self, dir: &Path) -> PathBuf {
        if self.store.path.is_absolute() {
            self.store.path.clone()
        } else {
            dir.join(&self.store.path)
        }
    }
}
