//! CLI utility helpers

use price_fee::{Error, FileStore, HostConfig, Result, Settings, SettingsStore};
use std::path::{Path, PathBuf};

/// Parse --config argument, defaulting to the current directory
pub fn parse_config_dir(args: &[String]) -> PathBuf {
    for (i, arg) in args.iter().enumerate() {
        if arg == "--config" || arg == "-c" {
            if let Some(dir) = args.get(i + 1) {
                return PathBuf::from(dir);
            }
        }
    }
    PathBuf::from(".")
}

/// Load `price_fee.yaml` from the --config directory, or defaults
pub fn load_host_config(args: &[String]) -> Result<HostConfig> {
    let dir = parse_config_dir(args);
    Ok(HostConfig::load_from_dir(&dir)?.unwrap_or_default())
}

/// Load settings from a file; a missing file is an error on the CLI
pub fn load_settings(path: &Path) -> Result<Settings> {
    if !path.exists() {
        return Err(Error::Store(format!(
            "settings file not found: {}",
            path.display()
        )));
    }
    FileStore::new(path).load()
}

/// Parse a subtotal: a non-negative finite number
pub fn parse_subtotal(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| Error::Validation(format!("invalid subtotal: {}", raw)))?;

    if !value.is_finite() || value < 0.0 {
        return Err(Error::Validation(format!(
            "subtotal must be a non-negative finite number: {}",
            raw
        )));
    }
    Ok(value)
}
