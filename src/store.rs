//! Settings persistence
//!
//! The evaluator never touches storage; hosts load a [`Settings`] snapshot
//! through a [`SettingsStore`] once per cart recalculation and pass it in.

use crate::error::{Error, Result};
use crate::settings::Settings;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// Load/save interface for the settings record
pub trait SettingsStore: Send + Sync {
    /// Load the current settings. A store with nothing saved yields
    /// `Settings::default()` (no rules, empty label).
    fn load(&self) -> Result<Settings>;

    /// Replace the stored settings
    fn save(&self, settings: &Settings) -> Result<()>;
}

/// In-process store, mainly for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    settings: RwLock<Settings>,
}

impl MemoryStore {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }
}

impl SettingsStore for MemoryStore {
    fn load(&self) -> Result<Settings> {
        self.settings
            .read()
            .map(|s| s.clone())
            .map_err(|_| Error::Store("settings lock poisoned".into()))
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        let mut guard = self
            .settings
            .write()
            .map_err(|_| Error::Store("settings lock poisoned".into()))?;
        *guard = settings.clone();
        Ok(())
    }
}

/// On-disk encoding, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// `.yaml` / `.yml` are YAML; everything else is JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Format::Yaml
            }
            _ => Format::Json,
        }
    }
}

/// File-backed store
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    format: Format,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let format = Format::from_path(&path);
        Self { path, format }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> Format {
        self.format
    }
}

impl SettingsStore for FileStore {
    fn load(&self) -> Result<Settings> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "settings file missing, using defaults");
            return Ok(Settings::default());
        }

        let content = std::fs::read_to_string(&self.path).map_err(Error::Io)?;
        let settings = match self.format {
            Format::Json => Settings::from_json(&content)?,
            Format::Yaml => Settings::from_yaml(&content)?,
        };

        tracing::debug!(
            path = %self.path.display(),
            rules = settings.rules.len(),
            hash = %settings.hash(),
            "loaded settings"
        );
        Ok(settings)
    }

    fn save(&self, settings: &Settings) -> Result<()> {
        let content = match self.format {
            Format::Json => settings.to_json()?,
            Format::Yaml => settings.to_yaml()?,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(Error::Io)?;
            }
        }
        std::fs::write(&self.path, content).map_err(Error::Io)?;

        tracing::info!(path = %self.path.display(), rules = settings.rules.len(), "saved settings");
        Ok(())
    }
}
