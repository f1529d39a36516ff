//! Error types for price-fee

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// price-fee errors
///
/// Rule evaluation itself is infallible; these cover loading, saving and
/// validating settings around it.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Settings parse error: {0}")]
    SettingsParse(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Settings store error: {0}")]
    Store(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}
