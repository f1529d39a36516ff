//! Settings record - the persisted `{ label, rules }` document
//!
//! ```json
//! {
//!   "label": "Small order surcharge",
//!   "rules": [
//!     { "min": 0, "max": 19.99, "amount": 2.5 },
//!     { "min": 100, "max": 1000000, "amount": -5 }
//!   ]
//! }
//! ```
//!
//! Parsing is lenient: a missing `label` is empty, a missing `rules` key is
//! an empty set, and rule fields are normalized by [`crate::rule`].

use crate::error::{Error, Result};
use crate::rule::RuleSet;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Label shown on the fee line when none is configured
pub const DEFAULT_LABEL: &str = "Price Adjustment";

/// Stored fee settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[schemars(title = "Price Fee Settings", description = "Fee label and subtotal bands")]
pub struct Settings {
    /// Fee line label displayed in cart and checkout
    #[serde(default, deserialize_with = "lenient_label")]
    #[schemars(with = "String")]
    pub label: String,

    /// Subtotal bands
    #[serde(default)]
    pub rules: RuleSet,
}

fn lenient_label<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

impl Settings {
    pub fn new(label: impl Into<String>, rules: RuleSet) -> Self {
        Self {
            label: label.into(),
            rules,
        }
    }

    /// Build settings from an already-decoded document. Non-object input
    /// yields empty settings.
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Ok(Self::default());
        }
        serde_json::from_value(value).map_err(|e| Error::SettingsParse(e.to_string()))
    }

    /// Parse settings from JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| Error::SettingsParse(e.to_string()))?;
        Self::from_value(value)
    }

    /// Parse settings from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let value: Value =
            serde_norway::from_str(yaml).map_err(|e| Error::SettingsParse(e.to_string()))?;
        Self::from_value(value)
    }

    /// Serialize settings to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::SettingsParse(e.to_string()))
    }

    /// Serialize settings to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_norway::to_string(self).map_err(|e| Error::SettingsParse(e.to_string()))
    }

    /// Label to show on the fee line, falling back to `default` when the
    /// stored label is blank
    pub fn effective_label<'a>(&'a self, default: &'a str) -> &'a str {
        if self.label.trim().is_empty() {
            default
        } else {
            &self.label
        }
    }

    /// Compute hash of settings for change detection
    pub fn hash(&self) -> String {
        use sha2::{Digest, Sha256};
        let content = serde_json::to_string(self).unwrap_or_default();
        let mut hasher = Sha256::new();
        hasher.update(content.as_bytes());
        format!("sha256:{}", hex::encode(&hasher.finalize()[..8]))
    }
}
