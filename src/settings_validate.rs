//! Settings validation
//!
//! Optional policy layer run before saving (or by `price-fee validate`).
//! Evaluation never requires it: every rule that survives normalization is
//! evaluable, and degenerate or overlapping bands are legal. This module
//! only points out configurations that are probably mistakes.

use crate::config::ValidationConfig;
use crate::settings::Settings;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Severity level for validation issues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// A validation issue found in settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SettingsIssue {
    pub severity: Severity,
    pub code: String,
    pub message: String,
    /// Offending rule, if the issue is about a single rule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<usize>,
}

impl SettingsIssue {
    pub fn error(code: &str, message: &str, rule: Option<usize>) -> Self {
        Self {
            severity: Severity::Error,
            code: code.to_string(),
            message: message.to_string(),
            rule,
        }
    }

    pub fn warning(code: &str, message: &str, rule: Option<usize>) -> Self {
        Self {
            severity: Severity::Warning,
            code: code.to_string(),
            message: message.to_string(),
            rule,
        }
    }
}

/// Result of settings validation
#[derive(Debug, Default, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ValidationReport {
    pub issues: Vec<SettingsIssue>,
    pub rules_checked: usize,
}

impl ValidationReport {
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
            .count()
    }

    /// Issue codes in report order
    pub fn codes(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.code.as_str()).collect()
    }

    /// Human-readable report
    pub fn to_report(&self) -> String {
        let mut out = String::new();
        for issue in &self.issues {
            let marker = match issue.severity {
                Severity::Error => "✗",
                Severity::Warning => "⚠",
            };
            match issue.rule {
                Some(i) => out.push_str(&format!(
                    "{} [{}] rule #{}: {}\n",
                    marker, issue.code, i, issue.message
                )),
                None => out.push_str(&format!("{} [{}] {}\n", marker, issue.code, issue.message)),
            }
        }

        if self.issues.is_empty() {
            out.push_str(&format!("✓ {} rule(s) valid\n", self.rules_checked));
        } else {
            out.push_str(&format!(
                "{} error(s), {} warning(s) in {} rule(s)\n",
                self.error_count(),
                self.warning_count(),
                self.rules_checked
            ));
        }
        out
    }
}

/// Validate settings against the configured policy
pub fn validate_settings(settings: &Settings, config: &ValidationConfig) -> ValidationReport {
    let mut report = ValidationReport {
        rules_checked: settings.rules.len(),
        ..Default::default()
    };

    if settings.label.trim().is_empty() {
        report.issues.push(SettingsIssue::warning(
            "W004",
            "Label is empty. The default label will be shown.",
            None,
        ));
    }

    if settings.rules.len() > config.max_rules {
        report.issues.push(SettingsIssue::warning(
            "W005",
            &format!(
                "{} rules exceeds the configured maximum of {}",
                settings.rules.len(),
                config.max_rules
            ),
            None,
        ));
    }

    for (i, rule) in settings.rules.iter().enumerate() {
        if !rule.is_finite() {
            report.issues.push(SettingsIssue::error(
                "E001",
                "Rule contains a non-finite value",
                Some(i),
            ));
            continue;
        }

        if rule.is_degenerate() {
            report.issues.push(SettingsIssue::warning(
                "W001",
                &format!(
                    "min ({}) is greater than max ({}); rule never matches",
                    rule.min, rule.max
                ),
                Some(i),
            ));
        }

        if rule.amount == 0.0 {
            report.issues.push(SettingsIssue::warning(
                "W002",
                "Amount is zero; rule never changes the total",
                Some(i),
            ));
        }

        if rule.min < 0.0 || rule.max < 0.0 {
            report.issues.push(SettingsIssue::warning(
                "W006",
                "Band has a negative bound; subtotals are never negative",
                Some(i),
            ));
        }
    }

    if config.warn_on_overlap {
        for (a, b) in settings.rules.overlapping_pairs() {
            report.issues.push(SettingsIssue::warning(
                "W003",
                &format!("Overlaps rule #{}; amounts will be summed", b),
                Some(a),
            ));
        }
    }

    report
}
