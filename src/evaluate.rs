//! Rule evaluation - subtotal in, net adjustment out
//!
//! Every rule whose band contains the subtotal contributes its amount.
//! Overlapping bands compound: amounts are summed in RuleSet order, never
//! deduplicated or resolved by priority. A net adjustment of exactly `0.0`
//! is reported as not applied, so no fee line is produced.

use crate::rule::RuleSet;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Outcome of evaluating a subtotal against a RuleSet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EvaluationResult {
    /// Sum of the amounts of all matching rules
    pub adjustment: f64,

    /// Fee line label, passed through unchanged
    pub label: String,

    /// `adjustment != 0.0` (exact comparison)
    pub applied: bool,

    /// Indices of the matching rules, in RuleSet order
    #[serde(default)]
    pub matched: Vec<usize>,
}

impl EvaluationResult {
    /// Human-readable summary
    pub fn to_report(&self) -> String {
        let mut out = String::new();
        if self.applied {
            out.push_str(&format!("✓ {}: {:+.2}\n", self.label, self.adjustment));
        } else {
            out.push_str("○ No adjustment applied\n");
        }
        if self.matched.is_empty() {
            out.push_str("  matched rules: none\n");
        } else {
            let ids: Vec<String> = self.matched.iter().map(|i| format!("#{}", i)).collect();
            out.push_str(&format!("  matched rules: {}\n", ids.join(", ")));
        }
        out
    }
}

/// Evaluate `subtotal` against `rules`
///
/// Pure and infallible: an empty RuleSet, a zero subtotal, degenerate
/// bands or a non-finite subtotal all simply produce whatever the matching
/// rules sum to (possibly `0.0`, not applied). `label` is not defaulted
/// here; callers substitute a default before calling.
pub fn evaluate(subtotal: f64, rules: &RuleSet, label: &str) -> EvaluationResult {
    let mut adjustment = 0.0;
    let mut matched = Vec::new();

    for (index, rule) in rules.iter().enumerate() {
        if rule.matches(subtotal) {
            adjustment += rule.amount;
            matched.push(index);
        }
    }

    EvaluationResult {
        adjustment,
        label: label.to_string(),
        applied: adjustment != 0.0,
        matched,
    }
}
