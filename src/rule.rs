//! Rule types and input normalization
//!
//! A `Rule` is an inclusive subtotal band `[min, max]` paired with a signed
//! amount (positive = fee, negative = discount). A `RuleSet` is the ordered
//! list of bands loaded from settings.
//!
//! Rule rows usually come from a loosely-typed settings record, so every
//! field goes through [`coerce_number`] exactly once, here, before it can
//! reach the evaluator. Absent or unparseable values become `0`.
//!
//! ## Accepted row shapes
//!
//! ```yaml
//! rules:
//!   - { min: 0, max: 49.99, amount: 4.5 }
//!   - { min: "50", max: "100", amount: "-5" }   # numeric strings
//!   - { min: 100 }                               # max, amount -> 0
//! ```
//!
//! Index-keyed objects (`{"0": {...}, "1": {...}}`), as posted by the admin
//! form, are accepted as well and ordered by index.

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::sync::OnceLock;

static NUMERIC_PREFIX: OnceLock<Regex> = OnceLock::new();

fn numeric_prefix() -> &'static Regex {
    NUMERIC_PREFIX.get_or_init(|| {
        Regex::new(r"^\s*[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?")
            .expect("numeric prefix pattern is valid")
    })
}

/// Coerce a loosely-typed settings value to a number, defaulting to `0`
///
/// - numbers pass through
/// - strings parse by their leading numeric prefix (`"12.5 EUR"` → 12.5,
///   `"abc"` → 0)
/// - `true` → 1, `false` / `null` → 0
/// - arrays and objects → 0
///
/// Non-finite results (overflowing exponents) also collapse to `0`.
pub fn coerce_number(value: &Value) -> f64 {
    let n = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_leading_number(s),
        Value::Bool(true) => 1.0,
        Value::Bool(false) | Value::Null => 0.0,
        Value::Array(_) | Value::Object(_) => 0.0,
    };

    if n.is_finite() {
        n
    } else {
        0.0
    }
}

fn parse_leading_number(s: &str) -> f64 {
    numeric_prefix()
        .find(s)
        .and_then(|m| m.as_str().trim_start().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// A single subtotal band
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, JsonSchema)]
#[schemars(description = "Inclusive subtotal band with a signed adjustment")]
pub struct Rule {
    /// Lower bound of the band (inclusive)
    pub min: f64,

    /// Upper bound of the band (inclusive)
    pub max: f64,

    /// Signed adjustment: positive = fee, negative = discount
    pub amount: f64,
}

impl Rule {
    pub fn new(min: f64, max: f64, amount: f64) -> Self {
        Self { min, max, amount }
    }

    /// Normalize a raw settings row. Missing keys and non-object rows
    /// default to `0`; unknown keys are ignored.
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| value.get(key).map(coerce_number).unwrap_or(0.0);

        Self {
            min: field("min"),
            max: field("max"),
            amount: field("amount"),
        }
    }

    /// Inclusive on both ends: `min <= subtotal <= max`
    pub fn matches(&self, subtotal: f64) -> bool {
        subtotal >= self.min && subtotal <= self.max
    }

    /// `min > max`: never matches any subtotal
    pub fn is_degenerate(&self) -> bool {
        self.min > self.max
    }

    /// True if both bands share at least one subtotal
    pub fn overlaps(&self, other: &Rule) -> bool {
        !self.is_degenerate()
            && !other.is_degenerate()
            && self.min <= other.max
            && other.min <= self.max
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.amount.is_finite()
    }
}

impl<'de> Deserialize<'de> for Rule {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Rule::from_value(&value))
    }
}

/// Ordered set of rules
///
/// Order carries no meaning for the result beyond the order amounts are
/// summed in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Normalize a raw `rules` value: an array of rows, or an object of
    /// index-keyed rows. Anything else yields an empty set.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Array(rows) => rows.iter().map(Rule::from_value).collect(),
            Value::Object(rows) => {
                let mut keyed: Vec<(&String, &Value)> = rows.iter().collect();
                // Numeric keys by value ("2" before "10"), then the rest by name
                keyed.sort_by(|(a, _), (b, _)| {
                    match (a.parse::<u64>(), b.parse::<u64>()) {
                        (Ok(x), Ok(y)) => x.cmp(&y),
                        (Ok(_), Err(_)) => std::cmp::Ordering::Less,
                        (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
                        (Err(_), Err(_)) => a.cmp(b),
                    }
                });
                keyed.into_iter().map(|(_, row)| Rule::from_value(row)).collect()
            }
            _ => Self::default(),
        }
    }

    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn as_slice(&self) -> &[Rule] {
        &self.rules
    }

    /// Index pairs `(i, j)` with `i < j` whose bands overlap
    pub fn overlapping_pairs(&self) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        for (i, a) in self.rules.iter().enumerate() {
            for (j, b) in self.rules.iter().enumerate().skip(i + 1) {
                if a.overlaps(b) {
                    pairs.push((i, j));
                }
            }
        }
        pairs
    }
}

impl<'de> Deserialize<'de> for RuleSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(RuleSet::from_value(&value))
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self::new(rules)
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
