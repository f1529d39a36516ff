// Production-quality lints
#![warn(
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
// Deny truly dangerous patterns
#![deny(clippy::mem_forget)]
// Allow common patterns in library code
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! # price-fee - tiered cart fees and discounts
//!
//! Adds a single signed fee line to a cart based on which subtotal bands
//! the cart falls into.
//!
//! ## Core Concept
//!
//! A **rule** is an inclusive band `[min, max]` with a signed `amount`
//! (positive = fee, negative = discount). Every rule whose band contains
//! the subtotal contributes; overlapping bands **sum**. If the net
//! adjustment is non-zero, the host adds one fee line with the configured
//! label.
//!
//! ## Quick Start
//!
//! ```rust
//! use price_fee::{evaluate, Rule, RuleSet};
//!
//! let rules = RuleSet::new(vec![
//!     Rule::new(0.0, 100.0, 10.0),   // base fee under 100
//!     Rule::new(50.0, 150.0, -10.0), // discount from 50
//! ]);
//!
//! let result = evaluate(25.0, &rules, "Handling");
//! assert_eq!(result.adjustment, 10.0);
//! assert!(result.applied);
//!
//! // Both bands match at 75 and cancel out: no fee line
//! let result = evaluate(75.0, &rules, "Handling");
//! assert!(!result.applied);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                                                             │
//! │  SettingsStore ──load()──► Settings { label, rules }        │
//! │                                  │                          │
//! │  Cart ──subtotal()──┐            │                          │
//! │                     ▼            ▼                          │
//! │              FeeHook::calculate_fees                        │
//! │                     │                                       │
//! │                     ├──► evaluate(subtotal, rules, label)   │
//! │                     │         ──► EvaluationResult          │
//! │                     │                                       │
//! │                     └──► Cart::add_fee(FeeLine) if applied  │
//! │                                                             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! [`evaluate`] is pure and infallible. Loose input (strings, missing
//! fields) is normalized to numbers once, when a [`RuleSet`] is built from
//! a settings document.

pub mod cart;
pub mod config;
pub mod error;
pub mod evaluate;
pub mod rule;
pub mod settings;
pub mod settings_validate;
pub mod store;

// Re-exports
pub use cart::{Cart, FeeHook, FeeLine, RequestContext, SimpleCart};
pub use config::{HookConfig, HostConfig, StoreConfig, ValidationConfig};
pub use error::{Error, Result};
pub use evaluate::{evaluate, EvaluationResult};
pub use rule::{coerce_number, Rule, RuleSet};
pub use settings::{Settings, DEFAULT_LABEL};
pub use settings_validate::{validate_settings, Severity, SettingsIssue, ValidationReport};
pub use store::{FileStore, Format, MemoryStore, SettingsStore};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
