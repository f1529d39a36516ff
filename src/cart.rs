//! Cart integration
//!
//! The host commerce system calls [`FeeHook::calculate_fees`] at its fee
//! recalculation point. The hook reads the cart subtotal, evaluates it
//! against the settings snapshot and adds at most one fee line.

use crate::config::HookConfig;
use crate::error::Result;
use crate::evaluate::{evaluate, EvaluationResult};
use crate::settings::Settings;
use crate::store::SettingsStore;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A named, signed line added to the cart total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FeeLine {
    pub label: String,
    /// Positive = fee, negative = discount
    pub amount: f64,
    pub taxable: bool,
}

/// The host's cart, as seen by the hook
pub trait Cart {
    /// Pre-fee cart subtotal
    fn subtotal(&self) -> f64;

    /// Add a fee line to the cart
    fn add_fee(&mut self, fee: FeeLine);
}

/// Request the recalculation happens in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub is_admin: bool,
    pub doing_ajax: bool,
}

impl RequestContext {
    /// Storefront request
    pub fn storefront() -> Self {
        Self::default()
    }

    /// Admin page render (not AJAX)
    pub fn admin() -> Self {
        Self {
            is_admin: true,
            doing_ajax: false,
        }
    }

    /// Admin-side AJAX, e.g. cart fragments refreshed from the dashboard
    pub fn admin_ajax() -> Self {
        Self {
            is_admin: true,
            doing_ajax: true,
        }
    }
}

/// Fee calculation entry point for the host
#[derive(Debug, Clone, Default)]
pub struct FeeHook {
    config: HookConfig,
}

impl FeeHook {
    pub fn new(config: HookConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &HookConfig {
        &self.config
    }

    /// Evaluate the cart without touching it
    pub fn preview<C: Cart + ?Sized>(&self, cart: &C, settings: &Settings) -> EvaluationResult {
        let label = settings.effective_label(&self.config.default_label);
        evaluate(cart.subtotal(), &settings.rules, label)
    }

    /// Add the fee line for this cart, if any. Returns the line added.
    pub fn calculate_fees<C: Cart + ?Sized>(
        &self,
        cart: &mut C,
        settings: &Settings,
        ctx: &RequestContext,
    ) -> Option<FeeLine> {
        if self.config.skip_admin && ctx.is_admin && !ctx.doing_ajax {
            tracing::debug!("admin request, skipping fee calculation");
            return None;
        }

        let result = self.preview(cart, settings);
        tracing::debug!(
            subtotal = cart.subtotal(),
            adjustment = result.adjustment,
            matched = ?result.matched,
            "evaluated fee rules"
        );

        if !result.applied {
            return None;
        }

        let fee = FeeLine {
            label: result.label,
            amount: result.adjustment,
            taxable: self.config.taxable,
        };
        cart.add_fee(fee.clone());
        Some(fee)
    }

    /// Same as [`FeeHook::calculate_fees`], loading the settings snapshot
    /// from `store` first
    pub fn calculate_fees_from_store<C: Cart + ?Sized>(
        &self,
        cart: &mut C,
        store: &dyn SettingsStore,
        ctx: &RequestContext,
    ) -> Result<Option<FeeLine>> {
        if self.config.skip_admin && ctx.is_admin && !ctx.doing_ajax {
            return Ok(None);
        }
        let settings = store.load()?;
        Ok(self.calculate_fees(cart, &settings, ctx))
    }
}

/// Minimal in-memory cart
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimpleCart {
    pub subtotal: f64,
    pub fees: Vec<FeeLine>,
}

impl SimpleCart {
    pub fn new(subtotal: f64) -> Self {
        Self {
            subtotal,
            fees: Vec::new(),
        }
    }

    /// Subtotal plus all fee lines
    pub fn total(&self) -> f64 {
        self.subtotal + self.fees.iter().map(|f| f.amount).sum::<f64>()
    }
}

impl Cart for SimpleCart {
    fn subtotal(&self) -> f64 {
        self.subtotal
    }

    fn add_fee(&mut self, fee: FeeLine) {
        self.fees.push(fee);
    }
}
