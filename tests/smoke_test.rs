//! Smoke test to verify basic functionality

use price_fee::{evaluate, FeeHook, RequestContext, Rule, RuleSet, Settings, SimpleCart};

#[test]
fn smoke_test_basic_evaluation() {
    let rules = RuleSet::new(vec![Rule::new(0.0, 100.0, 10.0)]);

    let result = evaluate(50.0, &rules, "Price Adjustment");
    assert_eq!(result.adjustment, 10.0);
    assert!(result.applied);
    assert_eq!(result.label, "Price Adjustment");
}

#[test]
fn smoke_test_cart_hook() {
    let settings = Settings::from_json(
        r#"{"label": "", "rules": [{"min": "0", "max": "100", "amount": "2.5"}]}"#,
    )
    .unwrap();

    let mut cart = SimpleCart::new(20.0);
    let fee = FeeHook::default().calculate_fees(&mut cart, &settings, &RequestContext::storefront());

    assert!(fee.is_some());
    assert_eq!(cart.fees.len(), 1);
    assert_eq!(cart.fees[0].label, "Price Adjustment");
    assert_eq!(cart.total(), 22.5);
}
