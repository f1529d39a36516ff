//! Data-driven tests for rule evaluation

use price_fee::{evaluate, EvaluationResult, Rule, RuleSet};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn rules(raw: &[(f64, f64, f64)]) -> RuleSet {
    raw.iter()
        .map(|&(min, max, amount)| Rule::new(min, max, amount))
        .collect()
}

// ============================================================================
// Table cases
// ============================================================================

#[rstest]
#[case::empty_ruleset(&[], 42.0, 0.0, false)]
#[case::empty_ruleset_zero_subtotal(&[], 0.0, 0.0, false)]
#[case::single_inside(&[(0.0, 100.0, 10.0)], 50.0, 10.0, true)]
#[case::single_outside(&[(0.0, 100.0, 10.0)], 150.0, 0.0, false)]
#[case::overlap_cancels(&[(0.0, 100.0, 10.0), (50.0, 150.0, -10.0)], 75.0, 0.0, false)]
#[case::overlap_sums_duplicates(&[(0.0, 100.0, 5.0), (0.0, 100.0, 5.0)], 10.0, 10.0, true)]
#[case::boundary_min(&[(10.0, 20.0, 1.0)], 10.0, 1.0, true)]
#[case::boundary_max(&[(10.0, 20.0, 1.0)], 20.0, 1.0, true)]
#[case::below_min(&[(10.0, 20.0, 1.0)], 9.999, 0.0, false)]
#[case::above_max(&[(10.0, 20.0, 1.0)], 20.001, 0.0, false)]
#[case::degenerate_band(&[(20.0, 10.0, 5.0)], 15.0, 0.0, false)]
#[case::discount(&[(100.0, 1000.0, -7.5)], 250.0, -7.5, true)]
#[case::zero_subtotal_in_band(&[(0.0, 10.0, 3.0)], 0.0, 3.0, true)]
#[case::compounding_tiers(&[(0.0, 1000.0, 2.0), (0.0, 50.0, 3.0), (40.0, 60.0, 1.0)], 45.0, 6.0, true)]
fn test_evaluation_table(
    #[case] raw: &[(f64, f64, f64)],
    #[case] subtotal: f64,
    #[case] expected_adjustment: f64,
    #[case] expected_applied: bool,
) {
    let result = evaluate(subtotal, &rules(raw), "Fee");
    assert_eq!(result.adjustment, expected_adjustment);
    assert_eq!(result.applied, expected_applied);
}

#[test]
fn test_cancellation_reports_both_matches() {
    let set = rules(&[(0.0, 100.0, 10.0), (50.0, 150.0, -10.0)]);
    let result = evaluate(75.0, &set, "Fee");
    assert_eq!(
        result,
        EvaluationResult {
            adjustment: 0.0,
            label: "Fee".to_string(),
            applied: false,
            matched: vec![0, 1],
        }
    );
}

#[test]
fn test_idempotent() {
    let set = rules(&[(0.0, 100.0, 10.0), (50.0, 150.0, -2.5), (75.0, 75.0, 0.1)]);
    let first = evaluate(75.0, &set, "Fee");
    let second = evaluate(75.0, &set, "Fee");
    assert_eq!(first, second);
}

#[test]
fn test_ruleset_not_mutated() {
    let set = rules(&[(0.0, 100.0, 10.0)]);
    let before = set.clone();
    let _ = evaluate(50.0, &set, "Fee");
    assert_eq!(set, before);
}

#[test]
fn test_concurrent_evaluation() {
    let set = std::sync::Arc::new(rules(&[(0.0, 100.0, 10.0), (50.0, 150.0, 1.0)]));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let set = std::sync::Arc::clone(&set);
            std::thread::spawn(move || evaluate(i as f64 * 20.0, &set, "Fee"))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        assert_eq!(result, evaluate(i as f64 * 20.0, &set, "Fee"));
    }
}
