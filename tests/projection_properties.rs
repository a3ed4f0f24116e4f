//! Property-based tests for the projection engine using proptest.
//!
//! Covers: length, determinism, monotonicity, cent rounding, year numbering
//! and rejection of out-of-range inputs.

use compound_returns::{project, CalculationInput, CompoundingFrequency, RecurringFrequency};
use proptest::prelude::*;

fn compounding() -> impl Strategy<Value = CompoundingFrequency> {
    prop_oneof![
        Just(CompoundingFrequency::Monthly),
        Just(CompoundingFrequency::Quarterly),
        Just(CompoundingFrequency::Annually),
    ]
}

fn cadence() -> impl Strategy<Value = RecurringFrequency> {
    prop_oneof![Just(RecurringFrequency::Weekly), Just(RecurringFrequency::Monthly)]
}

prop_compose! {
    fn valid_input()(
        initial in 0.01f64..1_000_000.0,
        recurring in 0.0f64..10_000.0,
        recurring_frequency in cadence(),
        interest_rate in 0.01f64..=100.0,
        compounding_frequency in compounding(),
        years in 1u32..=100,
    ) -> CalculationInput {
        CalculationInput {
            initial,
            recurring,
            recurring_frequency,
            interest_rate,
            compounding_frequency,
            years,
        }
    }
}

// Very large balances can move by an ulp when re-rounded
fn is_cents(value: f64) -> bool {
    ((value * 100.0).round() / 100.0 - value).abs() <= value.abs() * f64::EPSILON
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// One point per month of the horizon.
    #[test]
    fn length_matches_horizon(input in valid_input()) {
        let points = project(&input);
        prop_assert_eq!(points.len(), input.years as usize * 12);
    }

    /// Identical inputs give identical output.
    #[test]
    fn deterministic(input in valid_input()) {
        prop_assert_eq!(project(&input), project(&input));
    }

    /// Month numbers run 1, 2, 3, ... and years follow from them.
    #[test]
    fn months_and_years_sequential(input in valid_input()) {
        let points = project(&input);
        for (i, p) in points.iter().enumerate() {
            let month = i as u32 + 1;
            prop_assert_eq!(p.month, month);
            prop_assert_eq!(p.year, (month - 1) / 12 + 1);
        }
    }

    /// Principal, interest and total never decrease.
    #[test]
    fn balances_non_decreasing(input in valid_input()) {
        let points = project(&input);
        for pair in points.windows(2) {
            prop_assert!(pair[1].principal >= pair[0].principal);
            prop_assert!(pair[1].interest >= pair[0].interest);
            prop_assert!(pair[1].total >= pair[0].total);
        }
    }

    /// Every emitted value is finite, non-negative and a whole number of cents.
    #[test]
    fn values_rounded_to_cents(input in valid_input()) {
        let points = project(&input);
        for p in &points {
            for value in [p.principal, p.interest, p.total] {
                prop_assert!(value.is_finite() && value >= 0.0);
                prop_assert!(is_cents(value), "{} is not rounded to cents", value);
            }
        }
    }

    /// Total stays within a cent of principal + interest at every month.
    #[test]
    fn total_tracks_components(input in valid_input()) {
        let points = project(&input);
        for p in &points {
            let drift = (p.total - (p.principal + p.interest)).abs();
            prop_assert!(drift <= 0.01 + 1e-6 * p.total, "drift {} at month {}", drift, p.month);
        }
    }

    /// Without deposits, principal stays at the initial amount.
    #[test]
    fn no_deposits_keeps_principal(input in valid_input()) {
        let input = CalculationInput { recurring: 0.0, ..input };
        let initial = (input.initial * 100.0).round() / 100.0;
        for p in project(&input) {
            prop_assert_eq!(p.principal, initial);
        }
    }

    /// Out-of-range horizons are rejected.
    #[test]
    fn rejects_long_horizon(input in valid_input(), years in 101u32..1000) {
        let input = CalculationInput { years, ..input };
        prop_assert!(project(&input).is_empty());
    }

    /// Non-positive initial amounts or rates are rejected.
    #[test]
    fn rejects_non_positive(input in valid_input(), bad in -1_000.0f64..=0.0) {
        let no_initial = CalculationInput { initial: bad, ..input.clone() };
        prop_assert!(project(&no_initial).is_empty());

        let no_rate = CalculationInput { interest_rate: bad, ..input };
        prop_assert!(project(&no_rate).is_empty());
    }

    /// Negative deposits are rejected.
    #[test]
    fn rejects_negative_recurring(input in valid_input(), bad in -1_000.0f64..-0.001) {
        let input = CalculationInput { recurring: bad, ..input };
        prop_assert!(project(&input).is_empty());
    }
}

#[test]
fn scenario_defaults_first_month() {
    let input = CalculationInput {
        initial: 5000.0,
        recurring: 100.0,
        recurring_frequency: RecurringFrequency::Monthly,
        interest_rate: 12.0,
        compounding_frequency: CompoundingFrequency::Monthly,
        years: 5,
    };
    let points = project(&input);

    assert_eq!(points.len(), 60);
    assert_eq!(points[0].principal, 5100.0);
    assert_eq!(points[0].interest, 50.0);
    assert_eq!(points[0].total, 5150.0);
}

#[test]
fn scenario_rejections() {
    let base = CalculationInput::new(1000.0, 5.0, CompoundingFrequency::Monthly).with_years(1);

    assert!(project(&CalculationInput { initial: 0.0, ..base.clone() }).is_empty());
    assert!(project(&CalculationInput { interest_rate: 0.0, ..base.clone() }).is_empty());
    assert!(project(&base.with_years(101)).is_empty());
}
