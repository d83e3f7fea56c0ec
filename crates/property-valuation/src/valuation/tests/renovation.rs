use super::common::*;
use crate::valuation::{Condition, ValuationError};

#[test]
fn prices_works_from_condition_tier() {
    let estimator = renovation_estimator();

    let estimate = estimator
        .estimate_renovation_potential(400_000.0, 80.0, Some(Condition::Good))
        .expect("estimate computed");

    assert_eq!(estimate.total_cost, 24_000);
    assert_eq!(estimate.value_increase, 60_000);
    assert_eq!(estimate.future_value, 460_000);
    assert_eq!(estimate.roi_percent, 150.0);
}

#[test]
fn roi_turns_negative_when_uplift_misses_cost() {
    let estimator = renovation_estimator();

    let estimate = estimator
        .estimate_renovation_potential(50_000.0, 80.0, Some(Condition::Excellent))
        .expect("estimate computed");

    assert_eq!(estimate.total_cost, 8_000);
    assert_eq!(estimate.value_increase, 2_500);
    assert!(estimate.value_increase < estimate.total_cost);
    assert_eq!(estimate.roi_percent, -68.75);
}

#[test]
fn unassessed_condition_uses_fallback_tier() {
    let estimate = renovation_estimator()
        .estimate_renovation_potential(200_000.0, 100.0, None)
        .expect("estimate computed");

    assert_eq!(estimate.total_cost, 50_000);
    assert_eq!(estimate.value_increase, 40_000);
    assert_eq!(estimate.roi_percent, -20.0);
}

#[test]
fn worse_condition_costs_more_per_square_metre() {
    let estimator = renovation_estimator();
    let costs: Vec<i64> = Condition::ordered()
        .into_iter()
        .map(|condition| {
            estimator
                .estimate_renovation_potential(300_000.0, 90.0, Some(condition))
                .expect("estimate computed")
                .total_cost
        })
        .collect();

    assert!(costs.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn rejects_zero_value_or_area() {
    let estimator = renovation_estimator();

    assert!(matches!(
        estimator.estimate_renovation_potential(0.0, 80.0, Some(Condition::Poor)),
        Err(ValuationError::NonPositiveInput {
            field: "current_value",
            ..
        })
    ));
    assert!(matches!(
        estimator.estimate_renovation_potential(100_000.0, 0.0, Some(Condition::Poor)),
        Err(ValuationError::NonPositiveInput {
            field: "area_sqm",
            ..
        })
    ));
}
