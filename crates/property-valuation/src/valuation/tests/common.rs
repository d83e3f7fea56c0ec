use crate::intake::{MarketAssumptions, ValuationInput};
use crate::valuation::{
    ComparableListing, Condition, ExpenseModel, PropertyCategory, PropertyDescription,
    RenovationEstimator, RentalScenarioCalculator, ValuationEngine, ValuationRates,
};
use chrono::NaiveDate;

pub(super) fn rates() -> ValuationRates {
    ValuationRates::standard()
}

pub(super) fn valuation_engine() -> ValuationEngine {
    ValuationEngine::new(rates().valuation)
}

pub(super) fn expense_model() -> ExpenseModel {
    ExpenseModel::new(rates().expenses)
}

pub(super) fn rental_calculator() -> RentalScenarioCalculator {
    let rates = rates();
    RentalScenarioCalculator::new(rates.long_term, rates.short_term)
}

pub(super) fn renovation_estimator() -> RenovationEstimator {
    RenovationEstimator::new(rates().renovation)
}

/// Ground-floor apartment without any price-moving amenity.
pub(super) fn apartment(area_sqm: f64, condition: Condition) -> PropertyDescription {
    PropertyDescription::new(PropertyCategory::Apartment, area_sqm, 1, condition)
        .expect("valid apartment")
}

/// Two recent sales averaging 5125 per square metre.
pub(super) fn nearby_sales() -> Vec<ComparableListing> {
    vec![
        ComparableListing::new(420_000.0, 80.0),
        ComparableListing::new(380_000.0, 76.0),
    ]
}

pub(super) fn valuation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date")
}

pub(super) fn input(
    property: PropertyDescription,
    comparables: Vec<ComparableListing>,
    monthly_rent: Option<f64>,
    average_daily_rate: Option<f64>,
) -> ValuationInput {
    ValuationInput {
        property,
        comparables,
        benchmark_price_per_area: None,
        assumptions: MarketAssumptions {
            monthly_rent,
            average_daily_rate,
            monthly_condo_fee: 100.0,
        },
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
