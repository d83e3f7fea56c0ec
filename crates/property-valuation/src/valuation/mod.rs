//! Deterministic valuation and investment metrics for a single property.
//!
//! Every component is a stateless calculator built from its section of
//! [`ValuationRates`]; results are plain values with currency rounded to whole
//! units and percentages rounded to two decimals.

pub mod domain;
mod engine;
mod expenses;
pub mod rates;
mod renovation;
mod rental;
pub mod report;

#[cfg(test)]
mod tests;

pub use domain::{
    usable_comparables, ComparableListing, Condition, PropertyCategory, PropertyDescription,
    PropertyFeature, ValuationError,
};
pub use engine::{BlendedPrice, PriceSource, ValuationEngine, ValuationResult};
pub use expenses::{ExpenseModel, ExpenseProfile};
pub use rates::ValuationRates;
pub use renovation::{RenovationEstimate, RenovationEstimator};
pub use rental::{
    RentalScenarioCalculator, RentalScenarioResult, RentalStrategy, ScenarioComparison,
};
pub use report::{PropertyAnalyzer, PropertyReport, ReportStatus};

pub(crate) fn round_currency(value: f64) -> i64 {
    value.round() as i64
}

pub(crate) fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
