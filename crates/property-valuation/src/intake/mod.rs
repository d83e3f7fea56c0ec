//! Boundary between loosely typed market data and the calculators.
//!
//! Numbers arrive as JSON numbers or formatted strings; they are parsed here once
//! and rejected with the offending field name instead of being coerced.

mod comparables;
mod numeric;
mod request;

use crate::valuation::ValuationError;

pub use comparables::{ComparableImportError, ComparableImporter};
pub use numeric::RawNumber;
pub use request::{
    MarketAssumptions, RawAssumptions, RawComparable, RawProperty, ValuationInput,
    ValuationRequest,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntakeError {
    #[error("{field} is not a valid number: '{value}'")]
    InvalidNumber { field: String, value: String },
    #[error("{field} has unrecognized value '{value}'")]
    UnknownVariant { field: String, value: String },
    #[error("{0} is required")]
    MissingField(String),
    #[error(transparent)]
    Valuation(#[from] ValuationError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::valuation::rates::ExpenseRates;
    use crate::valuation::{ComparableListing, Condition, PropertyCategory, PropertyFeature};

    const REQUEST: &str = r#"{
        "property": {
            "category": "Apartment",
            "area_sqm": "80 m2",
            "floor_level": 4,
            "condition": "good",
            "features": ["Lift", "sea view", "fireplace"],
            "indoor_parking": "1"
        },
        "comparables": [
            { "price": "420 000 €", "area_sqm": 80 },
            { "price": 380000, "area": "76" },
            { "price": null, "area_sqm": 70 }
        ],
        "benchmark": "6000",
        "assumptions": { "monthly_rent": 1500, "adr": "120" }
    }"#;

    #[test]
    fn validates_a_loosely_typed_request() {
        let request = ValuationRequest::from_json_str(REQUEST).expect("json parses");
        let input = request
            .validate(&ExpenseRates::default())
            .expect("request validates");

        assert_eq!(input.property.category, PropertyCategory::Apartment);
        assert_eq!(input.property.area_sqm(), 80.0);
        assert_eq!(input.property.floor_level, 4);
        assert_eq!(input.property.condition, Condition::Good);
        assert_eq!(input.property.indoor_parking, 1);
        assert!(input.property.has_feature(&PropertyFeature::Elevator));
        assert!(input.property.has_feature(&PropertyFeature::View));
        assert!(input
            .property
            .has_feature(&PropertyFeature::Other("fireplace".to_string())));
        assert_eq!(
            input.comparables,
            vec![
                ComparableListing::new(420_000.0, 80.0),
                ComparableListing::new(380_000.0, 76.0),
                ComparableListing::new(0.0, 70.0),
            ]
        );
        assert_eq!(input.benchmark_price_per_area, Some(6000.0));
        assert_eq!(input.assumptions.monthly_rent, Some(1500.0));
        assert_eq!(input.assumptions.average_daily_rate, Some(120.0));
    }

    #[test]
    fn fills_defaults_for_missing_assumptions() {
        let defaults = ExpenseRates::default();
        let assumptions =
            MarketAssumptions::fill_defaults(&RawAssumptions::default(), &defaults)
                .expect("defaults apply");

        assert_eq!(assumptions.monthly_rent, None);
        assert_eq!(assumptions.average_daily_rate, None);
        assert_eq!(
            assumptions.monthly_condo_fee,
            defaults.default_monthly_condo_fee
        );
    }

    #[test]
    fn rejects_negative_rent_at_the_boundary() {
        let raw = RawAssumptions {
            monthly_rent: Some(RawNumber::from(-10.0)),
            ..RawAssumptions::default()
        };

        let error = MarketAssumptions::fill_defaults(&raw, &ExpenseRates::default())
            .expect_err("negative rent rejected");

        assert!(matches!(
            error,
            IntakeError::Valuation(ValuationError::NegativeInput {
                field: "monthly_rent",
                ..
            })
        ));
    }

    #[test]
    fn reports_malformed_comparable_fields() {
        let request = ValuationRequest::from_json_str(
            r#"{
                "property": { "category": "house", "area_sqm": 120, "condition": "poor" },
                "comparables": [ { "price": 300000, "area_sqm": 100 }, { "price": "n/a", "area_sqm": 90 } ]
            }"#,
        )
        .expect("json parses");

        let error = request
            .validate(&ExpenseRates::default())
            .expect_err("malformed price");

        assert_eq!(
            error,
            IntakeError::InvalidNumber {
                field: "comparables[1].price".to_string(),
                value: "n/a".to_string(),
            }
        );
    }

    #[test]
    fn rejects_unknown_condition_and_missing_area() {
        let unknown = ValuationRequest::from_json_str(
            r#"{ "property": { "category": "house", "area_sqm": 120, "condition": "sparkling" } }"#,
        )
        .expect("json parses");
        assert_eq!(
            unknown.validate(&ExpenseRates::default()),
            Err(IntakeError::UnknownVariant {
                field: "property.condition".to_string(),
                value: "sparkling".to_string(),
            })
        );

        let missing = ValuationRequest::from_json_str(
            r#"{ "property": { "category": "house", "condition": "good" } }"#,
        )
        .expect("json parses");
        assert_eq!(
            missing.validate(&ExpenseRates::default()),
            Err(IntakeError::MissingField("property.area_sqm".to_string()))
        );
    }

    #[test]
    fn rejects_negative_parking_and_dot_grouped_prices() {
        let parking = ValuationRequest::from_json_str(
            r#"{ "property": { "category": "flat", "area_sqm": 60, "condition": "good", "indoor_parking": -2 } }"#,
        )
        .expect("json parses");
        assert_eq!(
            parking.validate(&ExpenseRates::default()),
            Err(IntakeError::InvalidNumber {
                field: "property.indoor_parking".to_string(),
                value: "-2".to_string(),
            })
        );

        let dotted = ValuationRequest::from_json_str(
            r#"{
                "property": { "category": "flat", "area_sqm": 80, "condition": "good" },
                "comparables": [ { "price": "420.000 €", "area_sqm": 80 } ]
            }"#,
        )
        .expect("json parses");
        assert_eq!(
            dotted.validate(&ExpenseRates::default()),
            Err(IntakeError::InvalidNumber {
                field: "comparables[0].price".to_string(),
                value: "420.000 €".to_string(),
            })
        );
    }

    #[test]
    fn zero_area_is_a_precondition_failure() {
        let request = ValuationRequest::from_json_str(
            r#"{ "property": { "category": "flat", "area_sqm": "0", "condition": "good" } }"#,
        )
        .expect("json parses");

        assert!(matches!(
            request.validate(&ExpenseRates::default()),
            Err(IntakeError::Valuation(ValuationError::NonPositiveInput {
                field: "area_sqm",
                ..
            }))
        ));
    }
}
