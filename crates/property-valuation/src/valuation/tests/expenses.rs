use super::common::*;
use crate::valuation::ValuationError;

#[test]
fn derives_base_expenses_from_value() {
    let model = expense_model();

    let profile = model
        .compute_base_expenses(400_000.0, None)
        .expect("expenses computed");

    assert_close(profile.annual_tax, 4240.0);
    assert_close(profile.annual_maintenance, 4000.0);
    assert_close(profile.annual_condo_fees, 1200.0);
    assert_eq!(profile.management_cost, 0.0);
    assert_eq!(profile.utilities_cost, 0.0);
    assert_close(profile.total(), 9440.0);
}

#[test]
fn uses_supplied_condo_fee_over_default() {
    let model = expense_model();

    let profile = model
        .compute_base_expenses(250_000.0, Some(250.0))
        .expect("expenses computed");
    assert_close(profile.annual_condo_fees, 3000.0);

    let house = model
        .compute_base_expenses(250_000.0, Some(0.0))
        .expect("expenses computed");
    assert_eq!(house.annual_condo_fees, 0.0);
}

#[test]
fn rejects_non_positive_property_value() {
    let model = expense_model();

    for value in [0.0, -1.0, f64::NAN] {
        let error = model
            .compute_base_expenses(value, None)
            .expect_err("precondition enforced");
        assert!(matches!(
            error,
            ValuationError::NonPositiveInput {
                field: "property_value",
                ..
            }
        ));
    }
}

#[test]
fn rejects_negative_condo_fee() {
    let error = expense_model()
        .compute_base_expenses(300_000.0, Some(-20.0))
        .expect_err("negative fee rejected");

    assert_eq!(
        error,
        ValuationError::NegativeInput {
            field: "monthly_condo_fee",
            value: -20.0
        }
    );
}
