use super::domain::{require_non_negative, require_positive, ValuationError};
use super::rates::ExpenseRates;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Annual cost of holding a property. Scenario-specific lines stay at zero until
/// a rental calculator fills them in on its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExpenseProfile {
    pub annual_tax: f64,
    pub annual_maintenance: f64,
    pub annual_condo_fees: f64,
    pub management_cost: f64,
    pub utilities_cost: f64,
}

impl ExpenseProfile {
    /// Costs borne regardless of how the property is let.
    pub fn ownership_total(&self) -> f64 {
        self.annual_tax + self.annual_maintenance + self.annual_condo_fees
    }

    pub fn total(&self) -> f64 {
        self.ownership_total() + self.management_cost + self.utilities_cost
    }

    pub(crate) fn with_scenario_costs(self, management_cost: f64, utilities_cost: f64) -> Self {
        Self {
            management_cost,
            utilities_cost,
            ..self
        }
    }
}

/// Derives recurring ownership costs from property value.
#[derive(Debug, Clone)]
pub struct ExpenseModel {
    rates: ExpenseRates,
}

impl ExpenseModel {
    pub fn new(rates: ExpenseRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> &ExpenseRates {
        &self.rates
    }

    /// Base expenses for a property. `monthly_condo_fee` falls back to the
    /// configured default when absent.
    pub fn compute_base_expenses(
        &self,
        property_value: f64,
        monthly_condo_fee: Option<f64>,
    ) -> Result<ExpenseProfile, ValuationError> {
        let property_value = require_positive("property_value", property_value)?;
        let monthly_condo_fee = require_non_negative(
            "monthly_condo_fee",
            monthly_condo_fee.unwrap_or(self.rates.default_monthly_condo_fee),
        )?;

        let profile = ExpenseProfile {
            annual_tax: property_value * self.rates.tax_rate,
            annual_maintenance: property_value * self.rates.maintenance_rate,
            annual_condo_fees: monthly_condo_fee * 12.0,
            management_cost: 0.0,
            utilities_cost: 0.0,
        };

        debug!(
            property_value,
            annual_tax = profile.annual_tax,
            annual_maintenance = profile.annual_maintenance,
            annual_condo_fees = profile.annual_condo_fees,
            "computed base expenses"
        );

        Ok(profile)
    }
}

impl Default for ExpenseModel {
    fn default() -> Self {
        Self::new(ExpenseRates::default())
    }
}
