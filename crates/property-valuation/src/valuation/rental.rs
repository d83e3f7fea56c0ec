use super::domain::{require_non_negative, require_positive, ValuationError};
use super::expenses::ExpenseProfile;
use super::rates::RentalRates;
use super::{round_currency, round_two_decimals};
use serde::{Deserialize, Serialize};
use tracing::debug;

const MONTHS_PER_YEAR: f64 = 12.0;
const NIGHTS_PER_YEAR: f64 = 365.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RentalStrategy {
    LongTerm,
    ShortTerm,
}

impl RentalStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            RentalStrategy::LongTerm => "Long-term lease",
            RentalStrategy::ShortTerm => "Short-term let",
        }
    }
}

/// Yield and cash-flow metrics for one letting strategy. Losses are reported as
/// negative figures, never clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalScenarioResult {
    pub strategy: RentalStrategy,
    pub gross_annual_income: i64,
    pub total_expenses: i64,
    /// Rounded gross income minus rounded expenses, so the three figures add up.
    pub yearly_net_income: i64,
    /// `yearly_net_income / 12`, rounded.
    pub monthly_cash_flow: i64,
    pub gross_yield_percent: f64,
    pub net_yield_percent: f64,
    pub cap_rate_percent: f64,
    pub occupancy_rate_percent: f64,
    pub expenses: ExpenseProfile,
}

/// Outcome of weighing both strategies against each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioComparison {
    pub recommended: RentalStrategy,
    /// Short-term net yield minus long-term net yield, in percentage points.
    pub net_yield_spread: f64,
}

#[derive(Debug, Clone)]
pub struct RentalScenarioCalculator {
    long_term: RentalRates,
    short_term: RentalRates,
}

impl RentalScenarioCalculator {
    pub fn new(long_term: RentalRates, short_term: RentalRates) -> Self {
        Self {
            long_term,
            short_term,
        }
    }

    /// Lease at a fixed monthly rent. Occupancy is reported but not applied to
    /// income, and the tenant carries utilities.
    pub fn compute_long_term_scenario(
        &self,
        property_value: f64,
        monthly_rent: f64,
        base_expenses: &ExpenseProfile,
    ) -> Result<RentalScenarioResult, ValuationError> {
        let property_value = require_positive("property_value", property_value)?;
        let monthly_rent = require_non_negative("monthly_rent", monthly_rent)?;

        let gross_annual_income = monthly_rent * MONTHS_PER_YEAR;
        let management_cost = gross_annual_income * self.long_term.management_rate;
        let expenses = base_expenses.with_scenario_costs(management_cost, 0.0);

        Ok(scenario(
            RentalStrategy::LongTerm,
            property_value,
            gross_annual_income,
            expenses,
            &self.long_term,
        ))
    }

    /// Nightly let. Occupancy discounts income and the owner carries utilities.
    pub fn compute_short_term_scenario(
        &self,
        property_value: f64,
        average_daily_rate: f64,
        base_expenses: &ExpenseProfile,
    ) -> Result<RentalScenarioResult, ValuationError> {
        let property_value = require_positive("property_value", property_value)?;
        let average_daily_rate = require_non_negative("average_daily_rate", average_daily_rate)?;

        let gross_annual_income =
            average_daily_rate * NIGHTS_PER_YEAR * self.short_term.occupancy_rate;
        let management_cost = gross_annual_income * self.short_term.management_rate;
        let utilities_cost = self.short_term.monthly_utilities * MONTHS_PER_YEAR;
        let expenses = base_expenses.with_scenario_costs(management_cost, utilities_cost);

        Ok(scenario(
            RentalStrategy::ShortTerm,
            property_value,
            gross_annual_income,
            expenses,
            &self.short_term,
        ))
    }

    /// Recommends the strategy with the better net yield; ties go to the lease.
    pub fn compare(
        &self,
        long_term: &RentalScenarioResult,
        short_term: &RentalScenarioResult,
    ) -> ScenarioComparison {
        let spread = short_term.net_yield_percent - long_term.net_yield_percent;
        let recommended = if spread > 0.0 {
            RentalStrategy::ShortTerm
        } else {
            RentalStrategy::LongTerm
        };

        ScenarioComparison {
            recommended,
            net_yield_spread: round_two_decimals(spread),
        }
    }
}

impl Default for RentalScenarioCalculator {
    fn default() -> Self {
        Self::new(RentalRates::long_term(), RentalRates::short_term())
    }
}

fn scenario(
    strategy: RentalStrategy,
    property_value: f64,
    gross_annual_income: f64,
    expenses: ExpenseProfile,
    rates: &RentalRates,
) -> RentalScenarioResult {
    let total_expenses = expenses.total();
    let net_annual_income = gross_annual_income - total_expenses;
    let net_yield_percent = round_two_decimals(net_annual_income / property_value * 100.0);

    let gross_annual_income_rounded = round_currency(gross_annual_income);
    let total_expenses_rounded = round_currency(total_expenses);
    let yearly_net_income = gross_annual_income_rounded - total_expenses_rounded;

    debug!(
        ?strategy,
        gross_annual_income,
        total_expenses,
        net_annual_income,
        "computed rental scenario"
    );

    RentalScenarioResult {
        strategy,
        gross_annual_income: gross_annual_income_rounded,
        total_expenses: total_expenses_rounded,
        yearly_net_income,
        monthly_cash_flow: round_currency(yearly_net_income as f64 / MONTHS_PER_YEAR),
        gross_yield_percent: round_two_decimals(gross_annual_income / property_value * 100.0),
        net_yield_percent,
        cap_rate_percent: net_yield_percent,
        occupancy_rate_percent: round_two_decimals(rates.occupancy_rate * 100.0),
        expenses,
    }
}
