use super::domain::{require_positive, Condition, ValuationError};
use super::rates::RenovationTable;
use super::{round_currency, round_two_decimals};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenovationEstimate {
    pub total_cost: i64,
    pub value_increase: i64,
    pub future_value: i64,
    /// Negative when the uplift does not cover the works.
    pub roi_percent: f64,
}

/// Estimates renovation cost and value uplift from declared condition alone.
#[derive(Debug, Clone, Default)]
pub struct RenovationEstimator {
    table: RenovationTable,
}

impl RenovationEstimator {
    pub fn new(table: RenovationTable) -> Self {
        Self { table }
    }

    /// `condition` of `None` prices the works with the unassessed tier.
    pub fn estimate_renovation_potential(
        &self,
        current_value: f64,
        area_sqm: f64,
        condition: Option<Condition>,
    ) -> Result<RenovationEstimate, ValuationError> {
        let current_value = require_positive("current_value", current_value)?;
        let area_sqm = require_positive("area_sqm", area_sqm)?;
        let tier = self.table.tier(condition);

        let total_cost = tier.cost_per_sqm * area_sqm;
        let future_value = current_value * (1.0 + tier.value_uplift);
        let value_increase = future_value - current_value;
        let roi_percent = (value_increase - total_cost) / total_cost * 100.0;

        debug!(
            ?condition,
            total_cost, value_increase, roi_percent, "estimated renovation potential"
        );

        Ok(RenovationEstimate {
            total_cost: round_currency(total_cost),
            value_increase: round_currency(value_increase),
            future_value: round_currency(future_value),
            roi_percent: round_two_decimals(roi_percent),
        })
    }
}
