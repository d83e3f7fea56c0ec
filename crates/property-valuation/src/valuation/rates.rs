use super::domain::Condition;
use serde::{Deserialize, Serialize};

/// Every tunable constant used by the valuation formulas.
///
/// The engines take their own section of this struct at construction and never
/// read literals of their own, so a single override (for example from the
/// environment) reaches every formula that depends on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationRates {
    pub expenses: ExpenseRates,
    pub valuation: PricingRates,
    pub long_term: RentalRates,
    pub short_term: RentalRates,
    pub renovation: RenovationTable,
}

impl ValuationRates {
    pub fn standard() -> Self {
        Self {
            expenses: ExpenseRates::default(),
            valuation: PricingRates::default(),
            long_term: RentalRates::long_term(),
            short_term: RentalRates::short_term(),
            renovation: RenovationTable::default(),
        }
    }
}

impl Default for ValuationRates {
    fn default() -> Self {
        Self::standard()
    }
}

/// Recurring ownership costs expressed against property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRates {
    pub tax_rate: f64,
    pub maintenance_rate: f64,
    pub default_monthly_condo_fee: f64,
}

impl Default for ExpenseRates {
    fn default() -> Self {
        Self {
            tax_rate: 0.0106,
            maintenance_rate: 0.01,
            default_monthly_condo_fee: 100.0,
        }
    }
}

/// Blend weights, condition table and feature bonuses used to price a property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRates {
    pub comparable_weight: f64,
    pub benchmark_weight: f64,
    pub conditions: ConditionMultipliers,
    pub bonuses: FeatureBonuses,
    /// Half-width of the reported value band, as a fraction of the estimate.
    pub value_band: f64,
}

impl Default for PricingRates {
    fn default() -> Self {
        Self {
            comparable_weight: 0.6,
            benchmark_weight: 0.4,
            conditions: ConditionMultipliers::default(),
            bonuses: FeatureBonuses::default(),
            value_band: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionMultipliers {
    pub excellent: f64,
    pub good: f64,
    pub livable: f64,
    pub poor: f64,
    pub ruin: f64,
}

impl ConditionMultipliers {
    pub fn for_condition(&self, condition: Condition) -> f64 {
        match condition {
            Condition::Excellent => self.excellent,
            Condition::Good => self.good,
            Condition::Livable => self.livable,
            Condition::Poor => self.poor,
            Condition::Ruin => self.ruin,
        }
    }
}

impl Default for ConditionMultipliers {
    fn default() -> Self {
        Self {
            excellent: 1.15,
            good: 1.05,
            livable: 1.0,
            poor: 0.85,
            ruin: 0.6,
        }
    }
}

/// Additive multiplier bonuses; each applies independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureBonuses {
    pub elevator: f64,
    /// Elevator bonus applies strictly above this floor.
    pub elevator_min_floor: i32,
    pub pool: f64,
    pub view: f64,
    pub indoor_parking: f64,
}

impl Default for FeatureBonuses {
    fn default() -> Self {
        Self {
            elevator: 0.05,
            elevator_min_floor: 2,
            pool: 0.05,
            view: 0.03,
            indoor_parking: 0.05,
        }
    }
}

/// Income model constants for one letting strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentalRates {
    pub management_rate: f64,
    pub occupancy_rate: f64,
    pub monthly_utilities: f64,
}

impl RentalRates {
    pub fn long_term() -> Self {
        Self {
            management_rate: 0.10,
            occupancy_rate: 0.95,
            monthly_utilities: 0.0,
        }
    }

    pub fn short_term() -> Self {
        Self {
            management_rate: 0.20,
            occupancy_rate: 0.65,
            monthly_utilities: 150.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenovationTier {
    pub cost_per_sqm: f64,
    pub value_uplift: f64,
}

impl RenovationTier {
    const fn new(cost_per_sqm: f64, value_uplift: f64) -> Self {
        Self {
            cost_per_sqm,
            value_uplift,
        }
    }
}

/// Renovation economics as a step function of declared condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenovationTable {
    pub excellent: RenovationTier,
    pub good: RenovationTier,
    pub livable: RenovationTier,
    pub poor: RenovationTier,
    pub ruin: RenovationTier,
    pub unassessed: RenovationTier,
}

impl RenovationTable {
    pub fn tier(&self, condition: Option<Condition>) -> RenovationTier {
        match condition {
            Some(Condition::Excellent) => self.excellent,
            Some(Condition::Good) => self.good,
            Some(Condition::Livable) => self.livable,
            Some(Condition::Poor) => self.poor,
            Some(Condition::Ruin) => self.ruin,
            None => self.unassessed,
        }
    }
}

impl Default for RenovationTable {
    fn default() -> Self {
        Self {
            excellent: RenovationTier::new(100.0, 0.05),
            good: RenovationTier::new(300.0, 0.15),
            livable: RenovationTier::new(600.0, 0.25),
            poor: RenovationTier::new(1000.0, 0.40),
            ruin: RenovationTier::new(1500.0, 0.60),
            unassessed: RenovationTier::new(500.0, 0.20),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_multipliers_decrease_with_condition() {
        let table = ConditionMultipliers::default();
        let values: Vec<f64> = Condition::ordered()
            .into_iter()
            .map(|condition| table.for_condition(condition))
            .collect();
        assert!(values.windows(2).all(|pair| pair[0] > pair[1]));
        assert_eq!(table.for_condition(Condition::Livable), 1.0);
    }

    #[test]
    fn standard_rates_distinguish_letting_strategies() {
        let rates = ValuationRates::standard();
        assert!(rates.short_term.management_rate > rates.long_term.management_rate);
        assert_eq!(rates.long_term.monthly_utilities, 0.0);
        assert_eq!(rates.short_term.monthly_utilities, 150.0);
    }

    #[test]
    fn renovation_table_falls_back_when_condition_unassessed() {
        let table = RenovationTable::default();
        assert_eq!(table.tier(None), RenovationTier::new(500.0, 0.20));
        assert_eq!(
            table.tier(Some(Condition::Ruin)),
            RenovationTier::new(1500.0, 0.60)
        );
    }
}
