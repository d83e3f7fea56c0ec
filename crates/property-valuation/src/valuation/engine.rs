use super::domain::{usable_comparables, ComparableListing, PropertyDescription, PropertyFeature};
use super::rates::PricingRates;
use super::{round_currency, round_two_decimals};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which price signals fed the final price per area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceSource {
    ComparablesAndBenchmark,
    ComparablesOnly,
    BenchmarkOnly,
    None,
}

impl PriceSource {
    pub fn label(&self) -> &'static str {
        match self {
            PriceSource::ComparablesAndBenchmark => "comparables blended with market benchmark",
            PriceSource::ComparablesOnly => "comparable sales",
            PriceSource::BenchmarkOnly => "market benchmark",
            PriceSource::None => "no price signal",
        }
    }
}

/// Unadjusted price per area and where it came from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendedPrice {
    pub price_per_area: f64,
    pub source: PriceSource,
    pub comparables_used: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationResult {
    pub estimated_value: i64,
    pub price_per_area: f64,
    pub value_range: (i64, i64),
    pub multiplier: f64,
    pub comparables_used: usize,
    pub source: PriceSource,
}

impl ValuationResult {
    /// A zero estimate means neither comparables nor a benchmark were usable.
    pub fn is_insufficient(&self) -> bool {
        self.estimated_value == 0
    }
}

/// Prices a property from comparable sales and an optional benchmark.
#[derive(Debug, Clone)]
pub struct ValuationEngine {
    rates: PricingRates,
}

impl ValuationEngine {
    pub fn new(rates: PricingRates) -> Self {
        Self { rates }
    }

    pub fn estimate_value(
        &self,
        property: &PropertyDescription,
        comparables: &[ComparableListing],
        external_benchmark: Option<f64>,
    ) -> ValuationResult {
        let blended = self.blended_price_per_area(comparables, external_benchmark);
        let multiplier = self.multiplier(property);
        let final_price_per_area = blended.price_per_area * multiplier;

        let estimated_value = round_currency(final_price_per_area * property.area_sqm());
        let band = self.rates.value_band;
        let value_range = (
            round_currency(estimated_value as f64 * (1.0 - band)),
            round_currency(estimated_value as f64 * (1.0 + band)),
        );

        debug!(
            source = ?blended.source,
            comparables_used = blended.comparables_used,
            multiplier,
            final_price_per_area,
            estimated_value,
            "estimated property value"
        );

        ValuationResult {
            estimated_value,
            price_per_area: round_two_decimals(final_price_per_area),
            value_range,
            multiplier,
            comparables_used: blended.comparables_used,
            source: blended.source,
        }
    }

    /// Blends the simple mean of comparable prices per area with the benchmark.
    pub fn blended_price_per_area(
        &self,
        comparables: &[ComparableListing],
        external_benchmark: Option<f64>,
    ) -> BlendedPrice {
        let usable = usable_comparables(comparables);
        let comparable_mean = if usable.is_empty() {
            None
        } else {
            let total: f64 = usable.iter().map(ComparableListing::price_per_area).sum();
            Some(total / usable.len() as f64)
        };

        let benchmark = external_benchmark.filter(|value| value.is_finite() && *value > 0.0);
        if external_benchmark.is_some() && benchmark.is_none() {
            debug!(?external_benchmark, "ignoring unusable market benchmark");
        }

        let (price_per_area, source) = match (comparable_mean, benchmark) {
            (Some(mean), Some(benchmark)) => (
                mean * self.rates.comparable_weight + benchmark * self.rates.benchmark_weight,
                PriceSource::ComparablesAndBenchmark,
            ),
            (Some(mean), None) => (mean, PriceSource::ComparablesOnly),
            (None, Some(benchmark)) => (benchmark, PriceSource::BenchmarkOnly),
            (None, None) => (0.0, PriceSource::None),
        };

        BlendedPrice {
            price_per_area,
            source,
            comparables_used: usable.len(),
        }
    }

    /// Condition multiplier plus every applicable feature bonus.
    pub fn multiplier(&self, property: &PropertyDescription) -> f64 {
        let bonuses = &self.rates.bonuses;
        let mut multiplier = self.rates.conditions.for_condition(property.condition);

        if property.has_feature(&PropertyFeature::Elevator)
            && property.floor_level > bonuses.elevator_min_floor
        {
            multiplier += bonuses.elevator;
        }
        if property.has_feature(&PropertyFeature::Pool) {
            multiplier += bonuses.pool;
        }
        if property.has_feature(&PropertyFeature::View) {
            multiplier += bonuses.view;
        }
        if property.indoor_parking > 0 {
            multiplier += bonuses.indoor_parking;
        }

        multiplier
    }
}

impl Default for ValuationEngine {
    fn default() -> Self {
        Self::new(PricingRates::default())
    }
}
