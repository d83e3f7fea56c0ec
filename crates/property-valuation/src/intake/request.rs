use super::numeric::{parse_count, parse_optional, parse_required, parse_whole, RawNumber};
use super::IntakeError;
use crate::valuation::domain::{require_non_negative, PropertyFeature};
use crate::valuation::rates::ExpenseRates;
use crate::valuation::{ComparableListing, Condition, PropertyCategory, PropertyDescription};
use serde::Deserialize;
use std::io::Read;

/// Valuation request exactly as the report workflow receives it. Nothing in
/// here is trusted until [`ValuationRequest::validate`] has run.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValuationRequest {
    #[serde(default)]
    pub property: RawProperty,
    #[serde(default)]
    pub comparables: Vec<RawComparable>,
    #[serde(default, alias = "benchmark")]
    pub benchmark_price_per_area: Option<RawNumber>,
    #[serde(default)]
    pub assumptions: RawAssumptions,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProperty {
    #[serde(default, alias = "type")]
    pub category: Option<String>,
    #[serde(default, alias = "area")]
    pub area_sqm: Option<RawNumber>,
    #[serde(default, alias = "floor")]
    pub floor_level: Option<RawNumber>,
    #[serde(default)]
    pub condition: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default, alias = "parking")]
    pub indoor_parking: Option<RawNumber>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawComparable {
    #[serde(default)]
    pub price: Option<RawNumber>,
    #[serde(default, alias = "area")]
    pub area_sqm: Option<RawNumber>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAssumptions {
    #[serde(default)]
    pub monthly_rent: Option<RawNumber>,
    #[serde(default, alias = "adr")]
    pub average_daily_rate: Option<RawNumber>,
    #[serde(default)]
    pub monthly_condo_fee: Option<RawNumber>,
}

/// Rent and fee assumptions with every default already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketAssumptions {
    /// Absent when no lease estimate is known; the long-term scenario is skipped.
    pub monthly_rent: Option<f64>,
    /// Absent when no nightly estimate is known; the short-term scenario is skipped.
    pub average_daily_rate: Option<f64>,
    pub monthly_condo_fee: f64,
}

impl MarketAssumptions {
    pub fn fill_defaults(
        raw: &RawAssumptions,
        defaults: &ExpenseRates,
    ) -> Result<Self, IntakeError> {
        let monthly_rent = parse_optional("assumptions.monthly_rent", raw.monthly_rent.as_ref())?
            .map(|rent| require_non_negative("monthly_rent", rent))
            .transpose()?;
        let average_daily_rate = parse_optional(
            "assumptions.average_daily_rate",
            raw.average_daily_rate.as_ref(),
        )?
        .map(|rate| require_non_negative("average_daily_rate", rate))
        .transpose()?;
        let monthly_condo_fee = require_non_negative(
            "monthly_condo_fee",
            parse_optional(
                "assumptions.monthly_condo_fee",
                raw.monthly_condo_fee.as_ref(),
            )?
            .unwrap_or(defaults.default_monthly_condo_fee),
        )?;

        Ok(Self {
            monthly_rent,
            average_daily_rate,
            monthly_condo_fee,
        })
    }
}

/// Typed, validated request ready for the calculators.
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationInput {
    pub property: PropertyDescription,
    pub comparables: Vec<ComparableListing>,
    pub benchmark_price_per_area: Option<f64>,
    pub assumptions: MarketAssumptions,
}

impl ValuationRequest {
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    pub fn validate(&self, defaults: &ExpenseRates) -> Result<ValuationInput, IntakeError> {
        let property = self.property.validate()?;

        let comparables = self
            .comparables
            .iter()
            .enumerate()
            .map(|(index, comparable)| comparable.validate(index))
            .collect::<Result<Vec<_>, _>>()?;

        let benchmark_price_per_area = parse_optional(
            "benchmark_price_per_area",
            self.benchmark_price_per_area.as_ref(),
        )?;

        Ok(ValuationInput {
            property,
            comparables,
            benchmark_price_per_area,
            assumptions: MarketAssumptions::fill_defaults(&self.assumptions, defaults)?,
        })
    }
}

impl RawProperty {
    fn validate(&self) -> Result<PropertyDescription, IntakeError> {
        let category = self
            .category
            .as_deref()
            .ok_or_else(|| IntakeError::MissingField("property.category".to_string()))?
            .parse::<PropertyCategory>()
            .map_err(|value| IntakeError::UnknownVariant {
                field: "property.category".to_string(),
                value,
            })?;
        let condition = self
            .condition
            .as_deref()
            .ok_or_else(|| IntakeError::MissingField("property.condition".to_string()))?
            .parse::<Condition>()
            .map_err(|value| IntakeError::UnknownVariant {
                field: "property.condition".to_string(),
                value,
            })?;
        let area_sqm = parse_required("property.area_sqm", self.area_sqm.as_ref())?;
        let floor_level = parse_whole("property.floor_level", self.floor_level.as_ref())?
            .unwrap_or(0) as i32;
        let indoor_parking =
            parse_count("property.indoor_parking", self.indoor_parking.as_ref())?.unwrap_or(0);

        let mut property = PropertyDescription::new(category, area_sqm, floor_level, condition)?
            .with_indoor_parking(indoor_parking);
        for feature in self.features.iter().filter_map(|name| PropertyFeature::parse(name)) {
            property = property.with_feature(feature);
        }

        Ok(property)
    }
}

impl RawComparable {
    /// Missing figures become zero so the engine filters the listing out;
    /// malformed figures are errors.
    fn validate(&self, index: usize) -> Result<ComparableListing, IntakeError> {
        let price = parse_optional(&format!("comparables[{index}].price"), self.price.as_ref())?;
        let area_sqm = parse_optional(
            &format!("comparables[{index}].area_sqm"),
            self.area_sqm.as_ref(),
        )?;

        Ok(ComparableListing::new(
            price.unwrap_or(0.0),
            area_sqm.unwrap_or(0.0),
        ))
    }
}
