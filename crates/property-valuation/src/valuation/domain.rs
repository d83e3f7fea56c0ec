use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Precondition failures raised when a formula receives input it cannot price.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValuationError {
    #[error("{field} must be a positive finite number (found {value})")]
    NonPositiveInput { field: &'static str, value: f64 },
    #[error("{field} must not be negative (found {value})")]
    NegativeInput { field: &'static str, value: f64 },
}

pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, ValuationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ValuationError::NonPositiveInput { field, value })
    }
}

pub(crate) fn require_non_negative(field: &'static str, value: f64) -> Result<f64, ValuationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ValuationError::NegativeInput { field, value })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyCategory {
    House,
    Apartment,
}

impl PropertyCategory {
    pub fn label(&self) -> &'static str {
        match self {
            PropertyCategory::House => "House",
            PropertyCategory::Apartment => "Apartment",
        }
    }
}

/// Declared physical condition, ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Excellent,
    Good,
    Livable,
    Poor,
    Ruin,
}

impl Condition {
    pub fn ordered() -> [Condition; 5] {
        [
            Condition::Excellent,
            Condition::Good,
            Condition::Livable,
            Condition::Poor,
            Condition::Ruin,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Condition::Excellent => "Excellent",
            Condition::Good => "Good",
            Condition::Livable => "Livable",
            Condition::Poor => "Poor",
            Condition::Ruin => "Ruin",
        }
    }
}

impl FromStr for Condition {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize_token(value).as_str() {
            "excellent" | "new" | "renovated" => Ok(Condition::Excellent),
            "good" => Ok(Condition::Good),
            "livable" | "habitable" | "average" => Ok(Condition::Livable),
            "poor" | "needs renovation" | "to renovate" => Ok(Condition::Poor),
            "ruin" | "derelict" => Ok(Condition::Ruin),
            _ => Err(value.to_string()),
        }
    }
}

impl FromStr for PropertyCategory {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize_token(value).as_str() {
            "house" | "villa" | "detached" => Ok(PropertyCategory::House),
            "apartment" | "flat" | "condo" => Ok(PropertyCategory::Apartment),
            _ => Err(value.to_string()),
        }
    }
}

/// Amenity declared on the property. Only some of them move the price.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyFeature {
    Elevator,
    Pool,
    View,
    Balcony,
    Terrace,
    Garden,
    Other(String),
}

impl PropertyFeature {
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = normalize_token(value);
        let feature = match normalized.as_str() {
            "" => return None,
            "elevator" | "lift" => PropertyFeature::Elevator,
            "pool" | "swimming pool" => PropertyFeature::Pool,
            "view" | "sea view" | "panoramic view" => PropertyFeature::View,
            "balcony" => PropertyFeature::Balcony,
            "terrace" => PropertyFeature::Terrace,
            "garden" => PropertyFeature::Garden,
            _ => PropertyFeature::Other(normalized),
        };
        Some(feature)
    }
}

impl fmt::Display for PropertyFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyFeature::Elevator => f.write_str("elevator"),
            PropertyFeature::Pool => f.write_str("pool"),
            PropertyFeature::View => f.write_str("view"),
            PropertyFeature::Balcony => f.write_str("balcony"),
            PropertyFeature::Terrace => f.write_str("terrace"),
            PropertyFeature::Garden => f.write_str("garden"),
            PropertyFeature::Other(name) => f.write_str(name),
        }
    }
}

/// Property under valuation. Construct through [`PropertyDescription::new`] so the
/// area invariant holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyDescription {
    pub category: PropertyCategory,
    area_sqm: f64,
    pub floor_level: i32,
    pub condition: Condition,
    pub features: BTreeSet<PropertyFeature>,
    pub indoor_parking: u32,
}

impl PropertyDescription {
    pub fn new(
        category: PropertyCategory,
        area_sqm: f64,
        floor_level: i32,
        condition: Condition,
    ) -> Result<Self, ValuationError> {
        Ok(Self {
            category,
            area_sqm: require_positive("area_sqm", area_sqm)?,
            floor_level,
            condition,
            features: BTreeSet::new(),
            indoor_parking: 0,
        })
    }

    pub fn with_feature(mut self, feature: PropertyFeature) -> Self {
        self.features.insert(feature);
        self
    }

    pub fn with_indoor_parking(mut self, spaces: u32) -> Self {
        self.indoor_parking = spaces;
        self
    }

    pub fn area_sqm(&self) -> f64 {
        self.area_sqm
    }

    pub fn has_feature(&self, feature: &PropertyFeature) -> bool {
        self.features.contains(feature)
    }
}

/// Recent sale of a similar property.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparableListing {
    pub price: f64,
    pub area_sqm: f64,
}

impl ComparableListing {
    pub fn new(price: f64, area_sqm: f64) -> Self {
        Self { price, area_sqm }
    }

    pub fn is_valid(&self) -> bool {
        self.price.is_finite() && self.price > 0.0 && self.area_sqm.is_finite() && self.area_sqm > 0.0
    }

    pub fn price_per_area(&self) -> f64 {
        self.price / self.area_sqm
    }
}

/// Keeps only listings with a positive price and area.
pub fn usable_comparables(comparables: &[ComparableListing]) -> Vec<ComparableListing> {
    comparables
        .iter()
        .filter(|listing| listing.is_valid())
        .copied()
        .collect()
}

pub(crate) fn normalize_token(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "").replace(['_', '-'], " ");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.to_ascii_lowercase()
}
