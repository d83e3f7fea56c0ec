use super::numeric::parse_text;
use super::IntakeError;
use crate::valuation::domain::normalize_token;
use crate::valuation::ComparableListing;
use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;
use tracing::debug;

#[derive(Debug)]
pub enum ComparableImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Intake(IntakeError),
}

impl std::fmt::Display for ComparableImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ComparableImportError::Io(err) => {
                write!(f, "failed to read comparables export: {}", err)
            }
            ComparableImportError::Csv(err) => write!(f, "invalid comparables CSV data: {}", err),
            ComparableImportError::Intake(err) => {
                write!(f, "comparables export contains bad figures: {}", err)
            }
        }
    }
}

impl std::error::Error for ComparableImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ComparableImportError::Io(err) => Some(err),
            ComparableImportError::Csv(err) => Some(err),
            ComparableImportError::Intake(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ComparableImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ComparableImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<IntakeError> for ComparableImportError {
    fn from(err: IntakeError) -> Self {
        Self::Intake(err)
    }
}

/// Reads comparable sales from a CSV export with `price` and `area` columns.
/// Header names are matched case-insensitively; extra columns are ignored.
pub struct ComparableImporter;

impl ComparableImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
    ) -> Result<Vec<ComparableListing>, ComparableImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ComparableListing>, ComparableImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers: csv::StringRecord = csv_reader
            .headers()?
            .iter()
            .map(normalize_token)
            .collect();
        csv_reader.set_headers(headers);

        let mut listings = Vec::new();
        for (index, record) in csv_reader.deserialize::<ComparableRow>().enumerate() {
            let row = record?;
            listings.push(row.into_listing(index)?);
        }

        debug!(rows = listings.len(), "imported comparable listings");
        Ok(listings)
    }
}

#[derive(Debug, Deserialize)]
struct ComparableRow {
    #[serde(
        alias = "sale price",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    price: Option<String>,
    #[serde(
        alias = "area sqm",
        alias = "surface",
        alias = "size",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    area: Option<String>,
}

impl ComparableRow {
    fn into_listing(self, index: usize) -> Result<ComparableListing, IntakeError> {
        let price = match self.price.as_deref() {
            Some(text) => parse_text(&format!("comparables[{index}].price"), text)?,
            None => None,
        };
        let area = match self.area.as_deref() {
            Some(text) => parse_text(&format!("comparables[{index}].area_sqm"), text)?,
            None => None,
        };

        Ok(ComparableListing::new(
            price.unwrap_or(0.0),
            area.unwrap_or(0.0),
        ))
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
