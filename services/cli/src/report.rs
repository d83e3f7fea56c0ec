use crate::infra::{parse_date, today_or, OutputFormat};
use crate::render::render_report;
use chrono::NaiveDate;
use clap::Args;
use property_valuation::error::AppError;
use property_valuation::intake::{ComparableImporter, ValuationRequest};
use property_valuation::valuation::{PropertyAnalyzer, ValuationRates};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// JSON valuation request (property, comparables, benchmark, assumptions)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Optional CSV export of comparable sales appended to the request's list
    #[arg(long)]
    pub(crate) comparables: Option<PathBuf>,
    /// Valuation date for the report (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) valuation_date: Option<NaiveDate>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

pub(crate) fn run_report(args: ReportArgs, rates: &ValuationRates) -> Result<(), AppError> {
    let ReportArgs {
        input,
        comparables,
        valuation_date,
        format,
    } = args;

    let request = ValuationRequest::from_reader(BufReader::new(File::open(&input)?))?;
    let mut validated = request.validate(&rates.expenses)?;

    if let Some(path) = comparables {
        let imported = ComparableImporter::from_path(&path)?;
        info!(path = %path.display(), rows = imported.len(), "appending imported comparables");
        validated.comparables.extend(imported);
    }

    let report = PropertyAnalyzer::new(rates).analyze(&validated, today_or(valuation_date))?;
    render_report(&report, format)
}
