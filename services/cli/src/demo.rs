use crate::infra::{parse_date, today_or, OutputFormat};
use crate::render::render_report;
use chrono::NaiveDate;
use clap::Args;
use property_valuation::error::AppError;
use property_valuation::intake::ValuationRequest;
use property_valuation::valuation::{PropertyAnalyzer, ValuationRates};

/// Third-floor apartment with a lift and a parking space, priced from three
/// nearby sales (one of them unusable) and a market benchmark.
const SAMPLE_REQUEST: &str = r#"{
    "property": {
        "category": "apartment",
        "area_sqm": 80,
        "floor_level": 3,
        "condition": "good",
        "features": ["elevator", "balcony"],
        "indoor_parking": 1
    },
    "comparables": [
        { "price": 420000, "area_sqm": 80 },
        { "price": "380 000 €", "area_sqm": "76 m2" },
        { "price": null, "area_sqm": 90 }
    ],
    "benchmark_price_per_area": 5600,
    "assumptions": {
        "monthly_rent": 1650,
        "average_daily_rate": 135,
        "monthly_condo_fee": 180
    }
}"#;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Valuation date for the report (defaults to today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) valuation_date: Option<NaiveDate>,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub(crate) format: OutputFormat,
}

pub(crate) fn run_demo(args: DemoArgs, rates: &ValuationRates) -> Result<(), AppError> {
    if args.format == OutputFormat::Text {
        println!("Property valuation demo");
    }
    let input = ValuationRequest::from_json_str(SAMPLE_REQUEST)?.validate(&rates.expenses)?;
    let report = PropertyAnalyzer::new(rates).analyze(&input, today_or(args.valuation_date))?;
    render_report(&report, args.format)
}
