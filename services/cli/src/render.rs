use crate::infra::OutputFormat;
use property_valuation::error::AppError;
use property_valuation::valuation::report::format_currency;
use property_valuation::valuation::{PropertyReport, RentalScenarioResult, ReportStatus};
use std::io::Write;

pub(crate) fn render_report(report: &PropertyReport, format: OutputFormat) -> Result<(), AppError> {
    match format {
        OutputFormat::Json => {
            let mut stdout = std::io::stdout().lock();
            serde_json::to_writer_pretty(&mut stdout, report)
                .map_err(|err| AppError::Io(err.into()))?;
            writeln!(stdout)?;
        }
        OutputFormat::Text => print!("{}", render_text(report)),
    }
    Ok(())
}

pub(crate) fn render_text(report: &PropertyReport) -> String {
    let property = &report.property;
    let valuation = &report.valuation;
    let mut out = String::new();

    out.push_str(&format!(
        "Valuation report ({})\n",
        report.valuation_date.format("%Y-%m-%d")
    ));
    out.push_str(&format!(
        "- {} | {} sqm | floor {} | {} condition\n",
        property.category.label(),
        property.area_sqm(),
        property.floor_level,
        property.condition.label()
    ));
    if !property.features.is_empty() || property.indoor_parking > 0 {
        let mut amenities: Vec<String> = property.features.iter().map(ToString::to_string).collect();
        if property.indoor_parking > 0 {
            amenities.push(format!("{} indoor parking", property.indoor_parking));
        }
        out.push_str(&format!("- Amenities: {}\n", amenities.join(", ")));
    }

    if report.status == ReportStatus::InsufficientData {
        out.push_str("\nInsufficient data: supply comparable sales or a benchmark price.\n");
        return out;
    }

    out.push_str("\nValuation\n");
    out.push_str(&format!(
        "- Estimated value: {} (range {} to {})\n",
        format_currency(valuation.estimated_value),
        format_currency(valuation.value_range.0),
        format_currency(valuation.value_range.1)
    ));
    out.push_str(&format!(
        "- Price per sqm: {:.2} from {} ({} comparables used, multiplier {:.2})\n",
        valuation.price_per_area,
        valuation.source.label(),
        valuation.comparables_used,
        valuation.multiplier
    ));

    if let Some(base) = &report.base_expenses {
        out.push_str("\nOwnership costs (annual)\n");
        out.push_str(&format!(
            "- Tax {} | maintenance {} | condo fees {}\n",
            format_currency(base.annual_tax.round() as i64),
            format_currency(base.annual_maintenance.round() as i64),
            format_currency(base.annual_condo_fees.round() as i64)
        ));
    }

    for scenario in [&report.long_term, &report.short_term].into_iter().flatten() {
        out.push_str(&render_scenario(scenario));
    }

    if let Some(comparison) = &report.comparison {
        out.push_str(&format!(
            "\nRecommended strategy: {} ({:+.2} pts short-term spread)\n",
            comparison.recommended.label(),
            comparison.net_yield_spread
        ));
    }

    if let Some(renovation) = &report.renovation {
        out.push_str("\nRenovation potential\n");
        out.push_str(&format!(
            "- Cost {} | value increase {} | future value {} | ROI {:.2}%\n",
            format_currency(renovation.total_cost),
            format_currency(renovation.value_increase),
            format_currency(renovation.future_value),
            renovation.roi_percent
        ));
    }

    out
}

fn render_scenario(scenario: &RentalScenarioResult) -> String {
    format!(
        "\n{}\n- Gross income {} | expenses {} | net {}\n- Gross yield {:.2}% | net yield {:.2}% | cash flow {} / month | occupancy {:.0}%\n",
        scenario.strategy.label(),
        format_currency(scenario.gross_annual_income),
        format_currency(scenario.total_expenses),
        format_currency(scenario.yearly_net_income),
        scenario.gross_yield_percent,
        scenario.net_yield_percent,
        format_currency(scenario.monthly_cash_flow),
        scenario.occupancy_rate_percent
    )
}
