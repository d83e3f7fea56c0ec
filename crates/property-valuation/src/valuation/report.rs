use super::domain::{PropertyDescription, ValuationError};
use super::engine::{ValuationEngine, ValuationResult};
use super::expenses::{ExpenseModel, ExpenseProfile};
use super::rates::ValuationRates;
use super::renovation::{RenovationEstimate, RenovationEstimator};
use super::rental::{RentalScenarioCalculator, RentalScenarioResult, ScenarioComparison};
use crate::intake::ValuationInput;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Complete,
    InsufficientData,
}

/// Everything the presentation layer shows for one property.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyReport {
    pub valuation_date: NaiveDate,
    pub status: ReportStatus,
    pub property: PropertyDescription,
    pub valuation: ValuationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_expenses: Option<ExpenseProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_term: Option<RentalScenarioResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_term: Option<RentalScenarioResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ScenarioComparison>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub renovation: Option<RenovationEstimate>,
    pub highlights: Vec<String>,
}

/// Runs the calculators in dependency order for a validated request.
#[derive(Debug, Clone)]
pub struct PropertyAnalyzer {
    expenses: ExpenseModel,
    valuation: ValuationEngine,
    rental: RentalScenarioCalculator,
    renovation: RenovationEstimator,
}

impl PropertyAnalyzer {
    pub fn new(rates: &ValuationRates) -> Self {
        Self {
            expenses: ExpenseModel::new(rates.expenses.clone()),
            valuation: ValuationEngine::new(rates.valuation.clone()),
            rental: RentalScenarioCalculator::new(
                rates.long_term.clone(),
                rates.short_term.clone(),
            ),
            renovation: RenovationEstimator::new(rates.renovation.clone()),
        }
    }

    pub fn analyze(
        &self,
        input: &ValuationInput,
        valuation_date: NaiveDate,
    ) -> Result<PropertyReport, ValuationError> {
        let property = &input.property;
        let valuation =
            self.valuation
                .estimate_value(property, &input.comparables, input.benchmark_price_per_area);

        let mut report = PropertyReport {
            valuation_date,
            status: ReportStatus::Complete,
            property: property.clone(),
            valuation,
            base_expenses: None,
            long_term: None,
            short_term: None,
            comparison: None,
            renovation: None,
            highlights: Vec::new(),
        };

        if report.valuation.is_insufficient() {
            warn!(
                comparables = input.comparables.len(),
                "no usable price signal; report marked insufficient"
            );
            report.status = ReportStatus::InsufficientData;
            report.highlights = highlights(&report);
            return Ok(report);
        }

        let value = report.valuation.estimated_value as f64;
        let assumptions = &input.assumptions;
        let base = self
            .expenses
            .compute_base_expenses(value, Some(assumptions.monthly_condo_fee))?;

        report.long_term = assumptions
            .monthly_rent
            .map(|rent| self.rental.compute_long_term_scenario(value, rent, &base))
            .transpose()?;
        report.short_term = assumptions
            .average_daily_rate
            .map(|rate| self.rental.compute_short_term_scenario(value, rate, &base))
            .transpose()?;
        report.comparison = match (&report.long_term, &report.short_term) {
            (Some(long_term), Some(short_term)) => {
                Some(self.rental.compare(long_term, short_term))
            }
            _ => None,
        };
        report.renovation = Some(self.renovation.estimate_renovation_potential(
            value,
            property.area_sqm(),
            Some(property.condition),
        )?);
        report.base_expenses = Some(base);
        report.highlights = highlights(&report);

        info!(
            estimated_value = report.valuation.estimated_value,
            source = ?report.valuation.source,
            "property report assembled"
        );

        Ok(report)
    }
}

impl Default for PropertyAnalyzer {
    fn default() -> Self {
        Self::new(&ValuationRates::standard())
    }
}

fn highlights(report: &PropertyReport) -> Vec<String> {
    let valuation = &report.valuation;
    if report.status == ReportStatus::InsufficientData {
        return vec![
            "Insufficient market data: no usable comparable sales or benchmark price".to_string(),
        ];
    }

    let mut lines = vec![format!(
        "Estimated value {} (range {} to {}) from {}",
        format_currency(valuation.estimated_value),
        format_currency(valuation.value_range.0),
        format_currency(valuation.value_range.1),
        valuation.source.label()
    )];

    for scenario in [&report.long_term, &report.short_term].into_iter().flatten() {
        lines.push(format!(
            "{} nets {:.2}% a year ({} per month)",
            scenario.strategy.label(),
            scenario.net_yield_percent,
            format_currency(scenario.monthly_cash_flow)
        ));
    }

    if let Some(comparison) = &report.comparison {
        lines.push(format!(
            "{} recommended ({:+.2} pts short-term net yield spread)",
            comparison.recommended.label(),
            comparison.net_yield_spread
        ));
    }

    if let Some(renovation) = &report.renovation {
        lines.push(format!(
            "Renovating from {} condition costs {} and adds {} (ROI {:.2}%)",
            report.property.condition.label().to_ascii_lowercase(),
            format_currency(renovation.total_cost),
            format_currency(renovation.value_increase),
            renovation.roi_percent
        ));
    }

    lines
}

/// Whole currency units with thousands separators, e.g. `-1,250`.
pub fn format_currency(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}
