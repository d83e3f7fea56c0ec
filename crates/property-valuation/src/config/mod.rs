use crate::valuation::ValuationRates;
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub rates: ValuationRates,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mut rates = ValuationRates::standard();
        override_fraction("VALUATION_TAX_RATE", &mut rates.expenses.tax_rate)?;
        override_fraction("VALUATION_MAINTENANCE_RATE", &mut rates.expenses.maintenance_rate)?;
        override_rate(
            "VALUATION_DEFAULT_CONDO_FEE",
            &mut rates.expenses.default_monthly_condo_fee,
        )?;
        override_rate(
            "VALUATION_SHORT_TERM_UTILITIES",
            &mut rates.short_term.monthly_utilities,
        )?;
        override_fraction(
            "VALUATION_LONG_TERM_MANAGEMENT_RATE",
            &mut rates.long_term.management_rate,
        )?;
        override_fraction(
            "VALUATION_SHORT_TERM_MANAGEMENT_RATE",
            &mut rates.short_term.management_rate,
        )?;
        override_fraction(
            "VALUATION_SHORT_TERM_OCCUPANCY",
            &mut rates.short_term.occupancy_rate,
        )?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            rates,
        })
    }
}

fn override_rate(key: &'static str, target: &mut f64) -> Result<(), ConfigError> {
    if let Some(value) = read_rate(key)? {
        *target = value;
    }
    Ok(())
}

/// Shares such as occupancy or a tax rate are fractions, not percentages.
fn override_fraction(key: &'static str, target: &mut f64) -> Result<(), ConfigError> {
    match read_rate(key)? {
        Some(value) if value > 1.0 => Err(ConfigError::FractionOutOfRange { key, value }),
        Some(value) => {
            *target = value;
            Ok(())
        }
        None => Ok(()),
    }
}

fn read_rate(key: &'static str) -> Result<Option<f64>, ConfigError> {
    let Ok(raw) = env::var(key) else {
        return Ok(None);
    };

    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(Some(value)),
        _ => Err(ConfigError::InvalidRate { key, value: raw }),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidRate { key: &'static str, value: String },
    FractionOutOfRange { key: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidRate { key, value } => {
                write!(f, "{key} must be a non-negative number (found '{value}')")
            }
            ConfigError::FractionOutOfRange { key, value } => {
                write!(f, "{key} must be a fraction between 0 and 1 (found {value})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
