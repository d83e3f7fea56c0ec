use chrono::{Local, NaiveDate};
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn today_or(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_dates_only() {
        assert_eq!(
            parse_date(" 2025-10-01 "),
            Ok(NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid"))
        );
        assert!(parse_date("01/10/2025").is_err());
    }

    #[test]
    fn today_or_prefers_explicit_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid");
        assert_eq!(today_or(Some(date)), date);
    }
}
