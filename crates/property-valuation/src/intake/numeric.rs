use super::IntakeError;
use serde::Deserialize;

/// Numeric field as supplied by the market-data collaborator: either a JSON
/// number or a human formatted string such as `"420 000 €"`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl From<f64> for RawNumber {
    fn from(value: f64) -> Self {
        RawNumber::Number(value)
    }
}

impl From<&str> for RawNumber {
    fn from(value: &str) -> Self {
        RawNumber::Text(value.to_string())
    }
}

const UNIT_SUFFIXES: [&str; 7] = ["sqm", "m²", "m2", "eur", "usd", "gbp", "/night"];
const CURRENCY_SYMBOLS: [char; 3] = ['€', '$', '£'];

/// Parses an optional raw number. Blank strings count as missing; anything else
/// that does not read as a finite number is rejected with the field name.
pub(crate) fn parse_optional(
    field: &str,
    raw: Option<&RawNumber>,
) -> Result<Option<f64>, IntakeError> {
    match raw {
        None => Ok(None),
        Some(RawNumber::Number(value)) if value.is_finite() => Ok(Some(*value)),
        Some(RawNumber::Number(value)) => Err(invalid(field, &value.to_string())),
        Some(RawNumber::Text(text)) => parse_text(field, text),
    }
}

pub(crate) fn parse_required(field: &str, raw: Option<&RawNumber>) -> Result<f64, IntakeError> {
    parse_optional(field, raw)?.ok_or_else(|| IntakeError::MissingField(field.to_string()))
}

/// Parses a whole number such as a floor level.
pub(crate) fn parse_whole(field: &str, raw: Option<&RawNumber>) -> Result<Option<i64>, IntakeError> {
    match parse_optional(field, raw)? {
        None => Ok(None),
        Some(value) if value.fract() == 0.0 && value.abs() < i32::MAX as f64 => {
            Ok(Some(value as i64))
        }
        Some(value) => Err(invalid(field, &value.to_string())),
    }
}

/// Parses a non-negative whole number such as a parking count.
pub(crate) fn parse_count(
    field: &str,
    raw: Option<&RawNumber>,
) -> Result<Option<u32>, IntakeError> {
    match parse_whole(field, raw)? {
        None => Ok(None),
        Some(value) => u32::try_from(value)
            .map(Some)
            .map_err(|_| invalid(field, &value.to_string())),
    }
}

/// Reads English-formatted figures: `,` groups thousands and `.` marks decimals.
/// Grouping that could belong to another locale (`76,5`, `420.000`) is rejected
/// rather than guessed.
pub(crate) fn parse_text(field: &str, text: &str) -> Result<Option<f64>, IntakeError> {
    let mut cleaned: String = text
        .chars()
        .filter(|ch| !ch.is_whitespace() && *ch != '_' && *ch != '\u{a0}')
        .collect::<String>()
        .to_lowercase();

    if cleaned.is_empty() {
        return Ok(None);
    }

    for suffix in UNIT_SUFFIXES {
        if let Some(stripped) = cleaned.strip_suffix(suffix) {
            cleaned = stripped.to_string();
            break;
        }
    }
    let cleaned = cleaned.trim_matches(|ch| CURRENCY_SYMBOLS.contains(&ch));

    if !has_english_grouping(cleaned) {
        return Err(invalid(field, text));
    }

    match cleaned.replace(',', "").parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(invalid(field, text)),
    }
}

fn has_english_grouping(number: &str) -> bool {
    let unsigned = number.trim_start_matches(['-', '+']);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };

    if whole.contains(',') {
        let mut groups = whole.split(',');
        let leading_ok = groups
            .next()
            .is_some_and(|group| (1..=3).contains(&group.len()));
        return leading_ok && groups.all(|group| group.len() == 3);
    }

    // "1.250" reads as 1250 in dot-grouping locales.
    let ambiguous_fraction = fraction.is_some_and(|digits| digits.len() == 3);
    !(ambiguous_fraction && !whole.is_empty() && whole != "0")
}

fn invalid(field: &str, value: &str) -> IntakeError {
    IntakeError::InvalidNumber {
        field: field.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_formatted_amounts() {
        assert_eq!(parse_text("price", "420 000 €").unwrap(), Some(420_000.0));
        assert_eq!(parse_text("price", "$1,250,000").unwrap(), Some(1_250_000.0));
        assert_eq!(parse_text("area", "76.5 m2").unwrap(), Some(76.5));
        assert_eq!(parse_text("area", "80sqm").unwrap(), Some(80.0));
        assert_eq!(parse_text("rate", "-12.5").unwrap(), Some(-12.5));
    }

    #[test]
    fn rejects_grouping_from_other_locales() {
        for text in ["420.000 €", "1.250", "76,5 m2", "1,25,000", "42,0000", ",500"] {
            assert_eq!(
                parse_text("comparables[0].price", text),
                Err(IntakeError::InvalidNumber {
                    field: "comparables[0].price".to_string(),
                    value: text.to_string(),
                }),
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn keeps_unambiguous_decimals() {
        assert_eq!(parse_text("price", "1,250.500").unwrap(), Some(1_250.5));
        assert_eq!(parse_text("rate", "0.125").unwrap(), Some(0.125));
        assert_eq!(parse_text("area", "76.50 m2").unwrap(), Some(76.5));
        assert_eq!(parse_text("price", "-1,000").unwrap(), Some(-1_000.0));
    }

    #[test]
    fn counts_reject_negative_values() {
        let parking = RawNumber::from("2");
        assert_eq!(parse_count("indoor_parking", Some(&parking)).unwrap(), Some(2));

        let negative = RawNumber::from(-2.0);
        assert_eq!(
            parse_count("property.indoor_parking", Some(&negative)),
            Err(IntakeError::InvalidNumber {
                field: "property.indoor_parking".to_string(),
                value: "-2".to_string(),
            })
        );
    }

    #[test]
    fn blank_text_is_missing() {
        assert_eq!(parse_text("price", "   ").unwrap(), None);
        assert_eq!(parse_optional("price", None).unwrap(), None);
    }

    #[test]
    fn rejects_text_that_is_not_a_number() {
        let error = parse_text("comparables[0].price", "about 400k").expect_err("rejected");
        assert_eq!(
            error,
            IntakeError::InvalidNumber {
                field: "comparables[0].price".to_string(),
                value: "about 400k".to_string(),
            }
        );
        assert!(parse_text("price", "NaN").is_err());
        assert!(parse_text("price", "inf").is_err());
    }

    #[test]
    fn whole_numbers_reject_fractions() {
        let floor = RawNumber::from("3");
        assert_eq!(parse_whole("floor_level", Some(&floor)).unwrap(), Some(3));

        let fractional = RawNumber::from(2.5);
        assert!(parse_whole("floor_level", Some(&fractional)).is_err());
    }

    #[test]
    fn required_fields_report_their_name() {
        let error = parse_required("property.area_sqm", None).expect_err("missing");
        assert_eq!(
            error,
            IntakeError::MissingField("property.area_sqm".to_string())
        );
    }
}
