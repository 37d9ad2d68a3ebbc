//! Parsing of raw form input into request fields.

use chrono::{NaiveDate, NaiveDateTime};
use uuid::Uuid;

pub fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| "Please enter dates as YYYY-MM-DD.".to_string())
}

/// Value of a `datetime-local` input, with or without seconds.
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime, String> {
    let value = value.trim();

    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| "Please pick a start and end date and time.".to_string())
}

pub fn parse_amount(value: &str) -> Result<f64, String> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| "Please enter a number.".to_string())
}

/// Blank input is `None`, anything else must parse with `parse`.
pub fn parse_optional<T>(
    value: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<Option<T>, String> {
    if value.trim().is_empty() {
        return Ok(None);
    }

    parse(value).map(Some)
}

pub fn parse_id(value: &str, field: &str) -> Result<Uuid, String> {
    Uuid::parse_str(value.trim()).map_err(|_| format!("Please select a {}.", field))
}

/// Trimmed text, or `None` when blank.
pub fn optional_text(value: &str) -> Option<String> {
    let value = value.trim();

    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn parses_iso_dates_only() {
        assert!(parse_date("2025-01-06").is_ok());
        assert!(parse_date("01/06/2025").is_err());
    }

    #[test]
    fn parses_datetime_local_values() {
        let expected = NaiveDate::from_ymd_opt(2025, 1, 6)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();

        assert_eq!(parse_datetime("2025-01-06T09:30"), Ok(expected));
        assert_eq!(parse_datetime("2025-01-06T09:30:00"), Ok(expected));
        assert!(parse_datetime("").is_err());
    }

    #[test]
    fn parses_amounts() {
        assert_eq!(parse_amount(" 12.5 "), Ok(12.5));
        assert!(parse_amount("twelve").is_err());
    }

    #[test]
    fn blank_optional_is_none() {
        assert_eq!(parse_optional("  ", parse_amount), Ok(None));
        assert_eq!(parse_optional("8.25", parse_amount), Ok(Some(8.25)));
        assert!(parse_optional("abc", parse_amount).is_err());
    }

    #[test]
    fn requires_selected_id() {
        assert_eq!(
            parse_id("", "worker"),
            Err("Please select a worker.".to_string())
        );
        assert!(parse_id(&Uuid::new_v4().to_string(), "worker").is_ok());
    }

    #[test]
    fn trims_optional_text() {
        assert_eq!(optional_text("  "), None);
        assert_eq!(optional_text(" Jane "), Some("Jane".to_string()));
    }
}
