//! Time-to-expiration normalization

use chrono::NaiveDate;
use thiserror::Error;

/// Day count used to annualize calendar days
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Floor applied to same-day and expired contracts
pub const MIN_TIME_TO_EXPIRY: f64 = 0.0001;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Unparseable calendar date
#[derive(Debug, Error)]
#[error("invalid date '{input}', expected YYYY-MM-DD: {source}")]
pub struct DateFormatError {
    pub input: String,
    #[source]
    pub source: chrono::ParseError,
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate, DateFormatError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|source| DateFormatError {
        input: input.to_string(),
        source,
    })
}

/// Year fraction between `reference` and `expiration`.
///
/// Whole calendar days divided by 365. Expirations on or before the
/// reference date return [`MIN_TIME_TO_EXPIRY`], never zero or a negative
/// value.
pub fn time_to_expiration(expiration: NaiveDate, reference: NaiveDate) -> f64 {
    let days = (expiration - reference).num_days();
    let t = days as f64 / DAYS_PER_YEAR;
    t.max(MIN_TIME_TO_EXPIRY)
}

/// [`time_to_expiration`] over `YYYY-MM-DD` strings
pub fn time_to_expiration_str(expiration: &str, reference: &str) -> Result<f64, DateFormatError> {
    Ok(time_to_expiration(
        parse_date(expiration)?,
        parse_date(reference)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_same_day_clamps_to_floor() {
        let t = time_to_expiration_str("2023-10-18", "2023-10-18").unwrap();
        assert_eq!(t, 0.0001);
    }

    #[test]
    fn test_expired_clamps_to_floor() {
        let t = time_to_expiration(date("2023-10-01"), date("2023-10-18"));
        assert_eq!(t, MIN_TIME_TO_EXPIRY);
    }

    #[test]
    fn test_whole_days_over_365() {
        let t = time_to_expiration(date("2023-11-18"), date("2023-10-18"));
        assert_eq!(t, 31.0 / 365.0);

        let one_year = time_to_expiration(date("2024-10-17"), date("2023-10-18"));
        assert_eq!(one_year, 365.0 / 365.0);
    }

    #[test]
    fn test_one_day_is_above_floor() {
        let t = time_to_expiration(date("2023-10-19"), date("2023-10-18"));
        assert_eq!(t, 1.0 / 365.0);
        assert!(t > MIN_TIME_TO_EXPIRY);
    }

    #[test]
    fn test_never_non_positive() {
        let reference = date("2023-10-18");
        for offset in -400..400 {
            let expiration = reference + chrono::Duration::days(offset);
            assert!(time_to_expiration(expiration, reference) > 0.0);
        }
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        let err = time_to_expiration_str("2023-13-40", "2023-10-18").unwrap_err();
        assert_eq!(err.input, "2023-13-40");

        let err = time_to_expiration_str("2023-11-17", "yesterday").unwrap_err();
        assert_eq!(err.input, "yesterday");
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn test_parse_date_trims_whitespace() {
        assert_eq!(
            parse_date(" 2023-10-18 ").unwrap(),
            NaiveDate::from_ymd_opt(2023, 10, 18).unwrap()
        );
    }
}
