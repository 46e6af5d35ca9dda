// ABOUTME: Input validation and date handling for tasks
// ABOUTME: Title bounds, strict YYYY-MM-DD parsing/formatting and weekend detection

use chrono::{DateTime, Datelike, NaiveDate, Utc, Weekday};
use thiserror::Error;

/// Maximum title length in bytes
pub const MAX_TITLE_LEN: usize = 200;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("title is required")]
    EmptyTitle,
    #[error("title must be <= 200 chars")]
    TitleTooLong,
    #[error("invalid activeAt date, expected YYYY-MM-DD")]
    EmptyDate,
    #[error("invalid activeAt date, expected YYYY-MM-DD")]
    MalformedDate,
    #[error("id required")]
    MissingId,
}

pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(ValidationError::TitleTooLong);
    }
    Ok(())
}

pub fn validate_id(id: &str) -> Result<(), ValidationError> {
    if id.is_empty() {
        return Err(ValidationError::MissingId);
    }
    Ok(())
}

/// Parse a `YYYY-MM-DD` date.
///
/// The shape is checked byte by byte before handing off to chrono, which is
/// lenient about padding and would otherwise accept `2025-1-1`.
pub fn parse_date(s: &str) -> Result<NaiveDate, ValidationError> {
    if s.is_empty() {
        return Err(ValidationError::EmptyDate);
    }
    if !has_date_shape(s) {
        return Err(ValidationError::MalformedDate);
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| ValidationError::MalformedDate)
}

fn has_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Saturday or Sunday in UTC
pub fn is_weekend(now: DateTime<Utc>) -> bool {
    matches!(now.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[test]
    fn test_title_boundaries() {
        assert_eq!(validate_title(""), Err(ValidationError::EmptyTitle));
        assert!(validate_title("a").is_ok());
        assert!(validate_title(&"a".repeat(200)).is_ok());
        assert_eq!(
            validate_title(&"a".repeat(201)),
            Err(ValidationError::TitleTooLong)
        );
    }

    #[test]
    fn test_title_limit_counts_bytes() {
        // 100 two-byte characters fill the limit exactly
        assert!(validate_title(&"é".repeat(100)).is_ok());
        assert_eq!(
            validate_title(&"é".repeat(101)),
            Err(ValidationError::TitleTooLong)
        );
    }

    #[test]
    fn test_empty_id_rejected() {
        assert_eq!(validate_id(""), Err(ValidationError::MissingId));
        assert!(validate_id("abc").is_ok());
    }

    #[rstest]
    #[case("2025-01-01", 2025, 1, 1)]
    #[case("2024-02-29", 2024, 2, 29)]
    #[case("1999-12-31", 1999, 12, 31)]
    fn test_parse_valid_dates(#[case] input: &str, #[case] y: i32, #[case] m: u32, #[case] d: u32) {
        let date = parse_date(input).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(y, m, d).unwrap());
        assert_eq!(format_date(date), input);
    }

    #[rstest]
    #[case("2025-1-01")]
    #[case("2025-01-1")]
    #[case("25-01-01")]
    #[case("2025/01/01")]
    #[case("2025-01-01T00:00:00Z")]
    #[case("2025-02-30")]
    #[case("2023-02-29")]
    #[case("2025-13-01")]
    #[case("+2025-01-01")]
    #[case("abcd-ef-gh")]
    fn test_parse_malformed_dates(#[case] input: &str) {
        assert_eq!(parse_date(input), Err(ValidationError::MalformedDate));
    }

    #[test]
    fn test_parse_empty_date() {
        assert_eq!(parse_date(""), Err(ValidationError::EmptyDate));
    }

    #[rstest]
    #[case(2025, 1, 4, true)] // Saturday
    #[case(2025, 1, 5, true)] // Sunday
    #[case(2025, 1, 6, false)] // Monday
    #[case(2025, 1, 1, false)] // Wednesday
    #[case(2025, 1, 3, false)] // Friday
    fn test_is_weekend(#[case] y: i32, #[case] m: u32, #[case] d: u32, #[case] expected: bool) {
        let now = Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap();
        assert_eq!(is_weekend(now), expected);
    }

    #[test]
    fn test_is_weekend_uses_utc_day() {
        // Late Friday in UTC is still a weekday, regardless of local offsets
        let friday_night = Utc.with_ymd_and_hms(2025, 1, 3, 23, 59, 59).unwrap();
        assert!(!is_weekend(friday_night));
        let saturday_start = Utc.with_ymd_and_hms(2025, 1, 4, 0, 0, 0).unwrap();
        assert!(is_weekend(saturday_start));
    }
}
