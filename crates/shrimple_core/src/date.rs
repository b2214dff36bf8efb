//! Flexible due-date parsing and canonical formatting.
//!
//! # Responsibility
//! - Turn user-supplied date strings into calendar dates.
//! - Own the canonical `DD/MM/YYYY` rendering shared with the codec.
//!
//! # Invariants
//! - Formats are tried in a fixed order: day/month/year, year/month/day,
//!   month/day/year. The order is the ambiguity tie-break and is not
//!   configurable.
//! - Years must be written with 4 digits; `chrono`'s `%Y` alone would accept
//!   `03/04/24` as year 24, so a shape check gates every candidate first.

use chrono::{Datelike, Local, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Accepted `/`-separated shapes with a 4-digit year in either end position.
static DATE_SHAPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{1,2}/\d{1,2}/\d{4}|\d{4}/\d{1,2}/\d{1,2})$").expect("valid date shape regex")
});

/// Literal formats, attempted in this order for every candidate string.
const DATE_FORMATS: [&str; 3] = ["%d/%m/%Y", "%Y/%m/%d", "%m/%d/%Y"];

/// Canonical on-disk and display format (zero-padded day/month, 4-digit year).
const CANONICAL_FORMAT: &str = "%d/%m/%Y";

pub type DateResult<T> = Result<T, DateError>;

/// Error for date strings no supported format can interpret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Input matched no format, with or without the assumed year appended.
    /// Covers both unparseable shapes and impossible calendar dates.
    Unrecognized { input: String },
}

impl Display for DateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unrecognized { input } => write!(
                f,
                "invalid date `{input}`; expected day/month/year, year/month/day or \
                 month/day/year with a 4-digit year (year may be omitted)"
            ),
        }
    }
}

impl Error for DateError {}

/// Parses a date string, defaulting a missing year to the current local year.
///
/// Ambiguity policy: day/month/year is tried before month/day/year, so
/// `03/04/2024` means day 3, month 4. This precedence is deliberate and
/// fixed.
pub fn parse_date(input: &str) -> DateResult<NaiveDate> {
    parse_date_in_year(input, Local::now().year())
}

/// Same as [`parse_date`] with an explicit assumed year, so the year-default
/// path stays deterministic under test.
pub fn parse_date_in_year(input: &str, assumed_year: i32) -> DateResult<NaiveDate> {
    let trimmed = input.trim();
    if let Some(date) = try_formats(trimmed) {
        return Ok(date);
    }
    // Inputs like `25/12` omit the year; retry with the assumed year so the
    // same format order decides whether the first field is a day or a month.
    let with_year = format!("{trimmed}/{assumed_year}");
    if let Some(date) = try_formats(&with_year) {
        return Ok(date);
    }
    Err(DateError::Unrecognized {
        input: input.to_string(),
    })
}

/// Renders a date in the canonical `DD/MM/YYYY` form.
pub fn format_date(date: NaiveDate) -> String {
    date.format(CANONICAL_FORMAT).to_string()
}

/// Parses the canonical `DD/MM/YYYY` form only, used by the record codec
/// where flexible interpretation would change stored data.
pub fn parse_canonical_date(token: &str) -> DateResult<NaiveDate> {
    if !DATE_SHAPE_RE.is_match(token) {
        return Err(DateError::Unrecognized {
            input: token.to_string(),
        });
    }
    NaiveDate::parse_from_str(token, CANONICAL_FORMAT).map_err(|_| DateError::Unrecognized {
        input: token.to_string(),
    })
}

fn try_formats(candidate: &str) -> Option<NaiveDate> {
    if !DATE_SHAPE_RE.is_match(candidate) {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(candidate, format).ok())
}

#[cfg(test)]
mod tests {
    use super::{format_date, parse_canonical_date, parse_date_in_year, DateError};
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn parses_day_month_year() {
        assert_eq!(
            parse_date_in_year("25/12/2024", 2026).expect("full date should parse"),
            date(2024, 12, 25)
        );
    }

    #[test]
    fn parses_year_month_day() {
        assert_eq!(
            parse_date_in_year("2024/12/25", 2026).expect("ISO-like date should parse"),
            date(2024, 12, 25)
        );
    }

    #[test]
    fn falls_back_to_month_day_year() {
        // Day 25 cannot be a month, so only the third format matches.
        assert_eq!(
            parse_date_in_year("12/25/2024", 2026).expect("month/day/year should parse"),
            date(2024, 12, 25)
        );
    }

    #[test]
    fn day_month_wins_over_month_day() {
        assert_eq!(
            parse_date_in_year("03/04/2024", 2026).expect("ambiguous date should parse"),
            date(2024, 4, 3)
        );
    }

    #[test]
    fn missing_year_uses_assumed_year() {
        assert_eq!(
            parse_date_in_year("25/12", 2026).expect("year-less date should parse"),
            date(2026, 12, 25)
        );
    }

    #[test]
    fn impossible_calendar_date_is_rejected() {
        let err = parse_date_in_year("31/02/2024", 2026).expect_err("Feb 31 must fail");
        assert_eq!(
            err,
            DateError::Unrecognized {
                input: "31/02/2024".to_string()
            }
        );
    }

    #[test]
    fn two_digit_year_is_rejected() {
        assert!(parse_date_in_year("03/04/24", 2026).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_date_in_year("next tuesday", 2026).is_err());
        assert!(parse_date_in_year("", 2026).is_err());
    }

    #[test]
    fn format_is_zero_padded_canonical() {
        assert_eq!(format_date(date(2024, 4, 3)), "03/04/2024");
    }

    #[test]
    fn canonical_parser_accepts_only_day_month_year() {
        assert_eq!(
            parse_canonical_date("25/12/2024").expect("canonical date should parse"),
            date(2024, 12, 25)
        );
        assert!(parse_canonical_date("2024/12/25").is_err());
        assert!(parse_canonical_date("25/12").is_err());
    }
}
