//! Match date handling
//!
//! Matches carry a calendar date with no time-of-day. Exactly one textual
//! form is accepted: `YYYY-MM-DD` with a four-digit year and zero-padded
//! month and day. Anything else, including otherwise unambiguous forms such
//! as `2025-4-1` or `04/01/2025`, is rejected.

use chrono::NaiveDate;
use thiserror::Error;

/// `chrono` format string for match dates
pub const MATCH_DATE_FORMAT: &str = "%Y-%m-%d";

const MATCH_DATE_LEN: usize = 10;

/// Errors related to match date parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date format '{0}', expected YYYY-MM-DD")]
    InvalidFormat(String),

    #[error("Invalid calendar date '{0}'")]
    InvalidDate(String),
}

/// Parses a match date in strict `YYYY-MM-DD` form
///
/// # Arguments
///
/// * `input` - The date text supplied by the caller
///
/// # Errors
///
/// Returns `TemporalError::InvalidFormat` if the text does not have the exact
/// `YYYY-MM-DD` shape, or `TemporalError::InvalidDate` if it has the right
/// shape but names a day that does not exist (e.g. `2025-02-30`).
///
/// # Example
///
/// ```rust
/// use core_kernel::parse_match_date;
///
/// let date = parse_match_date("2025-04-01").unwrap();
/// assert_eq!(date.to_string(), "2025-04-01");
/// assert!(parse_match_date("04/01/2025").is_err());
/// ```
pub fn parse_match_date(input: &str) -> Result<NaiveDate, TemporalError> {
    if !has_iso_shape(input) {
        return Err(TemporalError::InvalidFormat(input.to_string()));
    }

    NaiveDate::parse_from_str(input, MATCH_DATE_FORMAT)
        .map_err(|_| TemporalError::InvalidDate(input.to_string()))
}

/// Formats a match date back into its canonical `YYYY-MM-DD` form
pub fn format_match_date(date: NaiveDate) -> String {
    date.format(MATCH_DATE_FORMAT).to_string()
}

fn has_iso_shape(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == MATCH_DATE_LEN
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
