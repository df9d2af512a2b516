//! Shape predicates the built-in text rules delegate to.
//!
//! Every predicate normalises failure to `false` (or a typed [`DateError`])
//! at this boundary. Nothing here panics on user input.

use std::sync::LazyLock;

use chrono::{Datelike, NaiveDate};
use phonenumber::country;
use tracing::debug;

// ============================================================================
// EMAIL
// ============================================================================

// RFC 5322 address shape, matched case-insensitively against the whole input.
static EMAIL_REGEX: LazyLock<Option<regex::Regex>> = LazyLock::new(|| {
    regex::Regex::new(
        r##"(?i)^(?:[a-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[a-z0-9!#$%&'*+/=?^_`{|}~-]+)*|"(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21\x23-\x5b\x5d-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])*")@(?:(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z0-9](?:[a-z0-9-]*[a-z0-9])?|\[(?:(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(?:25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?|[a-z0-9-]*[a-z0-9]:(?:[\x01-\x08\x0b\x0c\x0e-\x1f\x21-\x5a\x53-\x7f]|\\[\x01-\x09\x0b\x0c\x0e-\x7f])+)\])$"##,
    )
    .ok()
});

/// `true` when `s` is shaped like an email address.
#[must_use]
pub fn is_email(s: &str) -> bool {
    EMAIL_REGEX.as_ref().is_some_and(|re| re.is_match(s))
}

// ============================================================================
// PHONE
// ============================================================================

/// Region used when a phone rule does not name one.
pub const DEFAULT_REGION: &str = "US";

/// `true` when `s` parses as a valid phone number.
///
/// `region` is a two-letter country code (case-insensitive) used for numbers
/// not written in international `+` form. Unknown regions behave like `None`,
/// so only international numbers can pass.
#[must_use]
pub fn is_phone_number(s: &str, region: Option<&str>) -> bool {
    let country = region.and_then(|r| r.to_ascii_uppercase().parse::<country::Id>().ok());
    match phonenumber::parse(country, s) {
        Ok(number) => phonenumber::is_valid(&number),
        Err(err) => {
            debug!(input_len = s.len(), ?region, error = %err, "phone number rejected by parser");
            false
        }
    }
}

// ============================================================================
// NUMBERS
// ============================================================================

/// Parses a decimal number the way form input is read.
///
/// Surrounding whitespace is ignored. Plain and exponent notation are
/// accepted; the only spelled-out values are the exact-case `NaN` and
/// `Infinity` (optionally signed). Out-of-range exponents saturate to
/// infinity. Returns `None` for anything else.
#[must_use]
pub fn parse_decimal(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    let spelled = unsigned
        .chars()
        .any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E'));
    if spelled && !matches!(unsigned, "NaN" | "Infinity") {
        return None;
    }
    match unsigned {
        "NaN" => Some(f64::NAN),
        "Infinity" if trimmed.starts_with('-') => Some(f64::NEG_INFINITY),
        "Infinity" => Some(f64::INFINITY),
        _ => trimmed.parse().ok(),
    }
}

// ============================================================================
// DATES
// ============================================================================

/// Why a calendar date could not be built.
///
/// The `Display` text is what the invalid-date message shows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Month outside `1..=12`.
    #[error("month {month} is out of range 1..=12")]
    MonthOutOfRange {
        /// The rejected month.
        month: i64,
    },

    /// Day outside the length of the month.
    #[error("day {day} is out of range 1..={max} for {year:04}-{month:02}")]
    DayOutOfRange {
        /// The rejected day.
        day: i64,
        /// Month the day was checked against.
        month: u32,
        /// Year the day was checked against.
        year: i32,
        /// Last valid day of that month.
        max: u32,
    },

    /// Year outside what the calendar supports.
    #[error("year {year} is out of the supported range")]
    YearOutOfRange {
        /// The rejected year.
        year: i64,
    },
}

/// Builds a calendar date, reporting which component was wrong.
///
/// # Errors
///
/// Returns a [`DateError`] naming the first component that is out of range,
/// checked in year, month, day order.
pub fn construct_date(year: i64, month: i64, day: i64) -> Result<NaiveDate, DateError> {
    let y = i32::try_from(year)
        .ok()
        .filter(|y| (NaiveDate::MIN.year()..=NaiveDate::MAX.year()).contains(y))
        .ok_or(DateError::YearOutOfRange { year })?;
    let m = u32::try_from(month)
        .ok()
        .filter(|m| (1..=12).contains(m))
        .ok_or(DateError::MonthOutOfRange { month })?;
    let max = days_in_month(y, m);
    let d = u32::try_from(day)
        .ok()
        .filter(|d| (1..=max).contains(d))
        .ok_or(DateError::DayOutOfRange {
            day,
            month: m,
            year: y,
            max,
        })?;
    // Edge months of the first and last supported year are still partial.
    NaiveDate::from_ymd_opt(y, m, d).ok_or(DateError::YearOutOfRange { year })
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

// ============================================================================
// TESTS
// ============================================================================
