//! Validation done by the presentation layer before calling the engine.
//!
//! The engine accepts any digit string and any three-number birthdate; the
//! CLI is stricter and only takes Taiwanese mobile numbers and real dates.

use chrono::NaiveDate;

use crate::analysis::{clean_digits, Birthdate};
use crate::error::{NumerologyError, Result};

pub const MIN_BIRTH_YEAR: u32 = 1900;
pub const MAX_BIRTH_YEAR: u32 = 2100;

/// Require `09` followed by eight digits, ignoring separators.
/// Returns the digits on success.
pub fn validate_mobile_number(input: &str) -> Result<String> {
    let digits = clean_digits(input);
    if digits.len() == 10 && digits.starts_with("09") {
        Ok(digits)
    } else {
        Err(NumerologyError::InvalidMobileNumber {
            input: input.to_string(),
        })
    }
}

/// Parse a birthdate and check that it is a real date in 1900..=2100.
pub fn validate_birthdate(input: &str) -> Result<Birthdate> {
    let date: Birthdate = input.parse()?;
    let out_of_range = |reason: String| NumerologyError::BirthdateOutOfRange {
        input: input.to_string(),
        reason,
    };

    if !(MIN_BIRTH_YEAR..=MAX_BIRTH_YEAR).contains(&date.year) {
        return Err(out_of_range(format!(
            "year must be between {} and {}",
            MIN_BIRTH_YEAR, MAX_BIRTH_YEAR
        )));
    }
    let year = i32::try_from(date.year).map_err(|_| out_of_range("year overflow".to_string()))?;
    if NaiveDate::from_ymd_opt(year, date.month, date.day).is_none() {
        return Err(out_of_range("no such calendar date".to_string()));
    }

    Ok(date)
}

/// Format a ten-digit number as `0XXX-XXX-XXX`; anything else is returned as given.
pub fn format_display(input: &str) -> String {
    let digits = clean_digits(input);
    if digits.len() == 10 {
        format!("{}-{}-{}", &digits[..4], &digits[4..7], &digits[7..])
    } else {
        input.to_string()
    }
}
