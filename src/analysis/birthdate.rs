use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::NumerologyError;

/// A birthdate as given by the caller, `YYYY/MM/DD`.
///
/// Parsing only checks the shape (three numeric components). Calendar
/// validity is the caller's concern; see [`crate::input::validate_birthdate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthdate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl Birthdate {
    /// Sum of the decimal digits of the year.
    pub fn year_digit_sum(&self) -> u32 {
        self.year
            .to_string()
            .chars()
            .filter_map(|c| c.to_digit(10))
            .sum()
    }
}

impl FromStr for Birthdate {
    type Err = NumerologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || NumerologyError::InvalidBirthdate {
            input: s.to_string(),
        };

        let parts: Vec<&str> = s.trim().split('/').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }
        let mut numbers = [0u32; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            *slot = part.trim().parse().map_err(|_| invalid())?;
        }

        Ok(Birthdate {
            year: numbers[0],
            month: numbers[1],
            day: numbers[2],
        })
    }
}

impl fmt::Display for Birthdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
    }
}

impl Serialize for Birthdate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
