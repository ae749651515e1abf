use thiserror::Error;

/// Errors surfaced by the numerology engine and its input helpers.
///
/// Table lookups that find nothing are not errors: an unknown digit pair or
/// lingdong index simply contributes a neutral term.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumerologyError {
    /// Birthdate is not three numeric `/`-separated components
    #[error("Invalid birthdate '{input}': expected YYYY/MM/DD")]
    InvalidBirthdate { input: String },

    /// The phone number has no digits to take a lingdong tail from
    #[error("Phone number '{input}' contains no digits")]
    EmptyPhoneNumber { input: String },

    /// The lingdong tail does not fit in an unsigned 64-bit integer
    #[error("Tail '{tail}' is too long to parse as a number")]
    NumberTooLong { tail: String },

    /// A digit pair is assigned to more than one magnetic field
    #[error("Digit pair '{pair}' is assigned to both {first} and {second}")]
    DuplicatePair {
        pair: String,
        first: &'static str,
        second: &'static str,
    },

    /// A table entry is not a two-digit pair
    #[error("Table entry '{pair}' in {field} is not a two-digit pair")]
    InvalidPair { pair: String, field: &'static str },

    /// Not a Taiwanese mobile number (09 followed by 8 digits)
    #[error("Invalid mobile number '{input}': expected 09 followed by 8 digits")]
    InvalidMobileNumber { input: String },

    /// Birthdate parses but is not a real calendar date in the supported range
    #[error("Birthdate {input} is out of range: {reason}")]
    BirthdateOutOfRange { input: String, reason: String },
}

pub type Result<T> = std::result::Result<T, NumerologyError>;
