pub mod analyzer;
pub mod birthdate;
pub mod elements;
pub mod lingdong;
pub mod magnetic;

pub use analyzer::{AnalysisResult, PhoneNumerology};
pub use birthdate::Birthdate;
pub use elements::{calculate_five_elements, ElementAnalysis, ElementScore};
pub use lingdong::{calculate_lingdong, LingdongAnalysis};
pub use magnetic::{analyze_magnetic_fields, FieldMatch, MagneticAnalysis};

/// Strip everything but ASCII digits.
pub fn clean_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_digits() {
        assert_eq!(clean_digits("0978-759-196"), "0978759196");
        assert_eq!(clean_digits("(02) 2345 6789"), "0223456789");
        assert_eq!(clean_digits("no digits"), "");
    }
}
