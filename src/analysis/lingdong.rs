use serde::Serialize;

use super::clean_digits;
use crate::error::{NumerologyError, Result};
use crate::tables::lingdong::{self, FortuneClass};

pub const DEFAULT_TAIL_LENGTH: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LingdongAnalysis {
    pub tail: String,
    pub value: u64,
    pub index: u32,
    pub fortune_class: Option<FortuneClass>,
    pub meaning: &'static str,
    pub score: i32,
}

/// Reduce a value into 1..=80, mapping multiples of 80 to 80.
///
/// Index 81 exists in the table but is never produced here.
pub fn reduce(value: u64) -> u32 {
    match value % 80 {
        0 => 80,
        n => n as u32,
    }
}

/// Lingdong number of the last `tail_length` digits. Shorter numbers use
/// every digit they have.
pub fn calculate_lingdong(phone_number: &str, tail_length: usize) -> Result<LingdongAnalysis> {
    let digits = clean_digits(phone_number);
    if digits.is_empty() {
        return Err(NumerologyError::EmptyPhoneNumber {
            input: phone_number.to_string(),
        });
    }

    let start = digits.len().saturating_sub(tail_length);
    let tail = &digits[start..];
    let value: u64 = tail.parse().map_err(|_| NumerologyError::NumberTooLong {
        tail: tail.to_string(),
    })?;
    let index = reduce(value);

    let (fortune_class, meaning, score) = match lingdong::lookup(index) {
        Some(entry) => (Some(entry.fortune_class), entry.meaning, entry.score),
        None => (None, "無資料", 0),
    };

    Ok(LingdongAnalysis {
        tail: tail.to_string(),
        value,
        index,
        fortune_class,
        meaning,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_range() {
        assert_eq!(reduce(0), 80);
        assert_eq!(reduce(1), 1);
        assert_eq!(reduce(79), 79);
        assert_eq!(reduce(80), 80);
        assert_eq!(reduce(81), 1);
        assert_eq!(reduce(160), 80);
        for v in (0..10_000).step_by(7) {
            let n = reduce(v);
            assert!((1..=80).contains(&n));
        }
    }

    #[test]
    fn test_sample_number() {
        let result = calculate_lingdong("0978-759-196", DEFAULT_TAIL_LENGTH).unwrap();
        assert_eq!(result.tail, "9196");
        assert_eq!(result.value, 9196);
        assert_eq!(result.index, 76);
        assert_eq!(result.fortune_class, Some(FortuneClass::IllWithLuck));
        assert_eq!(result.score, -3);
    }

    #[test]
    fn test_short_number_uses_all_digits() {
        let result = calculate_lingdong("12", 4).unwrap();
        assert_eq!(result.tail, "12");
        assert_eq!(result.index, 12);
    }

    #[test]
    fn test_leading_zero_tail() {
        let result = calculate_lingdong("0912-340-080", 4).unwrap();
        assert_eq!(result.tail, "0080");
        assert_eq!(result.value, 80);
        assert_eq!(result.index, 80);
    }

    #[test]
    fn test_eight_digit_tail() {
        let result = calculate_lingdong("0978759196", 8).unwrap();
        assert_eq!(result.tail, "78759196");
        // 78759196 = 984489 * 80 + 76
        assert_eq!(result.index, 76);
    }

    #[test]
    fn test_empty_number_is_error() {
        let err = calculate_lingdong("--", 4).unwrap_err();
        assert!(matches!(err, NumerologyError::EmptyPhoneNumber { .. }));
    }

    #[test]
    fn test_overlong_tail_is_error() {
        let digits = "9".repeat(25);
        let err = calculate_lingdong(&digits, 25).unwrap_err();
        assert!(matches!(err, NumerologyError::NumberTooLong { .. }));
    }
}
