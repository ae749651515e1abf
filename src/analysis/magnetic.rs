use std::collections::BTreeMap;

use serde::Serialize;

use super::clean_digits;
use crate::tables::magnetic::{field_for_pair, FieldKind, Polarity};

/// One pair that landed in a magnetic field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldMatch {
    pub pair: String,
    pub field: FieldKind,
    pub name: &'static str,
    pub meaning: &'static str,
    pub polarity: Polarity,
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MagneticAnalysis {
    /// Every adjacent two-digit window, left to right, overlapping.
    pub pairs: Vec<String>,
    pub field_counts: BTreeMap<FieldKind, usize>,
    pub matches: Vec<FieldMatch>,
    pub total_score: i32,
    pub average_score: f64,
}

impl MagneticAnalysis {
    /// Pairs that belong to no field.
    pub fn unmatched_count(&self) -> usize {
        self.pairs.len() - self.matches.len()
    }
}

/// Tally the magnetic fields of a number. Separators are ignored; strings
/// with fewer than two digits yield no pairs and an average of 0.
pub fn analyze_magnetic_fields(phone_number: &str) -> MagneticAnalysis {
    let digits = clean_digits(phone_number);
    let pairs = digit_pairs(&digits);

    let mut field_counts = BTreeMap::new();
    let mut matches = Vec::new();
    let mut total_score = 0;

    for pair in &pairs {
        if let Some(field) = field_for_pair(pair) {
            *field_counts.entry(field.kind).or_insert(0) += 1;
            total_score += field.score;
            matches.push(FieldMatch {
                pair: pair.clone(),
                field: field.kind,
                name: field.name,
                meaning: field.meaning,
                polarity: field.polarity,
                score: field.score,
            });
        }
    }

    let average_score = if pairs.is_empty() {
        0.0
    } else {
        f64::from(total_score) / pairs.len() as f64
    };

    MagneticAnalysis {
        pairs,
        field_counts,
        matches,
        total_score,
        average_score,
    }
}

fn digit_pairs(digits: &str) -> Vec<String> {
    let chars: Vec<char> = digits.chars().collect();
    chars
        .windows(2)
        .map(|w| w.iter().collect::<String>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_pairs() {
        let result = analyze_magnetic_fields("1234");
        assert_eq!(result.pairs, vec!["12", "23", "34"]);
    }

    #[test]
    fn test_pair_count_is_length_minus_one() {
        for digits in ["12", "0978759196", "5555555", "1029384756"] {
            let result = analyze_magnetic_fields(digits);
            assert_eq!(result.pairs.len(), digits.len() - 1);
            for (i, pair) in result.pairs.iter().enumerate() {
                assert_eq!(pair, &digits[i..i + 2]);
            }
        }
    }

    #[test]
    fn test_counts_partition_pairs() {
        let result = analyze_magnetic_fields("0912345196");
        let counted: usize = result.field_counts.values().sum();
        assert_eq!(counted + result.unmatched_count(), result.pairs.len());
    }

    #[test]
    fn test_sample_number() {
        let result = analyze_magnetic_fields("0978-759-196");
        assert_eq!(
            result.pairs,
            vec!["09", "97", "78", "87", "75", "59", "91", "19", "96"]
        );
        assert_eq!(result.field_counts.get(&FieldKind::Yannian), Some(&4));
        assert_eq!(result.field_counts.get(&FieldKind::Wugui), Some(&1));
        assert_eq!(result.field_counts.get(&FieldKind::Jueming), Some(&1));
        assert_eq!(result.unmatched_count(), 3);

        let last = result.matches.last().unwrap();
        assert_eq!(last.pair, "96");
        assert_eq!(last.field, FieldKind::Jueming);
        assert_eq!(last.score, -8);

        // -6 + 9 * 4 - 8
        assert_eq!(result.total_score, 22);
        assert!((result.average_score - 22.0 / 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_inputs() {
        for input in ["", "7", "--"] {
            let result = analyze_magnetic_fields(input);
            assert!(result.pairs.is_empty());
            assert_eq!(result.total_score, 0);
            assert_eq!(result.average_score, 0.0);
        }
    }
}
