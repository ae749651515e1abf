//! Ranking a list of candidate numbers, e.g. the output of a number search.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::analysis::{AnalysisResult, PhoneNumerology};
use crate::input::format_display;

/// Default list file written by the number search.
pub const DEFAULT_NUMBERS_FILE: &str = "found_numbers.txt";

/// Read one number per line, skipping blank lines.
pub fn load_numbers(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read numbers file at {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Analyze every number and sort by final score, best first.
///
/// Ten-digit numbers are shown as `0XXX-XXX-XXX`. Numbers that cannot be
/// analyzed are skipped with a warning. Equal scores keep input order.
pub fn rank_numbers<S: AsRef<str>>(
    analyzer: &PhoneNumerology,
    numbers: &[S],
) -> Vec<AnalysisResult> {
    let mut results: Vec<AnalysisResult> = numbers
        .iter()
        .filter_map(|number| {
            let display = format_display(number.as_ref());
            match analyzer.comprehensive_analysis(&display) {
                Ok(result) => Some(result),
                Err(e) => {
                    warn!(number = number.as_ref(), error = %e, "skipping number");
                    None
                }
            }
        })
        .collect();

    results.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(ranked = results.len(), input = numbers.len(), "ranking complete");
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_numbers_skips_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "0978759196\n\n  0912345196  \n").unwrap();

        let numbers = load_numbers(file.path()).unwrap();
        assert_eq!(numbers, vec!["0978759196", "0912345196"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_numbers(&dir.path().join("nope.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read numbers file"));
    }

    #[test]
    fn test_rank_sorted_descending() {
        let analyzer = PhoneNumerology::new("1990/09/25").unwrap();
        let numbers = ["0978759196", "0913941394", "0912345196", "0969696969"];
        let results = rank_numbers(&analyzer, &numbers);

        assert_eq!(results.len(), 4);
        assert!(results.windows(2).all(|w| w[0].final_score >= w[1].final_score));
        assert!(results.iter().any(|r| r.phone_number == "0978-759-196"));
    }

    #[test]
    fn test_rank_skips_unanalyzable() {
        let analyzer = PhoneNumerology::new("1990/09/25").unwrap();
        let results = rank_numbers(&analyzer, &["0978759196", "---"]);
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_rank_matches_single_analysis() {
        let analyzer = PhoneNumerology::new("1990/09/25").unwrap();
        let ranked = rank_numbers(&analyzer, &["0978759196"]);
        let single = analyzer.comprehensive_analysis("0978-759-196").unwrap();
        assert_eq!(ranked[0], single);
    }
}
