use serde::Serialize;
use tracing::debug;

use super::birthdate::Birthdate;
use super::elements::{calculate_five_elements, ElementAnalysis};
use super::lingdong::{calculate_lingdong, LingdongAnalysis};
use super::magnetic::{analyze_magnetic_fields, MagneticAnalysis};
use crate::error::Result;
use crate::output::formatter::format_report;
use crate::recommend::{recommend, BirthProfile, RecommendationCandidate};
use crate::scoring::{calculate_score, ScoreBreakdown, ScoringConfig, Tier};
use crate::tables::elements::{Element, Stem};

/// Full analysis of one phone number for one birthdate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub phone_number: String,
    pub birthdate: Birthdate,
    pub magnetic_fields: MagneticAnalysis,
    pub lingdong: LingdongAnalysis,
    pub five_elements: ElementAnalysis,
    pub final_score: f64,
    pub recommendation: Tier,
    pub breakdown: ScoreBreakdown,
}

/// Analyzer bound to one birthdate. Holds no other state, so one instance
/// can score any number of phone numbers.
#[derive(Debug, Clone)]
pub struct PhoneNumerology {
    birthdate: Birthdate,
    scoring: ScoringConfig,
}

impl PhoneNumerology {
    /// Build an analyzer from a `YYYY/MM/DD` birthdate.
    pub fn new(birthdate: &str) -> Result<Self> {
        Ok(Self::from_birthdate(birthdate.parse()?))
    }

    pub fn from_birthdate(birthdate: Birthdate) -> Self {
        Self {
            birthdate,
            scoring: ScoringConfig::default(),
        }
    }

    /// Replace the scoring configuration. Callers validate it first with
    /// [`crate::scoring::validate_scoring`].
    pub fn with_scoring(mut self, scoring: ScoringConfig) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn birthdate(&self) -> &Birthdate {
        &self.birthdate
    }

    pub fn birth_stem(&self) -> Stem {
        Stem::of_year(self.birthdate.year)
    }

    pub fn birth_element(&self) -> Element {
        self.birth_stem().element()
    }

    pub fn analyze_magnetic_fields(&self, phone_number: &str) -> MagneticAnalysis {
        analyze_magnetic_fields(phone_number)
    }

    pub fn calculate_lingdong(&self, phone_number: &str) -> Result<LingdongAnalysis> {
        calculate_lingdong(phone_number, self.scoring.tail_length())
    }

    pub fn calculate_five_elements(&self, phone_number: &str) -> ElementAnalysis {
        calculate_five_elements(phone_number, self.birthdate.year)
    }

    /// Run all three analyzers and combine them into a final score.
    pub fn comprehensive_analysis(&self, phone_number: &str) -> Result<AnalysisResult> {
        let magnetic_fields = self.analyze_magnetic_fields(phone_number);
        let lingdong = self.calculate_lingdong(phone_number)?;
        let five_elements = self.calculate_five_elements(phone_number);

        let score = calculate_score(
            &magnetic_fields,
            &lingdong,
            &five_elements,
            &self.scoring.effective_weights(),
        );

        debug!(
            phone_number,
            magnetic_average = magnetic_fields.average_score,
            lingdong_index = lingdong.index,
            compatibility = five_elements.compatibility_score,
            final_score = score.score,
            "analysis complete"
        );

        Ok(AnalysisResult {
            phone_number: phone_number.to_string(),
            birthdate: self.birthdate,
            magnetic_fields,
            lingdong,
            five_elements,
            final_score: score.score,
            recommendation: score.tier,
            breakdown: score.breakdown,
        })
    }

    /// Plain-text report of [`Self::comprehensive_analysis`].
    pub fn generate_report(&self, phone_number: &str) -> Result<String> {
        let analysis = self.comprehensive_analysis(phone_number)?;
        Ok(format_report(&analysis, false))
    }

    /// Two-digit patterns suited to this birthdate, best first.
    pub fn recommend_numbers(&self, count: usize) -> Vec<RecommendationCandidate> {
        recommend(&BirthProfile::new(self.birthdate), count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NumerologyError;
    use crate::scoring::Weights;

    #[test]
    fn test_invalid_birthdate() {
        let err = PhoneNumerology::new("1990-09-25").unwrap_err();
        assert!(matches!(err, NumerologyError::InvalidBirthdate { .. }));
    }

    #[test]
    fn test_birth_element() {
        let analyzer = PhoneNumerology::new("1990/09/25").unwrap();
        assert_eq!(analyzer.birth_stem(), Stem::Bing);
        assert_eq!(analyzer.birth_element(), Element::Fire);
    }

    #[test]
    fn test_comprehensive_analysis() {
        let analyzer = PhoneNumerology::new("1990/09/25").unwrap();
        let result = analyzer.comprehensive_analysis("0978-759-196").unwrap();

        assert_eq!(result.phone_number, "0978-759-196");
        assert_eq!(result.birthdate.to_string(), "1990/09/25");
        assert_eq!(result.magnetic_fields.total_score, 22);
        assert_eq!(result.lingdong.tail, "9196");
        assert_eq!(result.lingdong.index, 76);
        assert_eq!(result.five_elements.compatibility_score, 8);
        assert_eq!(result.final_score, 37.79);
        assert_eq!(result.recommendation, Tier::NotRecommended);
    }

    #[test]
    fn test_analysis_is_repeatable() {
        let analyzer = PhoneNumerology::new("1990/09/25").unwrap();
        let first = analyzer.comprehensive_analysis("0912-345-196").unwrap();
        let second = analyzer.comprehensive_analysis("0912-345-196").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.final_score.to_bits(), second.final_score.to_bits());
    }

    #[test]
    fn test_reuse_across_numbers() {
        let analyzer = PhoneNumerology::new("1990/09/25").unwrap();
        let before = analyzer.comprehensive_analysis("0978-759-196").unwrap();
        analyzer.comprehensive_analysis("0911-111-111").unwrap();
        let after = analyzer.comprehensive_analysis("0978-759-196").unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_empty_phone_number() {
        let analyzer = PhoneNumerology::new("1990/09/25").unwrap();
        let err = analyzer.comprehensive_analysis("---").unwrap_err();
        assert!(matches!(err, NumerologyError::EmptyPhoneNumber { .. }));
    }

    #[test]
    fn test_scoring_config_is_applied() {
        let analyzer = PhoneNumerology::new("1990/09/25")
            .unwrap()
            .with_scoring(ScoringConfig {
                lingdong_tail: Some(8),
                weights: Some(Weights {
                    magnetic: 0.0,
                    lingdong: 1.0,
                    elements: 0.0,
                }),
            });
        let result = analyzer.comprehensive_analysis("0978-759-196").unwrap();
        assert_eq!(result.lingdong.tail, "78759196");
        assert_eq!(result.final_score, 35.0);
    }

    #[test]
    fn test_generate_report() {
        let analyzer = PhoneNumerology::new("1990/09/25").unwrap();
        let report = analyzer.generate_report("0978-759-196").unwrap();
        assert!(report.contains("0978-759-196"));
        assert!(report.contains("1990/09/25"));
        assert!(report.contains("37.79"));
    }

    #[test]
    fn test_recommend_numbers() {
        let analyzer = PhoneNumerology::new("1990/09/25").unwrap();
        let patterns: Vec<_> = analyzer
            .recommend_numbers(5)
            .into_iter()
            .map(|c| c.pattern)
            .collect();
        assert_eq!(patterns, vec!["49", "94", "43", "34", "13"]);
    }
}
