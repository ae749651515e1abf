use serde::Serialize;

use super::config::Weights;
use super::tier::Tier;
use crate::analysis::elements::ElementAnalysis;
use crate::analysis::lingdong::LingdongAnalysis;
use crate::analysis::magnetic::MagneticAnalysis;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FactorContribution {
    pub label: &'static str,  // "Magnetic", "Lingdong", "Elements"
    pub raw: f64,             // Sub-score before normalization
    pub normalized: f64,      // Sub-score on the 0-100 scale
    pub weight: f64,
    pub contribution: f64,    // normalized * weight
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub factors: Vec<FactorContribution>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Weighted score in [0, 100], rounded to two decimals
    pub score: f64,
    pub tier: Tier,
    pub breakdown: ScoreBreakdown,
}

/// Map a sub-score from [-10, 10] onto [0, 100].
pub fn normalize_signed(value: f64) -> f64 {
    (value + 10.0) / 20.0 * 100.0
}

pub fn calculate_score(
    magnetic: &MagneticAnalysis,
    lingdong: &LingdongAnalysis,
    elements: &ElementAnalysis,
    weights: &Weights,
) -> ScoreResult {
    let factors = vec![
        factor(
            "Magnetic",
            magnetic.average_score,
            normalize_signed(magnetic.average_score),
            weights.magnetic,
        ),
        factor(
            "Lingdong",
            f64::from(lingdong.score),
            normalize_signed(f64::from(lingdong.score)),
            weights.lingdong,
        ),
        factor(
            "Elements",
            f64::from(elements.compatibility_score),
            f64::from(elements.compatibility_score).clamp(0.0, 100.0),
            weights.elements,
        ),
    ];

    let total: f64 = factors.iter().map(|f| f.contribution).sum();
    let (score, tier) = finalize(total);

    ScoreResult {
        score,
        tier,
        breakdown: ScoreBreakdown { factors },
    }
}

/// Clamp the weighted total to [0, 100]. The tier comes from the unrounded
/// total, so 79.996 is still VerySuitable even though it prints as 80.00.
fn finalize(total: f64) -> (f64, Tier) {
    let clamped = total.clamp(0.0, 100.0);
    (round2(clamped), Tier::from_score(clamped))
}

fn factor(label: &'static str, raw: f64, normalized: f64, weight: f64) -> FactorContribution {
    FactorContribution {
        label,
        raw,
        normalized,
        weight,
        contribution: normalized * weight,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
