use std::collections::HashSet;

use tracing::debug;

use super::strategies::STRATEGIES;
use super::{BirthProfile, Category, RecommendationCandidate};
use crate::tables::magnetic::{field_for_pair, lucky_pairs};

const BACKFILL_SCORE: u32 = 85;

/// Up to `count` unique patterns for a birth profile, best first.
///
/// Strategies run in a fixed order and the first one to propose a pattern
/// keeps it. If they come up short, unused lucky-field pairs fill the gap in
/// table order. The final sort is stable, so equal scores keep strategy order.
pub fn recommend(profile: &BirthProfile, count: usize) -> Vec<RecommendationCandidate> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for (name, strategy) in STRATEGIES {
        let before = candidates.len();
        candidates.extend(
            strategy(profile)
                .into_iter()
                .filter(|c| seen.insert(c.pattern.clone())),
        );
        debug!(
            strategy = name,
            added = candidates.len() - before,
            "recommendation strategy applied"
        );
    }

    if candidates.len() < count {
        for pair in lucky_pairs() {
            if candidates.len() >= count {
                break;
            }
            if !seen.insert(pair.to_string()) {
                continue;
            }
            let field = field_for_pair(pair).map(|f| f.name).unwrap_or_default();
            candidates.push(RecommendationCandidate {
                pattern: pair.to_string(),
                category: Category::ElementalLuckyField,
                rationale: format!("{}磁場", field),
                score: BACKFILL_SCORE,
            });
        }
    }

    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(count);
    candidates
}
