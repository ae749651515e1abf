use serde::Serialize;

/// Recommendation tier of a final score.
///
/// Bands are closed below: `>= 80`, `>= 70`, `>= 60`, `>= 50`, rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    NotRecommended,
    Average,
    Suitable,
    VerySuitable,
    HighlyRecommended,
}

const THRESHOLDS: [(f64, Tier); 4] = [
    (80.0, Tier::HighlyRecommended),
    (70.0, Tier::VerySuitable),
    (60.0, Tier::Suitable),
    (50.0, Tier::Average),
];

impl Tier {
    pub fn from_score(score: f64) -> Tier {
        THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, tier)| *tier)
            .unwrap_or(Tier::NotRecommended)
    }

    pub fn stars(&self) -> u8 {
        match self {
            Tier::HighlyRecommended => 5,
            Tier::VerySuitable => 4,
            Tier::Suitable => 3,
            Tier::Average => 2,
            Tier::NotRecommended => 1,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tier::HighlyRecommended => "極力推薦",
            Tier::VerySuitable => "非常適合",
            Tier::Suitable => "適合",
            Tier::Average => "普通",
            Tier::NotRecommended => "不推薦",
        }
    }

    /// Star rating followed by the description, e.g. `★★★★☆ 非常適合`.
    pub fn label(&self) -> String {
        let filled = self.stars() as usize;
        format!(
            "{}{} {}",
            "★".repeat(filled),
            "☆".repeat(5 - filled),
            self.description()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(Tier::from_score(100.0), Tier::HighlyRecommended);
        assert_eq!(Tier::from_score(80.0), Tier::HighlyRecommended);
        assert_eq!(Tier::from_score(79.99), Tier::VerySuitable);
        assert_eq!(Tier::from_score(70.0), Tier::VerySuitable);
        assert_eq!(Tier::from_score(60.0), Tier::Suitable);
        assert_eq!(Tier::from_score(50.0), Tier::Average);
        assert_eq!(Tier::from_score(49.99), Tier::NotRecommended);
        assert_eq!(Tier::from_score(0.0), Tier::NotRecommended);
    }

    #[test]
    fn test_tiers_are_monotonic() {
        let mut previous = Tier::NotRecommended;
        for step in 0..=10_000 {
            let tier = Tier::from_score(step as f64 / 100.0);
            assert!(tier >= previous);
            previous = tier;
        }
        assert_eq!(previous, Tier::HighlyRecommended);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Tier::HighlyRecommended.label(), "★★★★★ 極力推薦");
        assert_eq!(Tier::VerySuitable.label(), "★★★★☆ 非常適合");
        assert_eq!(Tier::NotRecommended.label(), "★☆☆☆☆ 不推薦");
    }
}
