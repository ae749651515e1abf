use serde::{Deserialize, Serialize};

use crate::analysis::lingdong::DEFAULT_TAIL_LENGTH;

/// Composite scoring configuration.
///
/// Every field is optional; missing fields fall back to the defaults below.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   lingdong_tail: 4
///   weights:
///     magnetic: 0.4
///     lingdong: 0.3
///     elements: 0.3
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// How many trailing digits feed the lingdong number (default: 4)
    #[serde(default)]
    pub lingdong_tail: Option<usize>,

    /// Weights of the three sub-scores (default: 0.4 / 0.3 / 0.3)
    #[serde(default)]
    pub weights: Option<Weights>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            lingdong_tail: Some(DEFAULT_TAIL_LENGTH),
            weights: Some(Weights::default()),
        }
    }
}

impl ScoringConfig {
    pub fn tail_length(&self) -> usize {
        self.lingdong_tail.unwrap_or(DEFAULT_TAIL_LENGTH)
    }

    pub fn effective_weights(&self) -> Weights {
        self.weights.clone().unwrap_or_default()
    }
}

/// Weights applied to the normalized sub-scores. Must sum to 1.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Weights {
    pub magnetic: f64,
    pub lingdong: f64,
    pub elements: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            magnetic: 0.4,
            lingdong: 0.3,
            elements: 0.3,
        }
    }
}

impl Weights {
    pub fn sum(&self) -> f64 {
        self.magnetic + self.lingdong + self.elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_config() {
        let config = ScoringConfig::default();

        assert_eq!(config.lingdong_tail, Some(4));
        assert_eq!(config.weights, Some(Weights::default()));
        assert!((config.effective_weights().sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_scoring_config_serde_roundtrip() {
        let config = ScoringConfig::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: ScoringConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_scoring_config_parse() {
        let yaml = r#"
lingdong_tail: 8
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.tail_length(), 8);
        assert!(config.weights.is_none());
        assert_eq!(config.effective_weights(), Weights::default());
    }

    #[test]
    fn test_full_scoring_config_parse() {
        let yaml = r#"
lingdong_tail: 4
weights:
  magnetic: 0.5
  lingdong: 0.25
  elements: 0.25
"#;
        let config: ScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        let weights = config.weights.unwrap();
        assert_eq!(weights.magnetic, 0.5);
        assert_eq!(weights.lingdong, 0.25);
        assert_eq!(weights.elements, 0.25);
    }

    #[test]
    fn test_empty_scoring_config_parse() {
        let config: ScoringConfig = serde_saphyr::from_str("{}").unwrap();
        assert!(config.lingdong_tail.is_none());
        assert!(config.weights.is_none());
        assert_eq!(config.tail_length(), 4);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<ScoringConfig, _> = serde_saphyr::from_str("base_score: 100\n");
        assert!(result.is_err());
    }
}
