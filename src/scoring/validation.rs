use super::config::ScoringConfig;

/// Largest tail that always fits in a u64.
pub const MAX_TAIL_LENGTH: usize = 18;

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(tail) = config.lingdong_tail {
        if tail == 0 || tail > MAX_TAIL_LENGTH {
            errors.push(format!(
                "scoring.lingdong_tail: must be between 1 and {}, got {}",
                MAX_TAIL_LENGTH, tail
            ));
        }
    }

    if let Some(ref weights) = config.weights {
        for (name, value) in [
            ("magnetic", weights.magnetic),
            ("lingdong", weights.lingdong),
            ("elements", weights.elements),
        ] {
            if !value.is_finite() || value < 0.0 {
                errors.push(format!(
                    "scoring.weights.{}: must be a non-negative number, got {}",
                    name, value
                ));
            }
        }
        if (weights.sum() - 1.0).abs() > 1e-6 {
            errors.push(format!(
                "scoring.weights: must sum to 1.0, got {}",
                weights.sum()
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Weights;

    #[test]
    fn test_valid_config() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_config() {
        let config = ScoringConfig {
            lingdong_tail: None,
            weights: None,
        };
        assert!(validate_scoring(&config).is_ok());
    }

    #[test]
    fn test_zero_tail() {
        let config = ScoringConfig {
            lingdong_tail: Some(0),
            weights: None,
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.lingdong_tail"));
    }

    #[test]
    fn test_tail_too_long() {
        let config = ScoringConfig {
            lingdong_tail: Some(19),
            weights: None,
        };
        assert!(validate_scoring(&config).is_err());
    }

    #[test]
    fn test_weights_must_sum_to_one() {
        let config = ScoringConfig {
            lingdong_tail: None,
            weights: Some(Weights {
                magnetic: 0.5,
                lingdong: 0.5,
                elements: 0.5,
            }),
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("sum to 1.0"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = ScoringConfig {
            lingdong_tail: Some(0),   // Error 1
            weights: Some(Weights {
                magnetic: -0.2,       // Error 2
                lingdong: 0.6,
                elements: 0.6,
            }),
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[1].contains("scoring.weights.magnetic"));
    }
}
