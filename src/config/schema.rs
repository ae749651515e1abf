use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Birthdate used when `--birthdate` is not given (YYYY/MM/DD)
    #[serde(default)]
    pub birthdate: Option<String>,

    /// Number of patterns `recommend` prints when `--count` is not given
    #[serde(default)]
    pub recommend_count: Option<usize>,

    #[serde(default)]
    pub scoring: Option<ScoringConfig>,
}
