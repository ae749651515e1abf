pub mod config;
pub mod engine;
pub mod tier;
pub mod validation;

pub use config::*;
pub use engine::{calculate_score, FactorContribution, ScoreBreakdown, ScoreResult};
pub use tier::Tier;
pub use validation::validate_scoring;
