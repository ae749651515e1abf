//! Phone number numerology.
//!
//! Scores a phone number for a birthdate with three table-driven models
//! (digit-pair magnetic fields, the 81 lingdong numbers and five-element
//! compatibility), combines them into a 0-100 score and a recommendation
//! tier, and proposes two-digit patterns suited to a birthdate.
//!
//! ```no_run
//! use phone_numerology::PhoneNumerology;
//!
//! let analyzer = PhoneNumerology::new("1990/09/25")?;
//! let result = analyzer.comprehensive_analysis("0978-759-196")?;
//! println!("{} {}", result.final_score, result.recommendation.label());
//! # Ok::<(), phone_numerology::NumerologyError>(())
//! ```

pub mod analysis;
pub mod batch;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod recommend;
pub mod scoring;
pub mod tables;

pub use analysis::{AnalysisResult, Birthdate, PhoneNumerology};
pub use error::NumerologyError;
pub use recommend::{Category, RecommendationCandidate};
pub use scoring::Tier;
