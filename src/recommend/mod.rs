//! Birthdate-only pattern recommendations.
//!
//! Five strategies each propose two-digit patterns; the engine merges them
//! in order, keeping the first candidate for every pattern, tops the list up
//! from the lucky fields and sorts by score.

pub mod engine;
pub mod strategies;

use serde::Serialize;

use crate::analysis::Birthdate;
use crate::tables::elements::{Element, Stem};

pub use engine::recommend;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Personal,
    ElementalLuckyField,
    ElementalGenerating,
    NumerologicalLucky,
    BirthdateDigits,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Personal => "個人專屬",
            Category::ElementalLuckyField => "吉星磁場",
            Category::ElementalGenerating => "五行相生",
            Category::NumerologicalLucky => "靈動大吉",
            Category::BirthdateDigits => "生日數字",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationCandidate {
    pub pattern: String,
    pub category: Category,
    pub rationale: String,
    pub score: u32,
}

/// What the strategies know about a person.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthProfile {
    pub birthdate: Birthdate,
    pub element: Element,
}

impl BirthProfile {
    pub fn new(birthdate: Birthdate) -> Self {
        Self {
            birthdate,
            element: Stem::of_year(birthdate.year).element(),
        }
    }

    pub fn lucky_digits(&self) -> [char; 6] {
        self.element.lucky_digits()
    }

    /// The three strongest lucky digits.
    pub fn top_lucky_digits(&self) -> [char; 3] {
        let digits = self.lucky_digits();
        [digits[0], digits[1], digits[2]]
    }
}
