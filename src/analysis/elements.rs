use std::collections::BTreeMap;

use serde::Serialize;

use super::clean_digits;
use crate::tables::elements::{Element, Relation, Stem};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementScore {
    pub element: Element,
    pub count: usize,
    pub relation: Relation,
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementAnalysis {
    pub birth_year: u32,
    pub birth_stem: Stem,
    pub birth_element: Element,
    pub element_counts: BTreeMap<Element, usize>,
    /// One entry per element present in the number, in element order.
    pub element_scores: Vec<ElementScore>,
    /// Unbounded; the composite scorer clamps it.
    pub compatibility_score: i32,
}

/// Score each digit's element against the element of the birth year.
pub fn calculate_five_elements(phone_number: &str, birth_year: u32) -> ElementAnalysis {
    let birth_stem = Stem::of_year(birth_year);
    let birth_element = birth_stem.element();

    let mut element_counts = BTreeMap::new();
    for element in clean_digits(phone_number).chars().filter_map(Element::of_digit) {
        *element_counts.entry(element).or_insert(0) += 1;
    }

    let element_scores: Vec<ElementScore> = element_counts
        .iter()
        .map(|(&element, &count)| {
            let relation = Relation::between(element, birth_element);
            ElementScore {
                element,
                count,
                relation,
                score: relation.weight() * count as i32,
            }
        })
        .collect();

    let compatibility_score = element_scores.iter().map(|s| s.score).sum();

    ElementAnalysis {
        birth_year,
        birth_stem,
        birth_element,
        element_counts,
        element_scores,
        compatibility_score,
    }
}
