//! Five elements, the ten heavenly stems and the digit tables built on them.
//!
//! Generating cycle: wood → fire → earth → metal → water → wood.
//! Overcoming cycle: wood → earth → water → fire → metal → wood.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Wood,
        Element::Fire,
        Element::Earth,
        Element::Metal,
        Element::Water,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Element::Wood => "木",
            Element::Fire => "火",
            Element::Earth => "土",
            Element::Metal => "金",
            Element::Water => "水",
        }
    }

    /// The element this one feeds.
    pub fn generates(&self) -> Element {
        match self {
            Element::Wood => Element::Fire,
            Element::Fire => Element::Earth,
            Element::Earth => Element::Metal,
            Element::Metal => Element::Water,
            Element::Water => Element::Wood,
        }
    }

    /// The element this one dominates.
    pub fn overcomes(&self) -> Element {
        match self {
            Element::Wood => Element::Earth,
            Element::Earth => Element::Water,
            Element::Water => Element::Fire,
            Element::Fire => Element::Metal,
            Element::Metal => Element::Wood,
        }
    }

    pub fn generated_by(&self) -> Element {
        Element::ALL
            .into_iter()
            .find(|e| e.generates() == *self)
            .unwrap_or(*self)
    }

    pub fn overcome_by(&self) -> Element {
        Element::ALL
            .into_iter()
            .find(|e| e.overcomes() == *self)
            .unwrap_or(*self)
    }

    /// Element of a decimal digit: {1,2} wood, {3,4} fire, {5,6} earth,
    /// {7,8} metal, {9,0} water.
    pub fn of_digit(digit: char) -> Option<Element> {
        match digit {
            '1' | '2' => Some(Element::Wood),
            '3' | '4' => Some(Element::Fire),
            '5' | '6' => Some(Element::Earth),
            '7' | '8' => Some(Element::Metal),
            '9' | '0' => Some(Element::Water),
            _ => None,
        }
    }

    /// Digits favourable to a person of this element, strongest first.
    pub fn lucky_digits(&self) -> [char; 6] {
        match self {
            Element::Metal => ['7', '8', '9', '0', '4', '5'],
            Element::Wood => ['1', '2', '3', '4', '9', '0'],
            Element::Water => ['9', '0', '1', '2', '7', '8'],
            Element::Fire => ['3', '4', '1', '2', '5', '6'],
            Element::Earth => ['5', '6', '3', '4', '9', '0'],
        }
    }
}

/// Relation of a phone digit's element to the birth element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Same,
    /// The birth element feeds this one.
    GeneratedByBirth,
    /// This element feeds the birth element.
    GeneratesBirth,
    /// The birth element dominates this one.
    OvercomeByBirth,
    /// This element dominates the birth element.
    OvercomesBirth,
}

impl Relation {
    pub fn between(element: Element, birth: Element) -> Relation {
        if element == birth {
            Relation::Same
        } else if element == birth.generates() {
            Relation::GeneratedByBirth
        } else if element == birth.generated_by() {
            Relation::GeneratesBirth
        } else if element == birth.overcomes() {
            Relation::OvercomeByBirth
        } else {
            Relation::OvercomesBirth
        }
    }

    /// Score per digit occurrence.
    pub fn weight(&self) -> i32 {
        match self {
            Relation::Same => 5,
            Relation::GeneratedByBirth => 3,
            Relation::GeneratesBirth => 8,
            Relation::OvercomeByBirth => 2,
            Relation::OvercomesBirth => -3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Relation::Same => "同",
            Relation::GeneratedByBirth => "我生",
            Relation::GeneratesBirth => "生我",
            Relation::OvercomeByBirth => "我剋",
            Relation::OvercomesBirth => "剋我",
        }
    }
}

/// Heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

impl Stem {
    pub fn label(&self) -> &'static str {
        match self {
            Stem::Jia => "甲",
            Stem::Yi => "乙",
            Stem::Bing => "丙",
            Stem::Ding => "丁",
            Stem::Wu => "戊",
            Stem::Ji => "己",
            Stem::Geng => "庚",
            Stem::Xin => "辛",
            Stem::Ren => "壬",
            Stem::Gui => "癸",
        }
    }

    pub fn element(&self) -> Element {
        match self {
            Stem::Jia | Stem::Yi => Element::Wood,
            Stem::Bing | Stem::Ding => Element::Fire,
            Stem::Wu | Stem::Ji => Element::Earth,
            Stem::Geng | Stem::Xin => Element::Metal,
            Stem::Ren | Stem::Gui => Element::Water,
        }
    }

    /// Stem of a year, indexed by `(year - 4) mod 10`.
    ///
    /// Approximation: the stem changes on 1 January rather than at the
    /// lunar new year.
    pub fn of_year(year: u32) -> Stem {
        let index = (i64::from(year) - 4).rem_euclid(10) as usize;
        STEM_CYCLE[index]
    }
}

/// Stem cycle starting at index 0 = 庚.
pub const STEM_CYCLE: [Stem; 10] = [
    Stem::Geng,
    Stem::Xin,
    Stem::Ren,
    Stem::Gui,
    Stem::Jia,
    Stem::Yi,
    Stem::Bing,
    Stem::Ding,
    Stem::Wu,
    Stem::Ji,
];
