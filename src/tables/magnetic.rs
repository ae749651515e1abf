use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::{NumerologyError, Result};

/// Connotation of a magnetic field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Lucky,
    Neutral,
    Unlucky,
}

impl Polarity {
    pub fn label(&self) -> &'static str {
        match self {
            Polarity::Lucky => "吉",
            Polarity::Neutral => "平",
            Polarity::Unlucky => "凶",
        }
    }
}

/// The eight digit-pair magnetic fields, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Tianyi,
    Shengqi,
    Yannian,
    Fuwei,
    Jueming,
    Huohai,
    Wugui,
    Liusha,
}

impl FieldKind {
    pub fn field(&self) -> &'static MagneticField {
        &MAGNETIC_FIELDS[*self as usize]
    }

    pub fn name(&self) -> &'static str {
        self.field().name
    }

    pub fn is_lucky(&self) -> bool {
        self.field().polarity == Polarity::Lucky
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MagneticField {
    pub kind: FieldKind,
    pub name: &'static str,
    pub pairs: &'static [&'static str],
    pub meaning: &'static str,
    pub score: i32,
    pub polarity: Polarity,
}

pub const MAGNETIC_FIELDS: [MagneticField; 8] = [
    MagneticField {
        kind: FieldKind::Tianyi,
        name: "天醫",
        pairs: &["13", "31", "68", "86", "49", "94", "27", "72"],
        meaning: "財富、智慧、正桃花、婚姻",
        score: 10,
        polarity: Polarity::Lucky,
    },
    MagneticField {
        kind: FieldKind::Shengqi,
        name: "生氣",
        pairs: &["14", "41", "67", "76", "93", "39", "82", "28"],
        meaning: "貴人、樂天、人際關係",
        score: 9,
        polarity: Polarity::Lucky,
    },
    MagneticField {
        kind: FieldKind::Yannian,
        name: "延年",
        pairs: &["19", "91", "87", "78", "34", "43", "26", "62"],
        meaning: "事業、專業能力、領導力",
        score: 9,
        polarity: Polarity::Lucky,
    },
    MagneticField {
        kind: FieldKind::Fuwei,
        name: "伏位",
        pairs: &["11", "22", "33", "44", "55", "66", "77", "88", "99"],
        meaning: "等待、蓄勢待發",
        score: 5,
        polarity: Polarity::Neutral,
    },
    MagneticField {
        kind: FieldKind::Jueming,
        name: "絕命",
        pairs: &["12", "21", "69", "96", "48", "84", "37", "73"],
        meaning: "投資、冒險、壓力",
        score: -8,
        polarity: Polarity::Unlucky,
    },
    MagneticField {
        kind: FieldKind::Huohai,
        name: "禍害",
        pairs: &["17", "71", "89", "98", "46", "64", "32", "23"],
        meaning: "口舌是非、小人",
        score: -7,
        polarity: Polarity::Unlucky,
    },
    MagneticField {
        kind: FieldKind::Wugui,
        name: "五鬼",
        pairs: &["18", "81", "97", "79", "36", "63", "24", "42"],
        meaning: "聰明、機智但易有意外",
        score: -6,
        polarity: Polarity::Unlucky,
    },
    MagneticField {
        kind: FieldKind::Liusha,
        name: "六煞",
        pairs: &["16", "61", "74", "47", "38", "83", "29", "92"],
        meaning: "桃花、感情波折",
        score: -5,
        polarity: Polarity::Unlucky,
    },
];

/// Reverse index from a two-digit pair (`"00"..="99"`) to its field.
#[derive(Debug, Clone)]
pub struct PairIndex {
    slots: [Option<FieldKind>; 100],
}

impl PairIndex {
    /// Build the index, rejecting any pair that appears in two fields.
    pub fn build(fields: &[MagneticField]) -> Result<Self> {
        let mut slots = [None; 100];
        for field in fields {
            for pair in field.pairs {
                let slot = pair_slot(pair).ok_or_else(|| NumerologyError::InvalidPair {
                    pair: pair.to_string(),
                    field: field.name,
                })?;
                if let Some(existing) = slots[slot] {
                    return Err(NumerologyError::DuplicatePair {
                        pair: pair.to_string(),
                        first: fields
                            .iter()
                            .find(|f| f.kind == existing)
                            .map(|f| f.name)
                            .unwrap_or("?"),
                        second: field.name,
                    });
                }
                slots[slot] = Some(field.kind);
            }
        }
        Ok(Self { slots })
    }

    pub fn lookup(&self, pair: &str) -> Option<FieldKind> {
        pair_slot(pair).and_then(|slot| self.slots[slot])
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn pair_slot(pair: &str) -> Option<usize> {
    let bytes = pair.as_bytes();
    if bytes.len() != 2 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(((bytes[0] - b'0') * 10 + (bytes[1] - b'0')) as usize)
}

static PAIR_INDEX: Lazy<PairIndex> = Lazy::new(|| {
    PairIndex::build(&MAGNETIC_FIELDS)
        .unwrap_or_else(|e| panic!("magnetic field table is inconsistent: {}", e))
});

/// Field a two-digit pair belongs to, if any.
pub fn field_for_pair(pair: &str) -> Option<&'static MagneticField> {
    PAIR_INDEX.lookup(pair).map(|kind| kind.field())
}

/// Pairs of the three lucky fields, in table order.
pub fn lucky_pairs() -> impl Iterator<Item = &'static str> {
    MAGNETIC_FIELDS
        .iter()
        .filter(|f| f.polarity == Polarity::Lucky)
        .flat_map(|f| f.pairs.iter().copied())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_table_position() {
        for (i, field) in MAGNETIC_FIELDS.iter().enumerate() {
            assert_eq!(field.kind as usize, i);
            assert_eq!(field.kind.field().name, field.name);
        }
    }

    #[test]
    fn test_fields_are_disjoint() {
        let index = PairIndex::build(&MAGNETIC_FIELDS).unwrap();
        let total: usize = MAGNETIC_FIELDS.iter().map(|f| f.pairs.len()).sum();
        assert_eq!(index.len(), total);
        assert_eq!(total, 65);
    }

    #[test]
    fn test_collision_is_rejected() {
        let mut fields = MAGNETIC_FIELDS.to_vec();
        fields[1].pairs = &["13", "99"];
        let err = PairIndex::build(&fields).unwrap_err();
        assert_eq!(
            err,
            NumerologyError::DuplicatePair {
                pair: "13".to_string(),
                first: "天醫",
                second: "生氣",
            }
        );
    }

    #[test]
    fn test_malformed_table_pair_is_rejected() {
        let mut fields = MAGNETIC_FIELDS.to_vec();
        fields[0].pairs = &["1x"];
        assert!(matches!(
            PairIndex::build(&fields),
            Err(NumerologyError::InvalidPair { .. })
        ));
    }

    #[test]
    fn test_field_for_pair() {
        assert_eq!(field_for_pair("96").unwrap().kind, FieldKind::Jueming);
        assert_eq!(field_for_pair("78").unwrap().kind, FieldKind::Yannian);
        assert_eq!(field_for_pair("55").unwrap().polarity, Polarity::Neutral);
        assert!(field_for_pair("09").is_none());
        assert!(field_for_pair("75").is_none());
    }

    #[test]
    fn test_malformed_pairs_miss() {
        assert!(field_for_pair("1").is_none());
        assert!(field_for_pair("123").is_none());
        assert!(field_for_pair("1a").is_none());
    }

    #[test]
    fn test_lucky_pairs_order() {
        let pairs: Vec<_> = lucky_pairs().collect();
        assert_eq!(pairs.len(), 24);
        assert_eq!(&pairs[..3], &["13", "31", "68"]);
        assert_eq!(pairs[8], "14");
        assert_eq!(pairs[23], "62");
    }
}
