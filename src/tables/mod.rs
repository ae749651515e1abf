//! Reference tables shared read-only by every analyzer.

pub mod elements;
pub mod lingdong;
pub mod magnetic;

pub use elements::{Element, Relation, Stem};
pub use lingdong::{FortuneClass, LingdongEntry, GREAT_LUCK_INDICES, LINGDONG_TABLE};
pub use magnetic::{
    field_for_pair, lucky_pairs, FieldKind, MagneticField, Polarity, MAGNETIC_FIELDS,
};
