use super::{BirthProfile, Category, RecommendationCandidate};
use crate::tables::lingdong::GREAT_LUCK_INDICES;
use crate::tables::magnetic::{field_for_pair, lucky_pairs, MagneticField};

pub type Strategy = fn(&BirthProfile) -> Vec<RecommendationCandidate>;

/// Strategies in merge order. Earlier strategies win duplicate patterns.
pub const STRATEGIES: [(&str, Strategy); 5] = [
    ("personal", personal),
    ("elemental_lucky_field", elemental_lucky_field),
    ("elemental_generating", elemental_generating),
    ("numerological", numerological),
    ("birthdate_digits", birthdate_digits),
];

const ELEMENTAL_FIELD_LIMIT: usize = 8;
const LINGDONG_OFFSETS: [u32; 4] = [0, 80, 160, 240];

fn lucky_field(pattern: &str) -> Option<&'static MagneticField> {
    field_for_pair(pattern).filter(|f| f.kind.is_lucky())
}

fn candidate(
    pattern: String,
    category: Category,
    rationale: String,
    score: u32,
) -> RecommendationCandidate {
    RecommendationCandidate {
        pattern,
        category,
        rationale,
        score,
    }
}

fn digit_char(n: u32) -> char {
    char::from_digit(n % 10, 10).unwrap_or('0')
}

/// Patterns built from `(month + day) mod 10` and the year digit sum.
pub fn personal(profile: &BirthProfile) -> Vec<RecommendationCandidate> {
    let date = &profile.birthdate;
    let personal = digit_char(date.month % 10 + date.day % 10);
    let secondary = digit_char(date.year_digit_sum());
    let lucky = profile.lucky_digits()[0];

    [
        [personal, secondary],
        [secondary, personal],
        [personal, lucky],
        [lucky, personal],
        [personal, personal],
    ]
    .iter()
    .map(|chars| {
        let pattern: String = chars.iter().collect();
        match lucky_field(&pattern) {
            Some(field) => {
                let rationale = format!("個人專屬組合 + {}磁場", field.name);
                candidate(pattern, Category::Personal, rationale, 95)
            }
            None => {
                let rationale = format!("個人專屬組合 (基於{}月{}日)", date.month, date.day);
                candidate(pattern, Category::Personal, rationale, 88)
            }
        }
    })
    .collect()
}

/// Lucky-field pairs that contain one of the top three lucky digits.
pub fn elemental_lucky_field(profile: &BirthProfile) -> Vec<RecommendationCandidate> {
    let top = profile.top_lucky_digits();
    lucky_pairs()
        .filter(|pair| pair.chars().any(|c| top.contains(&c)))
        .take(ELEMENTAL_FIELD_LIMIT)
        .map(|pair| {
            let field = field_for_pair(pair).map(|f| f.name).unwrap_or_default();
            let rationale = format!("{}磁場 + 適合{}命", field, profile.element.label());
            candidate(pair.to_string(), Category::ElementalLuckyField, rationale, 92)
        })
        .collect()
}

/// Every ordered pair (with repetition) of the top three lucky digits.
pub fn elemental_generating(profile: &BirthProfile) -> Vec<RecommendationCandidate> {
    let top = profile.top_lucky_digits();
    let mut out = Vec::with_capacity(top.len() * top.len());
    for first in top {
        for second in top {
            let pattern: String = [first, second].iter().collect();
            out.push(match lucky_field(&pattern) {
                Some(field) => {
                    let rationale = format!("五行相生 + {}磁場", field.name);
                    candidate(pattern, Category::ElementalGenerating, rationale, 90)
                }
                None => {
                    let rationale = format!("五行相生數字 (適合{}命)", profile.element.label());
                    candidate(pattern, Category::ElementalGenerating, rationale, 85)
                }
            });
        }
    }
    out
}

/// Great-luck lingdong index nearest to the year digit sum (mod 81, 0 → 81).
/// Ties go to the earlier index in the list.
pub fn target_lingdong(profile: &BirthProfile) -> u32 {
    let target = match profile.birthdate.year_digit_sum() % 81 {
        0 => 81,
        n => n,
    };
    GREAT_LUCK_INDICES
        .iter()
        .copied()
        .min_by_key(|index| index.abs_diff(target))
        .unwrap_or(target)
}

/// Last two digits of the target lingdong index plus multiples of 80.
pub fn numerological(profile: &BirthProfile) -> Vec<RecommendationCandidate> {
    let index = target_lingdong(profile);
    let year = profile.birthdate.year;
    LINGDONG_OFFSETS
        .iter()
        .map(|offset| {
            let padded = format!("{:04}", index + offset);
            let pattern = padded[padded.len() - 2..].to_string();
            let rationale = format!("對應靈動數{} (基於{}年)", index, year);
            candidate(pattern, Category::NumerologicalLucky, rationale, 87)
        })
        .collect()
}

/// Ordered pairs of the first two distinct non-zero digits of month and day.
pub fn birthdate_digits(profile: &BirthProfile) -> Vec<RecommendationCandidate> {
    let date = &profile.birthdate;
    let mut digits: Vec<char> = Vec::new();
    for d in [date.month / 10, date.month % 10, date.day / 10, date.day % 10] {
        let c = digit_char(d);
        if c != '0' && !digits.contains(&c) {
            digits.push(c);
        }
    }
    digits.truncate(2);

    let mut out = Vec::new();
    for (i, first) in digits.iter().enumerate() {
        for (j, second) in digits.iter().enumerate() {
            if i == j {
                continue;
            }
            let pattern: String = [*first, *second].iter().collect();
            out.push(match lucky_field(&pattern) {
                Some(field) => {
                    let rationale = format!("生日數字 + {}磁場", field.name);
                    candidate(pattern, Category::BirthdateDigits, rationale, 89)
                }
                None => {
                    let rationale = format!("生日數字組合 ({}/{})", date.month, date.day);
                    candidate(pattern, Category::BirthdateDigits, rationale, 82)
                }
            });
        }
    }
    out
}
