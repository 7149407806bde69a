//! Sign-pair and number-pair compatibility.
//!
//! The sign matrix is keyed by the ordered pair `(a, b)` and holds only the
//! pairs with curated scores. It is deliberately left asymmetric: looking up
//! `(b, a)` never falls back to `(a, b)`.

use crate::domain::model::{
    CompatibilityResult, Element, MatchSource, NumberCompatibility, NumerologyProfile, Quality,
    ZodiacSign,
};
use crate::domain::ports::FallbackPolicy;
use sha2::{Digest, Sha256};
use std::collections::hash_map::RandomState;
use std::hash::BuildHasher;

use ZodiacSign::*;

pub const FALLBACK_MIN: u32 = 50;
pub const FALLBACK_SPAN: u32 = 40;

static MATRIX: [(ZodiacSign, ZodiacSign, u32, &str); 24] = [
    (Aries, Aries, 85, "Two Aries create an exciting, dynamic partnership with lots of energy and passion."),
    (Aries, Taurus, 60, "Aries and Taurus balance each other - fire meets earth for a stable yet exciting relationship."),
    (Aries, Gemini, 75, "Aries and Gemini share a love for adventure and communication, creating a lively partnership."),
    (Aries, Cancer, 50, "Aries and Cancer have different emotional needs but can learn from each other's strengths."),
    (Aries, Leo, 90, "Aries and Leo are both fire signs, creating an intense, passionate, and dynamic relationship."),
    (Aries, Virgo, 45, "Aries and Virgo have different approaches to life but can complement each other well."),
    (Aries, Libra, 70, "Aries and Libra balance each other - fire and air create a harmonious partnership."),
    (Aries, Scorpio, 65, "Aries and Scorpio create an intense, passionate relationship with strong chemistry."),
    (Aries, Sagittarius, 95, "Aries and Sagittarius are both fire signs, creating an adventurous and exciting partnership."),
    (Aries, Capricorn, 40, "Aries and Capricorn have different life approaches but can learn from each other."),
    (Aries, Aquarius, 80, "Aries and Aquarius share a love for independence and innovation, creating a unique bond."),
    (Aries, Pisces, 55, "Aries and Pisces have different emotional styles but can create a balanced relationship."),
    (Taurus, Aries, 60, "Taurus and Aries balance each other - earth grounds fire for a stable relationship."),
    (Taurus, Taurus, 80, "Two Taurus create a stable, comfortable partnership with shared values and goals."),
    (Taurus, Gemini, 50, "Taurus and Gemini have different needs but can learn from each other's perspectives."),
    (Taurus, Cancer, 85, "Taurus and Cancer share emotional depth and create a nurturing, secure relationship."),
    (Taurus, Leo, 70, "Taurus and Leo balance each other - earth provides stability for fire's passion."),
    (Taurus, Virgo, 90, "Taurus and Virgo are both earth signs, creating a practical and harmonious partnership."),
    (Taurus, Libra, 75, "Taurus and Libra appreciate beauty and harmony, creating an aesthetically pleasing relationship."),
    (Taurus, Scorpio, 80, "Taurus and Scorpio create an intense, passionate relationship with deep emotional connection."),
    (Taurus, Sagittarius, 45, "Taurus and Sagittarius have different life approaches but can complement each other."),
    (Taurus, Capricorn, 95, "Taurus and Capricorn are both earth signs, creating a stable and successful partnership."),
    (Taurus, Aquarius, 40, "Taurus and Aquarius have different values but can learn from each other's perspectives."),
    (Taurus, Pisces, 85, "Taurus and Pisces create a dreamy, romantic relationship with shared emotional depth."),
];

pub fn matrix_entry(a: ZodiacSign, b: ZodiacSign) -> Option<(u32, &'static str)> {
    MATRIX
        .iter()
        .find(|(first, second, _, _)| *first == a && *second == b)
        .map(|&(_, _, score, tip)| (score, tip))
}

fn pair_key(a: ZodiacSign, b: ZodiacSign) -> String {
    format!("{}:{}", a.name().to_lowercase(), b.name().to_lowercase())
}

/// Fallback score in `[50, 90)` for a pair missing from the matrix.
pub fn fallback_score(a: ZodiacSign, b: ZodiacSign, policy: FallbackPolicy) -> u32 {
    let key = pair_key(a, b);
    let bits = match policy {
        FallbackPolicy::Deterministic => {
            let digest = Sha256::digest(key.as_bytes());
            let mut prefix = [0u8; 8];
            prefix.copy_from_slice(&digest[..8]);
            u64::from_be_bytes(prefix)
        }
        FallbackPolicy::Random => RandomState::new().hash_one(&key),
    };
    FALLBACK_MIN + (bits % u64::from(FALLBACK_SPAN)) as u32
}

pub fn level_label(score: u32) -> &'static str {
    if score >= 80 {
        "Excellent Match"
    } else if score >= 60 {
        "Good Match"
    } else {
        "Challenging Match"
    }
}

pub fn element_note(a: Element, b: Element) -> &'static str {
    use Element as E;
    match (a, b) {
        (E::Fire, E::Fire) => "High energy, potential conflicts",
        (E::Fire, E::Earth) => "Fire needs earth for grounding",
        (E::Fire, E::Air) => "Air fuels fire",
        (E::Fire, E::Water) => "Water can extinguish fire",
        (E::Earth, E::Fire) => "Earth provides stability for fire",
        (E::Earth, E::Earth) => "Strong foundation together",
        (E::Earth, E::Air) => "Earth can feel suffocated by air",
        (E::Earth, E::Water) => "Water nourishes earth",
        (E::Air, E::Fire) => "Air fuels fire",
        (E::Air, E::Earth) => "Air can feel restricted by earth",
        (E::Air, E::Air) => "Intellectual connection",
        (E::Air, E::Water) => "Air and water can be refreshing",
        (E::Water, E::Fire) => "Water can extinguish fire",
        (E::Water, E::Earth) => "Water nourishes earth",
        (E::Water, E::Air) => "Water and air can be refreshing",
        (E::Water, E::Water) => "Deep emotional connection",
    }
}

pub fn quality_note(a: Quality, b: Quality) -> &'static str {
    use Quality as Q;
    match (a, b) {
        (Q::Cardinal, Q::Cardinal) => "Both like to initiate, potential conflicts",
        (Q::Cardinal, Q::Fixed) => "Cardinal initiates, fixed maintains",
        (Q::Cardinal, Q::Mutable) => "Cardinal initiates, mutable adapts",
        (Q::Fixed, Q::Cardinal) => "Fixed maintains, cardinal initiates",
        (Q::Fixed, Q::Fixed) => "Both like stability, potential stubbornness",
        (Q::Fixed, Q::Mutable) => "Fixed maintains, mutable adapts",
        (Q::Mutable, Q::Cardinal) => "Mutable adapts, cardinal initiates",
        (Q::Mutable, Q::Fixed) => "Mutable adapts, fixed maintains",
        (Q::Mutable, Q::Mutable) => "Both adaptable, potential lack of direction",
    }
}

pub fn compatibility(a: ZodiacSign, b: ZodiacSign, policy: FallbackPolicy) -> CompatibilityResult {
    let (score, tip, source) = match matrix_entry(a, b) {
        Some((score, tip)) => (score, tip.to_string(), MatchSource::Matrix),
        None => {
            let score = fallback_score(a, b, policy);
            tracing::debug!("{}/{} not in matrix, {:?} fallback scored {}", a, b, policy, score);
            (
                score,
                format!(
                    "{} and {} create a unique relationship with potential for growth and understanding.",
                    a, b
                ),
                MatchSource::Fallback,
            )
        }
    };

    CompatibilityResult {
        sign_a: a,
        sign_b: b,
        score,
        tip,
        source,
        level: level_label(score),
        element_note: element_note(a.element(), b.element()),
        quality_note: quality_note(a.quality(), b.quality()),
    }
}

/// 100 for equal numbers, 10 points less per step of difference, never below 10.
pub fn number_compatibility(a: u32, b: u32) -> u32 {
    let diff = a.abs_diff(b);
    if diff >= 9 {
        10
    } else {
        100 - diff * 10
    }
}

fn interpretation(score: u32) -> &'static str {
    match score {
        90.. => "Excellent compatibility with strong potential for a harmonious relationship.",
        80..=89 => "Very good compatibility with good potential for a successful relationship.",
        70..=79 => "Good compatibility with moderate potential for a fulfilling relationship.",
        60..=69 => "Fair compatibility with some challenges but potential for growth.",
        50..=59 => "Moderate compatibility with significant differences to work through.",
        _ => "Challenging compatibility requiring significant effort and understanding.",
    }
}

pub fn numerology_compatibility(
    first: &NumerologyProfile,
    second: &NumerologyProfile,
) -> NumberCompatibility {
    let life_path = number_compatibility(first.life_path, second.life_path);
    let expression = number_compatibility(first.expression, second.expression);
    let pair = |a: Option<u32>, b: Option<u32>| Some(number_compatibility(a?, b?));
    let soul_urge = pair(first.soul_urge, second.soul_urge);
    let personality = pair(first.personality, second.personality);

    // average over the parts both people have
    let parts: Vec<u32> = [Some(life_path), Some(expression), soul_urge, personality]
        .into_iter()
        .flatten()
        .collect();
    let overall = (f64::from(parts.iter().sum::<u32>()) / parts.len() as f64).round() as u32;

    NumberCompatibility {
        overall,
        life_path,
        expression,
        soul_urge,
        personality,
        interpretation: interpretation(overall),
    }
}
