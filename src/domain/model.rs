use crate::domain::ports::LetterSystem;
use crate::utils::error::{Result, SecretsError};
use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A calendar birth date. Only dates that exist on the proleptic Gregorian
/// calendar between years 1 and 9999 can be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    pub const MIN_YEAR: i32 = 1;
    pub const MAX_YEAR: i32 = 9999;

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self> {
        let input = format!("{:04}-{:02}-{:02}", year, month, day);
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            SecretsError::invalid_birth_date(&input, "no such day in the calendar")
        })?;
        Self::from_naive(date).map_err(|_| {
            SecretsError::invalid_birth_date(
                input,
                format!("year must be between {} and {}", Self::MIN_YEAR, Self::MAX_YEAR),
            )
        })
    }

    pub fn from_naive(date: NaiveDate) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&date.year()) {
            return Err(SecretsError::invalid_birth_date(
                date.to_string(),
                format!("year must be between {} and {}", Self::MIN_YEAR, Self::MAX_YEAR),
            ));
        }
        Ok(Self(date))
    }

    /// Parses `YYYY-MM-DD`, `YYYY/MM/DD`, `YYYYMMDD`, `DD.MM.YYYY` or an
    /// RFC 3339 timestamp (only its date part is kept).
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(SecretsError::invalid_birth_date(input, "date is empty"));
        }

        if trimmed.len() == 8 && trimmed.bytes().all(|b| b.is_ascii_digit()) {
            let (year, month, day) = (&trimmed[0..4], &trimmed[4..6], &trimmed[6..8]);
            return match (year.parse(), month.parse(), day.parse()) {
                (Ok(y), Ok(m), Ok(d)) => Self::from_ymd(y, m, d)
                    .map_err(|e| SecretsError::invalid_birth_date(input, reason_of(&e))),
                _ => Err(SecretsError::invalid_birth_date(input, "unrecognised date format")),
            };
        }

        if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
            return Self::from_naive(timestamp.date_naive());
        }

        let mut last_reason = String::from("unrecognised date format");
        for format in ["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"] {
            match NaiveDate::parse_from_str(trimmed, format) {
                Ok(date) => {
                    return Self::from_naive(date)
                        .map_err(|e| SecretsError::invalid_birth_date(input, reason_of(&e)))
                }
                // the separator matched but the numbers did not form a real day
                Err(e) if e.kind() == chrono::format::ParseErrorKind::OutOfRange => {
                    last_reason = "no such day in the calendar".to_string();
                }
                Err(_) => {}
            }
        }

        Err(SecretsError::invalid_birth_date(input, last_reason))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }
}

fn reason_of(err: &SecretsError) -> String {
    match err {
        SecretsError::InvalidBirthDate { reason, .. } => reason.clone(),
        other => other.to_string(),
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for BirthDate {
    type Err = SecretsError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BirthDate {
    type Error = SecretsError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<BirthDate> for String {
    fn from(value: BirthDate) -> Self {
        value.to_string()
    }
}

/// Caller-supplied birth data. Time and place travel with the profile for the
/// caller's benefit; nothing in this crate reads them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthProfile {
    pub full_name: Option<String>,
    pub birth_date: BirthDate,
    pub birth_time: Option<String>,
    pub birth_place: Option<String>,
}

impl BirthProfile {
    pub fn new(birth_date: BirthDate) -> Self {
        Self {
            full_name: None,
            birth_date,
            birth_time: None,
            birth_place: None,
        }
    }

    pub fn with_name(mut self, full_name: impl Into<String>) -> Self {
        self.full_name = Some(full_name.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quality {
    Cardinal,
    Fixed,
    Mutable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WesternSign {
    pub sign: ZodiacSign,
    pub name: &'static str,
    pub symbol: &'static str,
    pub date_range: &'static str,
    pub element: Element,
    pub quality: Quality,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChineseAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChineseElement {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum YinYang {
    Yin,
    Yang,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChineseSign {
    pub year: i32,
    pub animal: ChineseAnimal,
    pub element: ChineseElement,
    pub yin_yang: YinYang,
    pub lucky_numbers: [u32; 3],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZodiacClassification {
    pub western: WesternSign,
    pub chinese: ChineseSign,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interpretations {
    pub life_path: &'static str,
    pub expression: &'static str,
    pub soul_urge: Option<&'static str>,
    pub personality: Option<&'static str>,
    pub life_path_keywords: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumerologyProfile {
    pub letter_system: LetterSystem,
    pub life_path: u32,
    pub expression: u32,
    /// `None` when the name has no vowels under the active Y policy.
    pub soul_urge: Option<u32>,
    /// `None` when the name has no consonants under the active Y policy.
    pub personality: Option<u32>,
    pub birthday: u32,
    pub maturity: u32,
    pub challenge: u32,
    pub pinnacles: [u32; 4],
    pub lucky_numbers: Vec<u32>,
    pub master_numbers: BTreeSet<u32>,
    pub interpretations: Interpretations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PersonalCycles {
    pub on: NaiveDate,
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchSource {
    Matrix,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityResult {
    pub sign_a: ZodiacSign,
    pub sign_b: ZodiacSign,
    pub score: u32,
    pub tip: String,
    pub source: MatchSource,
    pub level: &'static str,
    pub element_note: &'static str,
    pub quality_note: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NumberCompatibility {
    pub overall: u32,
    pub life_path: u32,
    pub expression: u32,
    /// `None` unless both names have vowels.
    pub soul_urge: Option<u32>,
    /// `None` unless both names have consonants.
    pub personality: Option<u32>,
    pub interpretation: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub birth_date: BirthDate,
    pub zodiac: ZodiacClassification,
    pub life_path: u32,
    pub birthday: u32,
    pub personal_cycles: PersonalCycles,
    pub numerology: Option<NumerologyProfile>,
}
