//! Digit-reduction numerology.
//!
//! Every number passes through [`reduce`]. With master preservation on,
//! reduction stops at 11, 22 or 33 and that value is both the number and
//! the recorded master number; nothing reduces it further afterwards.

use crate::core::meanings;
use crate::domain::model::{BirthDate, Interpretations, NumerologyProfile, PersonalCycles};
use crate::domain::ports::{LetterSystem, SettingsProvider, YPolicy};
use crate::utils::error::{Result, SecretsError};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

const PYTHAGOREAN: [u32; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // A-I
    1, 2, 3, 4, 5, 6, 7, 8, 9, // J-R
    1, 2, 3, 4, 5, 6, 7, 8, // S-Z
];

const CHALDEAN: [u32; 26] = [
    1, 2, 3, 4, 5, 8, 3, 5, 1, // A-I
    1, 2, 3, 4, 5, 7, 8, 1, 2, // J-R
    3, 4, 6, 6, 6, 5, 1, 7, // S-Z
];

pub fn is_master(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reduction {
    pub value: u32,
    pub master: Option<u32>,
}

fn reduce_with(n: u32, preserve_master: bool) -> Reduction {
    let mut value = n;
    loop {
        if preserve_master && is_master(value) {
            return Reduction {
                value,
                master: Some(value),
            };
        }
        if value <= 9 {
            return Reduction {
                value,
                master: None,
            };
        }
        value = digit_sum(value);
    }
}

pub fn reduce(n: u32, preserve_master: bool) -> u32 {
    reduce_with(n, preserve_master).value
}

/// Reduction with master preservation, reporting the master number it stopped at.
pub fn reduce_traced(n: u32) -> Reduction {
    reduce_with(n, true)
}

pub fn master_numbers(values: &[u32]) -> BTreeSet<u32> {
    values
        .iter()
        .filter_map(|&v| reduce_traced(v).master)
        .collect()
}

fn year_digits(date: &BirthDate) -> u32 {
    // BirthDate guarantees a positive year
    date.year().unsigned_abs()
}

pub fn life_path(date: &BirthDate) -> u32 {
    let total = digit_sum(date.day()) + digit_sum(date.month()) + digit_sum(year_digits(date));
    let number = reduce(total, true);
    tracing::debug!("life path for {}: sum {} -> {}", date, total, number);
    number
}

pub fn birthday_number(day: u32) -> u32 {
    reduce(day, true)
}

pub fn maturity_number(life_path: u32, expression: u32) -> u32 {
    reduce(life_path + expression, true)
}

/// Difference of the fully reduced day and month, always 0..=8.
pub fn challenge_number(date: &BirthDate) -> u32 {
    reduce(date.day(), false).abs_diff(reduce(date.month(), false))
}

pub fn pinnacles(date: &BirthDate) -> [u32; 4] {
    let (day, month, year) = (date.day(), date.month(), year_digits(date));
    let first = reduce(day + month, true);
    let second = reduce(day + year, true);
    let third = reduce(first + second, true);
    let fourth = reduce(month + year, true);
    [first, second, third, fourth]
}

pub fn personal_cycles(date: &BirthDate, on: NaiveDate) -> PersonalCycles {
    let current_year = on.year().unsigned_abs();
    let year = reduce(date.month() + date.day() + current_year, true);
    let month = reduce(year + on.month(), true);
    let day = reduce(month + on.day(), true);
    PersonalCycles {
        on,
        year,
        month,
        day,
    }
}

pub fn lucky_numbers(life_path: u32, expression: u32) -> Vec<u32> {
    [
        life_path,
        expression,
        life_path + expression,
        life_path.abs_diff(expression),
    ]
    .into_iter()
    .filter(|&n| n > 0)
    .collect()
}

fn is_plain_vowel(c: char) -> bool {
    matches!(c, 'A' | 'E' | 'I' | 'O' | 'U')
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Letter {
    ch: char,
    vowel: bool,
}

/// Name-based numbers for one letter system and Y policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NameNumbers {
    system: LetterSystem,
    y_policy: YPolicy,
}

impl NameNumbers {
    pub fn new(system: LetterSystem, y_policy: YPolicy) -> Self {
        Self { system, y_policy }
    }

    pub fn from_settings<S: SettingsProvider + ?Sized>(settings: &S) -> Self {
        Self::new(settings.letter_system(), settings.y_policy())
    }

    pub fn letter_value(&self, letter: char) -> u32 {
        let upper = letter.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return 0;
        }
        let index = (upper as u8 - b'A') as usize;
        match self.system {
            LetterSystem::Pythagorean => PYTHAGOREAN[index],
            LetterSystem::Chaldean => CHALDEAN[index],
        }
    }

    fn letters(&self, name: &str) -> Result<Vec<Letter>> {
        if name.trim().is_empty() {
            return Err(SecretsError::invalid_name("name is empty"));
        }

        let mut letters = Vec::new();
        for word in name.split(|c: char| !c.is_ascii_alphabetic()) {
            let chars: Vec<char> = word.chars().map(|c| c.to_ascii_uppercase()).collect();
            for (i, &ch) in chars.iter().enumerate() {
                let vowel = match ch {
                    'Y' => {
                        self.y_policy == YPolicy::Contextual
                            && !(i > 0 && is_plain_vowel(chars[i - 1]))
                            && !chars.get(i + 1).is_some_and(|&next| is_plain_vowel(next))
                    }
                    other => is_plain_vowel(other),
                };
                letters.push(Letter { ch, vowel });
            }
        }

        if letters.is_empty() {
            return Err(SecretsError::invalid_name("name contains no letters A-Z"));
        }
        Ok(letters)
    }

    /// `Ok(None)` when the name is usable but has no letter of the selected class.
    fn select<F>(&self, name: &str, keep: F) -> Result<Option<u32>>
    where
        F: Fn(&Letter) -> bool,
    {
        let letters = self.letters(name)?;
        let mut selected = letters.iter().filter(|l| keep(l)).peekable();
        if selected.peek().is_none() {
            return Ok(None);
        }
        let total: u32 = selected.map(|l| self.letter_value(l.ch)).sum();
        Ok(Some(reduce(total, true)))
    }

    fn sum<F>(&self, name: &str, keep: F, missing: &str) -> Result<u32>
    where
        F: Fn(&Letter) -> bool,
    {
        self.select(name, keep)?
            .ok_or_else(|| SecretsError::invalid_name(format!("name contains no {}", missing)))
    }

    pub fn expression(&self, name: &str) -> Result<u32> {
        self.sum(name, |_| true, "letters")
    }

    pub fn soul_urge(&self, name: &str) -> Result<u32> {
        self.sum(name, |l| l.vowel, "vowels")
    }

    pub fn personality(&self, name: &str) -> Result<u32> {
        self.sum(name, |l| !l.vowel, "consonants")
    }

    /// Soul urge, or `None` for a name without vowels.
    pub fn soul_urge_opt(&self, name: &str) -> Result<Option<u32>> {
        self.select(name, |l| l.vowel)
    }

    /// Personality, or `None` for a name without consonants.
    pub fn personality_opt(&self, name: &str) -> Result<Option<u32>> {
        self.select(name, |l| !l.vowel)
    }
}

pub fn expression_number(full_name: &str) -> Result<u32> {
    NameNumbers::default().expression(full_name)
}

pub fn soul_urge_number(full_name: &str) -> Result<u32> {
    NameNumbers::default().soul_urge(full_name)
}

pub fn personality_number(full_name: &str) -> Result<u32> {
    NameNumbers::default().personality(full_name)
}

pub fn numerology_profile<S: SettingsProvider + ?Sized>(
    full_name: &str,
    date: &BirthDate,
    settings: &S,
) -> Result<NumerologyProfile> {
    let names = NameNumbers::from_settings(settings);

    let life_path = life_path(date);
    let expression = names.expression(full_name)?;
    let soul_urge = names.soul_urge_opt(full_name)?;
    let personality = names.personality_opt(full_name)?;
    let birthday = birthday_number(date.day());
    let maturity = maturity_number(life_path, expression);

    let master_numbers = master_numbers(
        &[Some(life_path), Some(expression), soul_urge, personality, Some(birthday), Some(maturity)]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>(),
    );

    tracing::debug!(
        "numerology for {}: life path {}, expression {}, soul urge {:?}, personality {:?}",
        date,
        life_path,
        expression,
        soul_urge,
        personality
    );

    Ok(NumerologyProfile {
        letter_system: settings.letter_system(),
        life_path,
        expression,
        soul_urge,
        personality,
        birthday,
        maturity,
        challenge: challenge_number(date),
        pinnacles: pinnacles(date),
        lucky_numbers: lucky_numbers(life_path, expression),
        master_numbers,
        interpretations: Interpretations {
            life_path: meanings::life_path_meaning(life_path),
            expression: meanings::expression_meaning(expression),
            soul_urge: soul_urge.map(meanings::soul_urge_meaning),
            personality: personality.map(meanings::personality_meaning),
            life_path_keywords: meanings::number_keywords(life_path),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::EngineSettings;

    fn date(year: i32, month: u32, day: u32) -> BirthDate {
        BirthDate::from_ymd(year, month, day).unwrap()
    }

    #[test]
    fn test_digit_sum() {
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(7), 7);
        assert_eq!(digit_sum(1990), 19);
        assert_eq!(digit_sum(9999), 36);
    }

    #[test]
    fn test_reduce_stops_at_master_numbers() {
        assert_eq!(reduce(29, true), 11);
        assert_eq!(reduce(38, true), 11);
        assert_eq!(reduce(499, true), 22);
        assert_eq!(reduce(6999, true), 33);
        assert_eq!(reduce(49, true), 4);
    }

    #[test]
    fn test_reduce_without_master_preservation() {
        assert_eq!(reduce(29, false), 2);
        assert_eq!(reduce(38, false), 2);
        assert_eq!(reduce(11, false), 2);
        assert_eq!(reduce(99, false), 9);
    }

    #[test]
    fn test_reduce_is_identity_on_final_values() {
        for n in (1..=9).chain(MASTER_NUMBERS) {
            assert_eq!(reduce(n, true), n);
        }
    }

    #[test]
    fn test_reduce_traced_records_master() {
        assert_eq!(
            reduce_traced(38),
            Reduction {
                value: 11,
                master: Some(11)
            }
        );
        assert_eq!(
            reduce_traced(14),
            Reduction {
                value: 5,
                master: None
            }
        );
        assert_eq!(master_numbers(&[5, 11, 22, 11, 7]), BTreeSet::from([11, 22]));
    }

    #[test]
    fn test_life_path_worked_example() {
        assert_eq!(life_path(&date(1990, 11, 29)), 5);
    }

    #[test]
    fn test_life_path_ignores_input_formatting() {
        let a = BirthDate::parse("1990-11-29").unwrap();
        let b = BirthDate::parse("29.11.1990").unwrap();
        assert_eq!(life_path(&a), life_path(&b));
    }

    #[test]
    fn test_name_numbers_pythagorean() {
        assert_eq!(expression_number("John Smith").unwrap(), 8);
        assert_eq!(soul_urge_number("John Smith").unwrap(), 6);
        assert_eq!(personality_number("John Smith").unwrap(), 11);
        // case and punctuation do not matter
        assert_eq!(expression_number("  jOHN   o'SMITH-").unwrap(), expression_number("John O Smith").unwrap());
    }

    #[test]
    fn test_name_numbers_chaldean() {
        let names = NameNumbers::new(LetterSystem::Chaldean, YPolicy::Consonant);
        assert_eq!(names.expression("John Smith").unwrap(), 8);
        assert_eq!(names.soul_urge("John Smith").unwrap(), 8);
        assert_eq!(names.personality("John Smith").unwrap(), 9);
    }

    #[test]
    fn test_y_policy() {
        let consonant = NameNumbers::new(LetterSystem::Pythagorean, YPolicy::Consonant);
        let contextual = NameNumbers::new(LetterSystem::Pythagorean, YPolicy::Contextual);

        assert!(matches!(
            consonant.soul_urge("Lynn"),
            Err(SecretsError::InvalidName { .. })
        ));
        assert_eq!(contextual.soul_urge("Lynn").unwrap(), 7);
        assert_eq!(contextual.personality("Lynn").unwrap(), 4);
        // Y next to a vowel stays a consonant
        assert_eq!(contextual.soul_urge("Maya").unwrap(), consonant.soul_urge("Maya").unwrap());
    }

    #[test]
    fn test_invalid_names() {
        for name in ["", "   ", "\t\n", "1234", "--"] {
            assert!(matches!(
                expression_number(name),
                Err(SecretsError::InvalidName { .. })
            ));
        }
        assert!(matches!(
            personality_number("Aeiou"),
            Err(SecretsError::InvalidName { .. })
        ));
    }

    #[test]
    fn test_supplementary_numbers() {
        let d = date(1990, 11, 29);
        assert_eq!(birthday_number(29), 11);
        assert_eq!(maturity_number(5, 8), 4);
        assert_eq!(challenge_number(&d), 0);
        assert_eq!(pinnacles(&d), [4, 3, 7, 3]);
        assert_eq!(lucky_numbers(5, 8), vec![5, 8, 13, 3]);
        assert_eq!(lucky_numbers(4, 4), vec![4, 4, 8]);
    }

    #[test]
    fn test_personal_cycles_use_reference_date() {
        let on = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let cycles = personal_cycles(&date(1990, 11, 29), on);
        assert_eq!((cycles.year, cycles.month, cycles.day), (5, 6, 5));
        assert_eq!(cycles.on, on);
    }

    #[test]
    fn test_full_profile() {
        let profile =
            numerology_profile("John Smith", &date(1990, 11, 29), &EngineSettings::default())
                .unwrap();
        assert_eq!(profile.life_path, 5);
        assert_eq!(profile.expression, 8);
        assert_eq!(profile.soul_urge, Some(6));
        assert_eq!(profile.personality, Some(11));
        assert_eq!(profile.birthday, 11);
        assert_eq!(profile.maturity, 4);
        assert_eq!(profile.master_numbers, BTreeSet::from([11]));
        assert_eq!(profile.letter_system, LetterSystem::Pythagorean);
        assert!(profile.interpretations.life_path.contains("Adventurer"));
        assert_eq!(profile.interpretations.life_path_keywords, "Freedom, adventure, change");
    }

    #[test]
    fn test_profile_tolerates_missing_letter_class() {
        let settings = EngineSettings::default();
        let d = date(1990, 11, 29);

        let aoi = numerology_profile("Aoi", &d, &settings).unwrap();
        assert_eq!(aoi.expression, 7);
        assert_eq!(aoi.soul_urge, Some(7));
        assert_eq!(aoi.personality, None);
        assert!(aoi.interpretations.personality.is_none());

        let lynn = numerology_profile("Lynn", &d, &settings).unwrap();
        assert_eq!(lynn.soul_urge, None);
        assert_eq!(lynn.personality, Some(2));
        assert!(lynn.interpretations.soul_urge.is_none());

        // the direct calculations still refuse
        assert!(matches!(
            personality_number("Aoi"),
            Err(SecretsError::InvalidName { .. })
        ));
        assert!(matches!(
            numerology_profile("   ", &d, &settings),
            Err(SecretsError::InvalidName { .. })
        ));
    }
}
