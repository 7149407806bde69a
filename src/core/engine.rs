use crate::core::{compatibility, numerology, zodiac};
use crate::domain::model::{
    BirthDate, BirthProfile, CompatibilityResult, NumberCompatibility, NumerologyProfile, Reading, ZodiacSign,
};
use crate::domain::ports::SettingsProvider;
use crate::utils::error::Result;
use chrono::{Local, NaiveDate};

/// Computes readings from birth data. Holds nothing but its settings, so one
/// engine can serve any number of threads.
pub struct ReadingEngine<S: SettingsProvider> {
    settings: S,
}

impl<S: SettingsProvider> ReadingEngine<S> {
    pub fn new(settings: S) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    pub fn read(&self, profile: &BirthProfile) -> Result<Reading> {
        self.read_on(profile, Local::now().date_naive())
    }

    /// Like [`read`](Self::read) with an explicit "today" for the personal cycles.
    pub fn read_on(&self, profile: &BirthProfile, on: NaiveDate) -> Result<Reading> {
        let date = &profile.birth_date;
        tracing::debug!("Reading for {} (named: {})", date, profile.full_name.is_some());

        // an empty or letterless name fails the whole reading; a name missing
        // vowels or consonants only leaves those numbers out
        let numerology = match profile.full_name.as_deref() {
            Some(name) => Some(self.numerology(name, date)?),
            None => None,
        };

        let zodiac = zodiac::classify(date);
        let reading = Reading {
            birth_date: *date,
            life_path: numerology::life_path(date),
            birthday: numerology::birthday_number(date.day()),
            personal_cycles: numerology::personal_cycles(date, on),
            zodiac,
            numerology,
        };

        tracing::info!(
            "Reading ready: {} / {:?} {:?}, life path {}",
            reading.zodiac.western.name,
            reading.zodiac.chinese.element,
            reading.zodiac.chinese.animal,
            reading.life_path
        );
        Ok(reading)
    }

    pub fn numerology(
        &self,
        full_name: &str,
        date: &BirthDate,
    ) -> Result<NumerologyProfile> {
        numerology::numerology_profile(full_name, date, &self.settings)
    }

    pub fn compatibility(&self, a: ZodiacSign, b: ZodiacSign) -> CompatibilityResult {
        let result = compatibility::compatibility(a, b, self.settings.fallback_policy());
        tracing::info!("Compatibility {} -> {}: {} ({:?})", a, b, result.score, result.source);
        result
    }

    pub fn compatibility_by_name(&self, a: &str, b: &str) -> Result<CompatibilityResult> {
        let first: ZodiacSign = a.parse()?;
        let second: ZodiacSign = b.parse()?;
        Ok(self.compatibility(first, second))
    }

    pub fn numerology_compatibility(
        &self,
        first: &BirthProfile,
        second: &BirthProfile,
    ) -> Result<NumberCompatibility> {
        let profile_of = |p: &BirthProfile| -> Result<NumerologyProfile> {
            let name = p.full_name.as_deref().unwrap_or_default();
            self.numerology(name, &p.birth_date)
        };
        Ok(compatibility::numerology_compatibility(
            &profile_of(first)?,
            &profile_of(second)?,
        ))
    }
}
