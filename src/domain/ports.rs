use serde::{Deserialize, Serialize};

/// Letter-to-number table used for the name-based numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum LetterSystem {
    #[default]
    Pythagorean,
    Chaldean,
}

/// How the letter Y is classified for soul urge and personality numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum YPolicy {
    /// Y is always a consonant.
    #[default]
    Consonant,
    /// Y is a vowel when neither neighbouring letter in the same word is a vowel.
    Contextual,
}

/// Scoring for sign pairs that have no entry in the compatibility matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum FallbackPolicy {
    /// Score derived from a SHA-256 digest of the ordered pair; identical on every run.
    #[default]
    Deterministic,
    /// Score derived from a per-process random hasher; may differ between runs.
    /// The source is std's `RandomState`, a hash seeded once per process, not a
    /// random number generator.
    Random,
}

pub trait SettingsProvider: Send + Sync {
    fn letter_system(&self) -> LetterSystem;
    fn y_policy(&self) -> YPolicy;
    fn fallback_policy(&self) -> FallbackPolicy;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    #[serde(default)]
    pub letter_system: LetterSystem,
    #[serde(default)]
    pub y_policy: YPolicy,
    #[serde(default)]
    pub fallback: FallbackPolicy,
}

impl SettingsProvider for EngineSettings {
    fn letter_system(&self) -> LetterSystem {
        self.letter_system
    }

    fn y_policy(&self) -> YPolicy {
        self.y_policy
    }

    fn fallback_policy(&self) -> FallbackPolicy {
        self.fallback
    }
}

impl<T: SettingsProvider + ?Sized> SettingsProvider for &T {
    fn letter_system(&self) -> LetterSystem {
        (**self).letter_system()
    }

    fn y_policy(&self) -> YPolicy {
        (**self).y_policy()
    }

    fn fallback_policy(&self) -> FallbackPolicy {
        (**self).fallback_policy()
    }
}
