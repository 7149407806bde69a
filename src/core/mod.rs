pub mod compatibility;
pub mod engine;
pub mod meanings;
pub mod numerology;
pub mod zodiac;

pub use crate::domain::model::{BirthDate, BirthProfile, Reading, ZodiacSign};
pub use crate::domain::ports::{EngineSettings, SettingsProvider};
pub use crate::utils::error::Result;
