pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, Command};
pub use crate::config::TomlConfig;

pub use crate::adapters::OutputFormat;
pub use crate::core::engine::ReadingEngine;
pub use crate::domain::model::{BirthDate, BirthProfile, CompatibilityResult, Reading, ZodiacSign};
pub use crate::domain::ports::{EngineSettings, FallbackPolicy, LetterSystem, SettingsProvider, YPolicy};
pub use crate::utils::error::{Result, SecretsError};
