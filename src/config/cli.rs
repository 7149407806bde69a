use crate::adapters::output::OutputFormat;
use crate::config::toml_config::TomlConfig;
use crate::domain::ports::{FallbackPolicy, LetterSystem, SettingsProvider, YPolicy};
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "daily-secrets")]
#[command(version)]
#[command(about = "Western and Chinese zodiac, numerology and compatibility readings")]
pub struct CliConfig {
    /// TOML config file; flags given here override its values
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, global = true)]
    pub log_format: Option<LogFormat>,

    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[arg(long = "system", value_enum, global = true)]
    pub letter_system: Option<LetterSystem>,

    #[arg(long, value_enum, global = true)]
    pub y_policy: Option<YPolicy>,

    /// Scoring for sign pairs without a curated score. `deterministic` gives the
    /// same score on every run; `random` may differ between runs.
    #[arg(long, value_enum, global = true)]
    pub fallback: Option<FallbackPolicy>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Zodiac and numerology reading for one birth date
    Reading {
        /// YYYY-MM-DD, YYYY/MM/DD, YYYYMMDD or DD.MM.YYYY
        #[arg(long)]
        birth_date: String,

        /// Full name; enables the name-based numbers
        #[arg(long)]
        name: Option<String>,

        /// Reference day for the personal cycles (defaults to today)
        #[arg(long)]
        on: Option<String>,
    },
    /// Compatibility score for an ordered pair of western signs
    Compat { sign_a: String, sign_b: String },
    /// List the twelve western signs
    Signs,
}

impl CliConfig {
    /// Loads the `--config` file (or defaults) and lays the command-line flags over it.
    pub fn load_config(&self) -> Result<TomlConfig> {
        let file = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };
        let merged = self.apply_overrides(file);
        merged.validate()?;
        Ok(merged)
    }

    pub fn apply_overrides(&self, mut config: TomlConfig) -> TomlConfig {
        if let Some(system) = self.letter_system {
            config.engine.letter_system = system;
        }
        if let Some(policy) = self.y_policy {
            config.engine.y_policy = policy;
        }
        if let Some(fallback) = self.fallback {
            config.engine.fallback = fallback;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(log_format) = self.log_format {
            config.logging.format = log_format;
        }
        config
    }
}

impl SettingsProvider for CliConfig {
    fn letter_system(&self) -> LetterSystem {
        self.letter_system.unwrap_or_default()
    }

    fn y_policy(&self) -> YPolicy {
        self.y_policy.unwrap_or_default()
    }

    fn fallback_policy(&self) -> FallbackPolicy {
        self.fallback.unwrap_or_default()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        match &self.command {
            Command::Reading {
                birth_date, name, ..
            } => {
                validate_non_empty_string("birth_date", birth_date)?;
                if let Some(name) = name {
                    validate_non_empty_string("name", name)?;
                }
            }
            Command::Compat { sign_a, sign_b } => {
                validate_non_empty_string("sign_a", sign_a)?;
                validate_non_empty_string("sign_b", sign_b)?;
            }
            Command::Signs => {}
        }
        Ok(())
    }
}
