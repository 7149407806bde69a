use crate::adapters::output::OutputFormat;
use crate::domain::ports::{EngineSettings, FallbackPolicy, LetterSystem, SettingsProvider, YPolicy};
use crate::utils::error::{Result, SecretsError};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// File-based configuration. Every section is optional and falls back to the
/// engine defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub engine: EngineSettings,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        tracing::debug!("Loaded config file {}", path.as_ref().display());
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content)?;

        toml::from_str(&processed).map_err(|e| SecretsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SecretsError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("logging.level", &self.logging.level)?;
        validate_one_of("logging.level", &self.logging.level, &LOG_LEVELS)?;
        Ok(())
    }
}

impl SettingsProvider for TomlConfig {
    fn letter_system(&self) -> LetterSystem {
        self.engine.letter_system
    }

    fn y_policy(&self) -> YPolicy {
        self.engine.y_policy
    }

    fn fallback_policy(&self) -> FallbackPolicy {
        self.engine.fallback
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[engine]
letter_system = "chaldean"
y_policy = "contextual"
fallback = "random"

[output]
format = "csv"

[logging]
level = "debug"
format = "json"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.letter_system(), LetterSystem::Chaldean);
        assert_eq!(config.y_policy(), YPolicy::Contextual);
        assert_eq!(config.fallback_policy(), FallbackPolicy::Random);
        assert_eq!(config.output.format, OutputFormat::Csv);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config = TomlConfig::from_toml_str("[engine]\nletter_system = \"chaldean\"\n").unwrap();
        assert_eq!(config.engine.y_policy, YPolicy::Consonant);
        assert_eq!(config.engine.fallback, FallbackPolicy::Deterministic);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.logging, LoggingConfig::default());

        assert_eq!(TomlConfig::from_toml_str("").unwrap(), TomlConfig::default());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("DAILY_SECRETS_TEST_SYSTEM", "chaldean");

        let toml_content = r#"
[engine]
letter_system = "${DAILY_SECRETS_TEST_SYSTEM}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.engine.letter_system, LetterSystem::Chaldean);

        std::env::remove_var("DAILY_SECRETS_TEST_SYSTEM");
    }

    #[test]
    fn test_unset_variables_are_left_verbatim() {
        let toml_content = r#"
[logging]
level = "${DAILY_SECRETS_SURELY_UNSET_VAR}"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.logging.level, "${DAILY_SECRETS_SURELY_UNSET_VAR}");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_enum_value_is_a_parse_error() {
        let result = TomlConfig::from_toml_str("[engine]\nletter_system = \"kabbalah\"\n");
        assert!(matches!(
            result,
            Err(SecretsError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        match config.validate() {
            Err(SecretsError::InvalidConfigValueError { field, .. }) => {
                assert_eq!(field, "logging.level")
            }
            other => panic!("expected InvalidConfigValueError, got {:?}", other),
        }
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[output]\nformat = \"csv\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Csv);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = TomlConfig::from_file(dir.path().join("absent.toml"));
        assert!(matches!(result, Err(SecretsError::IoError(_))));
    }
}
