use thiserror::Error;

#[derive(Error, Debug)]
pub enum SecretsError {
    #[error("Invalid birth date '{input}': {reason}")]
    InvalidBirthDate { input: String, reason: String },

    #[error("Invalid name: {reason}")]
    InvalidName { reason: String },

    #[error("Unknown zodiac sign: {value}")]
    UnknownSign { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for a failure of this severity. Never 0.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl SecretsError {
    pub fn invalid_birth_date(input: impl Into<String>, reason: impl Into<String>) -> Self {
        SecretsError::InvalidBirthDate {
            input: input.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_name(reason: impl Into<String>) -> Self {
        SecretsError::InvalidName {
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            SecretsError::InvalidBirthDate { .. }
            | SecretsError::InvalidName { .. }
            | SecretsError::UnknownSign { .. } => ErrorCategory::Input,
            SecretsError::ConfigError { .. }
            | SecretsError::ConfigValidationError { .. }
            | SecretsError::InvalidConfigValueError { .. }
            | SecretsError::MissingConfigError { .. } => ErrorCategory::Configuration,
            SecretsError::IoError(_)
            | SecretsError::SerializationError(_)
            | SecretsError::CsvError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SecretsError::InvalidBirthDate { .. } => {
                "Use a real calendar date such as 1990-11-29 (YYYY-MM-DD)".to_string()
            }
            SecretsError::InvalidName { .. } => {
                "Provide the full birth name using the letters A-Z".to_string()
            }
            SecretsError::UnknownSign { .. } => format!(
                "Use one of: {}",
                crate::domain::model::ZodiacSign::ALL
                    .iter()
                    .map(|s| s.name().to_lowercase())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
            SecretsError::ConfigError { .. }
            | SecretsError::ConfigValidationError { .. }
            | SecretsError::InvalidConfigValueError { .. } => {
                "Check the configuration file and command line flags".to_string()
            }
            SecretsError::MissingConfigError { field } => {
                format!("Add '{}' to the configuration", field)
            }
            SecretsError::IoError(_) => "Check that the file exists and is readable".to_string(),
            SecretsError::SerializationError(_) | SecretsError::CsvError(_) => {
                "Try another output format".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SecretsError::InvalidBirthDate { input, .. } => {
                format!("'{}' is not a valid birth date", input)
            }
            SecretsError::InvalidName { reason } => format!("The name cannot be used: {}", reason),
            SecretsError::UnknownSign { value } => format!("'{}' is not a zodiac sign", value),
            SecretsError::MissingConfigError { field } => {
                format!("Configuration value '{}' is required", field)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SecretsError>;
