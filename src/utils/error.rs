use thiserror::Error;

#[derive(Error, Debug)]
pub enum TipError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Input error: {message}")]
    InputError { message: String },
}

pub type Result<T> = std::result::Result<T, TipError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Serialization,
    Configuration,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl TipError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TipError::IoError(_) => ErrorCategory::Io,
            TipError::SerializationError(_) => ErrorCategory::Serialization,
            TipError::ConfigValidationError { .. }
            | TipError::InvalidConfigValueError { .. }
            | TipError::MissingConfigError { .. } => ErrorCategory::Configuration,
            TipError::InputError { .. } => ErrorCategory::Input,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            TipError::IoError(_) => ErrorSeverity::Critical,
            TipError::SerializationError(_) => ErrorSeverity::High,
            TipError::ConfigValidationError { .. }
            | TipError::InvalidConfigValueError { .. }
            | TipError::MissingConfigError { .. } => ErrorSeverity::High,
            TipError::InputError { .. } => ErrorSeverity::Low,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            TipError::IoError(e) => format!("Could not read or write a file: {}", e),
            TipError::SerializationError(e) => format!("Could not render JSON output: {}", e),
            TipError::ConfigValidationError { field, message } => {
                format!("The '{}' setting is invalid: {}", field, message)
            }
            TipError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for '{}': {}", value, field, reason),
            TipError::MissingConfigError { field } => {
                format!("The '{}' setting is required but was not provided", field)
            }
            TipError::InputError { message } => format!("Could not process input: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            TipError::IoError(_) => {
                "Check that the path exists and is readable".to_string()
            }
            TipError::SerializationError(_) => {
                "Retry without --json, or report this as a bug".to_string()
            }
            TipError::ConfigValidationError { field, .. }
            | TipError::InvalidConfigValueError { field, .. } => {
                format!("Fix the '{}' value and run again (see --help)", field)
            }
            TipError::MissingConfigError { field } => {
                format!("Provide '{}' on the command line or in the defaults file", field)
            }
            TipError::InputError { .. } => {
                "Type 'help' to list the accepted commands".to_string()
            }
        }
    }
}
