use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid parameter: {parameter} - {reason}")]
    InvalidParameter { parameter: String, reason: String },

    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    #[error("Invalid value for {field}: {value:?}, expected {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: String,
        max: String,
        value: String,
    },

    #[error("Prompt too long: max length is {max} characters, got {actual}")]
    PromptTooLong { max: usize, actual: usize },
}

impl ValidationError {
    /// Name of the offending request field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::InvalidParameter { parameter, .. } => parameter,
            ValidationError::MissingRequiredField(field) => field,
            ValidationError::InvalidValue { field, .. } => field,
            ValidationError::ValueOutOfRange { field, .. } => field,
            ValidationError::PromptTooLong { .. } => "prompt",
        }
    }
}
