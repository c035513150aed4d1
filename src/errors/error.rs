use crate::errors::categories::{ConfigurationError, ValidationError};
use thiserror::Error;

pub type OpenAIResult<T> = Result<T, OpenAIError>;

#[derive(Error, Debug)]
pub enum OpenAIError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl OpenAIError {
    pub fn is_validation_error(&self) -> bool {
        matches!(self, OpenAIError::Validation(_))
    }

    /// True when a restricted-value field received a literal outside its set.
    pub fn is_invalid_value(&self) -> bool {
        matches!(
            self,
            OpenAIError::Validation(ValidationError::InvalidValue { .. })
                | OpenAIError::Configuration(ConfigurationError::InvalidValue { .. })
        )
    }
}

impl From<serde_json::Error> for OpenAIError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            OpenAIError::Deserialization(err.to_string())
        } else {
            OpenAIError::Serialization(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_invalid_value() {
        let err = OpenAIError::Validation(ValidationError::InvalidValue {
            field: "response_format".to_string(),
            value: "png".to_string(),
            expected: "one of url, b64_json".to_string(),
        });
        assert!(err.is_invalid_value());
        assert!(err.is_validation_error());

        let missing = OpenAIError::Validation(ValidationError::MissingRequiredField(
            "prompt".to_string(),
        ));
        assert!(!missing.is_invalid_value());
    }

    #[test]
    fn test_from_serde_json_data_error() {
        let err = serde_json::from_str::<u32>("\"not a number\"").unwrap_err();
        let err: OpenAIError = err.into();
        assert!(matches!(err, OpenAIError::Deserialization(_)));
    }
}
