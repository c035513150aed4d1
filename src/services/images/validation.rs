use crate::config::ImageRequestConfig;
use crate::errors::{OpenAIError, OpenAIResult, ValidationError};
use crate::services::images::{ImageGenerationRequest, KNOWN_STYLES};

pub struct ImageRequestValidator;

impl ImageRequestValidator {
    pub fn validate(request: &ImageGenerationRequest) -> OpenAIResult<()> {
        Self::validate_with(request, &ImageRequestConfig::default())
    }

    pub fn validate_with(
        request: &ImageGenerationRequest,
        config: &ImageRequestConfig,
    ) -> OpenAIResult<()> {
        Self::check(request, config).map_err(|err| {
            tracing::debug!(field = err.field(), error = %err, "rejected image generation request");
            OpenAIError::Validation(err)
        })
    }

    fn check(
        request: &ImageGenerationRequest,
        config: &ImageRequestConfig,
    ) -> Result<(), ValidationError> {
        if request.prompt.is_empty() {
            return Err(ValidationError::MissingRequiredField("prompt".to_string()));
        }

        // Length is counted in characters, not bytes.
        let prompt_len = request.prompt.chars().count();
        if prompt_len > config.max_prompt_length {
            return Err(ValidationError::PromptTooLong {
                max: config.max_prompt_length,
                actual: prompt_len,
            });
        }

        if request.model.is_empty() {
            return Err(ValidationError::MissingRequiredField("model".to_string()));
        }

        if let Some(n) = request.n {
            if n == 0 || n > config.max_images {
                return Err(ValidationError::ValueOutOfRange {
                    field: "n".to_string(),
                    min: "1".to_string(),
                    max: config.max_images.to_string(),
                    value: n.to_string(),
                });
            }
        }

        if !KNOWN_STYLES.contains(&request.style.as_str()) {
            return Err(ValidationError::InvalidValue {
                field: "style".to_string(),
                value: request.style.clone(),
                expected: format!("one of {}", KNOWN_STYLES.join(", ")),
            });
        }

        if let Some(user) = &request.user {
            if user.is_empty() {
                return Err(ValidationError::InvalidParameter {
                    parameter: "user".to_string(),
                    reason: "must not be empty when provided".to_string(),
                });
            }
        }

        Ok(())
    }
}
