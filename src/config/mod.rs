//! Defaults and limits applied when building and validating image requests.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{ConfigurationError, OpenAIError, OpenAIResult};
use crate::services::images::{
    ImageGenerationOptions, ImageGenerationRequest, ImageResponseFormat, ImageSize,
    DEFAULT_MODEL, DEFAULT_NUM_IMAGES, STYLE_VIVID,
};

/// Maximum prompt length accepted by the images endpoint, in characters.
pub const MAX_PROMPT_LENGTH: usize = 1000;

/// Maximum number of images per request.
pub const MAX_IMAGES: u32 = 10;

pub const ENV_MODEL: &str = "OPENAI_IMAGE_MODEL";
pub const ENV_SIZE: &str = "OPENAI_IMAGE_SIZE";
pub const ENV_RESPONSE_FORMAT: &str = "OPENAI_IMAGE_RESPONSE_FORMAT";
pub const ENV_STYLE: &str = "OPENAI_IMAGE_STYLE";
pub const ENV_COUNT: &str = "OPENAI_IMAGE_COUNT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRequestConfig {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_style")]
    pub style: String,

    #[serde(default)]
    pub size: Option<ImageSize>,

    #[serde(default)]
    pub response_format: Option<ImageResponseFormat>,

    #[serde(default = "default_n")]
    pub n: Option<u32>,

    #[serde(default = "default_max_prompt_length")]
    pub max_prompt_length: usize,

    #[serde(default = "default_max_images")]
    pub max_images: u32,
}

impl Default for ImageRequestConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            style: default_style(),
            size: None,
            response_format: None,
            n: default_n(),
            max_prompt_length: default_max_prompt_length(),
            max_images: default_max_images(),
        }
    }
}

impl ImageRequestConfig {
    /// Creates a configuration from environment variables
    ///
    /// Reads the following environment variables, all optional:
    /// - OPENAI_IMAGE_MODEL
    /// - OPENAI_IMAGE_SIZE (e.g. 512x512)
    /// - OPENAI_IMAGE_RESPONSE_FORMAT (url or b64_json)
    /// - OPENAI_IMAGE_STYLE
    /// - OPENAI_IMAGE_COUNT
    pub fn from_env() -> OpenAIResult<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a caller-supplied lookup.
    pub fn from_env_with<F>(lookup: F) -> OpenAIResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(model) = lookup(ENV_MODEL) {
            config.model = model;
        }

        if let Some(size) = lookup(ENV_SIZE) {
            config.size = Some(parse_env(ENV_SIZE, &size)?);
        }

        if let Some(format) = lookup(ENV_RESPONSE_FORMAT) {
            config.response_format = Some(parse_env(ENV_RESPONSE_FORMAT, &format)?);
        }

        if let Some(style) = lookup(ENV_STYLE) {
            config.style = style;
        }

        if let Some(count) = lookup(ENV_COUNT) {
            config.n = Some(parse_env(ENV_COUNT, &count)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> OpenAIResult<()> {
        if self.max_prompt_length == 0 {
            return Err(invalid("max_prompt_length must be greater than zero"));
        }

        if self.max_images == 0 {
            return Err(invalid("max_images must be greater than zero"));
        }

        if let Some(n) = self.n {
            if n == 0 || n > self.max_images {
                return Err(invalid(format!(
                    "default n must be between 1 and {}, got {}",
                    self.max_images, n
                )));
            }
        }

        if self.model.is_empty() {
            tracing::warn!("image model is empty; requests will be rejected by the API");
        }

        Ok(())
    }

    /// Builds a request for `prompt` carrying the configured defaults.
    pub fn request(&self, prompt: impl Into<String>) -> ImageGenerationRequest {
        ImageGenerationRequest::with_options(
            prompt,
            self.model.clone(),
            ImageGenerationOptions {
                n: self.n,
                size: self.size,
                response_format: self.response_format,
                style: self.style.clone(),
                user: None,
            },
        )
    }
}

fn parse_env<T>(key: &str, value: &str) -> OpenAIResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| {
        OpenAIError::Configuration(ConfigurationError::InvalidValue {
            key: key.to_string(),
            reason: e.to_string(),
        })
    })
}

fn invalid(message: impl Into<String>) -> OpenAIError {
    OpenAIError::Configuration(ConfigurationError::InvalidConfiguration(message.into()))
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_style() -> String {
    STYLE_VIVID.to_string()
}

fn default_n() -> Option<u32> {
    Some(DEFAULT_NUM_IMAGES)
}

fn default_max_prompt_length() -> usize {
    MAX_PROMPT_LENGTH
}

fn default_max_images() -> u32 {
    MAX_IMAGES
}
