use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::{OpenAIResult, ValidationError};
use crate::types::{deserialize_literal, serialize_literal, WireLiteral};

pub const DEFAULT_MODEL: &str = "dall-e-2";
pub const DEFAULT_NUM_IMAGES: u32 = 1;

pub const STYLE_VIVID: &str = "vivid";
pub const STYLE_NATURAL: &str = "natural";
pub const KNOWN_STYLES: &[&str] = &[STYLE_VIVID, STYLE_NATURAL];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageSize {
    Size256,
    Size512,
    #[default]
    Size1024,
    Size1792x1024,
    Size1024x1792,
}

impl WireLiteral for ImageSize {
    const FIELD: &'static str = "size";
    const ALL: &'static [Self] = &[
        ImageSize::Size256,
        ImageSize::Size512,
        ImageSize::Size1024,
        ImageSize::Size1792x1024,
        ImageSize::Size1024x1792,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Size256 => "256x256",
            ImageSize::Size512 => "512x512",
            ImageSize::Size1024 => "1024x1024",
            ImageSize::Size1792x1024 => "1792x1024",
            ImageSize::Size1024x1792 => "1024x1792",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageResponseFormat {
    #[default]
    Url,
    B64Json,
}

impl WireLiteral for ImageResponseFormat {
    const FIELD: &'static str = "response_format";
    const ALL: &'static [Self] = &[ImageResponseFormat::Url, ImageResponseFormat::B64Json];

    fn as_str(&self) -> &'static str {
        match self {
            ImageResponseFormat::Url => "url",
            ImageResponseFormat::B64Json => "b64_json",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ImageResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ImageSize {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_literal(s)
    }
}

impl FromStr for ImageResponseFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_literal(s)
    }
}

impl Serialize for ImageSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_literal(self, serializer)
    }
}

impl<'de> Deserialize<'de> for ImageSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_literal(deserializer)
    }
}

impl Serialize for ImageResponseFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_literal(self, serializer)
    }
}

impl<'de> Deserialize<'de> for ImageResponseFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_literal(deserializer)
    }
}

/// Request body for `POST /images/generations`.
///
/// `size` and `response_format` may be left unset; they are written to the
/// wire as `1024x1024` and `url` respectively. `n` and `user` are omitted
/// from the wire when `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageGenerationRequest {
    /// Text description of the desired image(s), at most 1000 characters.
    pub prompt: String,

    /// Number of images to generate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,

    /// End-user identifier forwarded for abuse monitoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    #[serde(
        default,
        serialize_with = "crate::types::literal_or_default::serialize"
    )]
    pub size: Option<ImageSize>,

    #[serde(default = "default_model")]
    pub model: String,

    /// `vivid` or `natural`; only dall-e-3 honours it.
    #[serde(default = "default_style")]
    pub style: String,

    #[serde(
        default,
        serialize_with = "crate::types::literal_or_default::serialize"
    )]
    pub response_format: Option<ImageResponseFormat>,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_style() -> String {
    STYLE_VIVID.to_string()
}

/// Optional arguments of [`ImageGenerationRequest::with_options`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageGenerationOptions {
    pub n: Option<u32>,
    pub size: Option<ImageSize>,
    pub response_format: Option<ImageResponseFormat>,
    pub style: String,
    pub user: Option<String>,
}

impl Default for ImageGenerationOptions {
    fn default() -> Self {
        Self {
            n: Some(DEFAULT_NUM_IMAGES),
            size: None,
            response_format: None,
            style: default_style(),
            user: None,
        }
    }
}

impl Default for ImageGenerationRequest {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            n: Some(DEFAULT_NUM_IMAGES),
            user: None,
            size: None,
            model: default_model(),
            style: default_style(),
            response_format: None,
        }
    }
}

impl PartialEq for ImageGenerationRequest {
    fn eq(&self, other: &Self) -> bool {
        self.prompt == other.prompt
            && self.n == other.n
            && self.user == other.user
            && self.effective_size() == other.effective_size()
            && self.model == other.model
            && self.style == other.style
            && self.effective_response_format() == other.effective_response_format()
    }
}

impl Eq for ImageGenerationRequest {}

impl ImageGenerationRequest {
    pub fn new(prompt: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_options(prompt, model, ImageGenerationOptions::default())
    }

    pub fn with_options(
        prompt: impl Into<String>,
        model: impl Into<String>,
        options: ImageGenerationOptions,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            n: options.n,
            user: options.user,
            size: Some(options.size.unwrap_or_default()),
            model: model.into(),
            style: options.style,
            response_format: Some(options.response_format.unwrap_or_default()),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_n(mut self, n: Option<u32>) -> Self {
        self.n = n;
        self
    }

    pub fn with_size(mut self, size: ImageSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_response_format(mut self, response_format: ImageResponseFormat) -> Self {
        self.response_format = Some(response_format);
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Size that will be sent, falling back to `1024x1024` when unset.
    pub fn effective_size(&self) -> ImageSize {
        self.size.unwrap_or_default()
    }

    /// Response format that will be sent, falling back to `url` when unset.
    pub fn effective_response_format(&self) -> ImageResponseFormat {
        self.response_format.unwrap_or_default()
    }

    pub fn to_json(&self) -> OpenAIResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_value(&self) -> OpenAIResult<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Decodes a request body. An out-of-set `size` or `response_format`
    /// literal is reported as [`ValidationError::InvalidValue`].
    pub fn from_json(json: &str) -> OpenAIResult<Self> {
        let body: serde_json::Value = serde_json::from_str(json)?;
        check_literal::<ImageSize>(&body)?;
        check_literal::<ImageResponseFormat>(&body)?;

        serde_json::from_value(body).map_err(|e| {
            tracing::debug!(error = %e, "failed to decode image generation request");
            e.into()
        })
    }
}

fn check_literal<T: WireLiteral>(body: &serde_json::Value) -> Result<(), ValidationError> {
    match body.get(T::FIELD) {
        Some(serde_json::Value::String(raw)) => T::parse_literal(raw).map(|_| ()).map_err(|err| {
            tracing::debug!(field = T::FIELD, value = %raw, "unrecognized literal in image request");
            err
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_generation_request() {
        let request = ImageGenerationRequest::new("A cat", "dall-e-3")
            .with_size(ImageSize::Size1792x1024)
            .with_style(STYLE_NATURAL);

        assert_eq!(request.prompt, "A cat");
        assert_eq!(request.model, "dall-e-3");
        assert_eq!(request.n, Some(1));
        assert_eq!(request.size, Some(ImageSize::Size1792x1024));
        assert_eq!(request.response_format, Some(ImageResponseFormat::Url));
        assert_eq!(request.style, "natural");
    }

    #[test]
    fn test_default_request_leaves_restricted_fields_unset() {
        let request = ImageGenerationRequest::default();

        assert!(request.prompt.is_empty());
        assert_eq!(request.n, Some(1));
        assert_eq!(request.model, "dall-e-2");
        assert_eq!(request.style, "vivid");
        assert_eq!(request.size, None);
        assert_eq!(request.response_format, None);
        assert_eq!(request.effective_size(), ImageSize::Size1024);
        assert_eq!(request.effective_response_format(), ImageResponseFormat::Url);
    }

    #[test]
    fn test_size_display_uses_wire_literal() {
        assert_eq!(ImageSize::Size1024x1792.to_string(), "1024x1792");
        assert_eq!(ImageSize::Size256.as_str(), "256x256");
    }

    #[test]
    fn test_unset_equals_explicit_default() {
        let unset = ImageGenerationRequest::default();
        let explicit = ImageGenerationRequest::default()
            .with_size(ImageSize::Size1024)
            .with_response_format(ImageResponseFormat::Url);
        assert_eq!(unset, explicit);

        let other = ImageGenerationRequest::default().with_size(ImageSize::Size512);
        assert_ne!(unset, other);
    }
}
