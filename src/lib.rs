pub mod config;
pub mod errors;
pub mod services;
pub mod types;

#[cfg(test)]
pub mod fixtures;

pub use config::ImageRequestConfig;
pub use errors::{OpenAIError, OpenAIResult};
pub use types::WireLiteral;

pub use services::images::{
    ImageGenerationOptions, ImageGenerationRequest, ImageRequestValidator, ImageResponseFormat,
    ImageSize,
};

pub mod prelude {
    pub use crate::config::ImageRequestConfig;
    pub use crate::errors::{OpenAIError, OpenAIResult};
    pub use crate::types::WireLiteral;
    pub use crate::services::images::{
        ImageGenerationOptions, ImageGenerationRequest, ImageRequestValidator,
        ImageResponseFormat, ImageSize,
    };
}
