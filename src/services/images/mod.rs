mod types;
mod validation;


pub use types::{
    ImageGenerationOptions, ImageGenerationRequest, ImageResponseFormat, ImageSize,
    DEFAULT_MODEL, DEFAULT_NUM_IMAGES, KNOWN_STYLES, STYLE_NATURAL, STYLE_VIVID,
};
pub use validation::ImageRequestValidator;
