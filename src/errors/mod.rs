mod categories;
mod error;

pub use categories::{ConfigurationError, ValidationError};
pub use error::{OpenAIError, OpenAIResult};
