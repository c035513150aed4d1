//! Image generation request fixtures

use serde_json::json;

/// Wire body of a minimal dall-e-3 request with a custom size
pub fn image_request_cat_512() -> serde_json::Value {
    json!({
        "prompt": "a cat",
        "n": 1,
        "size": "512x512",
        "model": "dall-e-3",
        "style": "vivid",
        "response_format": "url"
    })
}

/// Wire body carrying every field, including the optional user
pub fn image_request_full() -> serde_json::Value {
    json!({
        "prompt": "A watercolor fox in a birch forest",
        "n": 4,
        "user": "user-1234",
        "size": "256x256",
        "model": "dall-e-2",
        "style": "natural",
        "response_format": "b64_json"
    })
}

/// Wire body with only the prompt present
pub fn image_request_prompt_only() -> serde_json::Value {
    json!({
        "prompt": "A lighthouse at dusk"
    })
}

/// Wire body with an out-of-set size literal
pub fn image_request_invalid_size() -> serde_json::Value {
    json!({
        "prompt": "a cat",
        "size": "999x999",
        "model": "dall-e-2"
    })
}

/// Wire body with an out-of-set response format literal
pub fn image_request_invalid_response_format() -> serde_json::Value {
    json!({
        "prompt": "a cat",
        "model": "dall-e-2",
        "response_format": "png"
    })
}
