//! Test fixtures for request payloads

pub mod image_fixtures;

pub use image_fixtures::*;
