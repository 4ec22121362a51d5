//! Text-generation service used to draft release notes.

pub mod huggingface;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::TextGenError;

pub use huggingface::{DEFAULT_MODEL_URL, HuggingFaceClient};

/// Sampling parameters sent with every drafting request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParams {
    pub max_length: u32,
    pub temperature: f32,
    pub do_sample: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_length: 500,
            temperature: 0.7,
            do_sample: true,
        }
    }
}

/// A service that turns a prompt into generated text.
///
/// This abstraction allows mocking the service in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate text for the prompt. Implementations return
    /// `TextGenError::EmptyResponse` rather than an empty string.
    async fn generate(&self, prompt: &str, params: &GenerationParams)
    -> Result<String, TextGenError>;
}
