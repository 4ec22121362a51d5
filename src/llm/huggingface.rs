//! Hugging Face Inference API client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{GenerationParams, TextGenerator};
use crate::error::TextGenError;

/// Default text-generation model endpoint.
pub const DEFAULT_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/microsoft/DialoGPT-large";

/// Maximum response body length kept in error messages.
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Inference API request body.
#[derive(Serialize, Debug)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParams,
}

/// A single generation result.
#[derive(Deserialize, Debug)]
struct GeneratedText {
    #[serde(default)]
    generated_text: Option<String>,
}

/// Object-shaped response: either a result or a service error.
#[derive(Deserialize, Debug)]
struct InferenceObject {
    #[serde(default)]
    generated_text: Option<String>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

/// The API answers with a list of results or with a single object.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
enum InferenceResponse {
    Batch(Vec<GeneratedText>),
    Single(InferenceObject),
}

/// Client for a Hugging Face text-generation model.
pub struct HuggingFaceClient {
    client: Client,
    token: String,
    model_url: String,
}

impl HuggingFaceClient {
    pub fn new(token: impl Into<String>, model_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            token: token.into(),
            model_url: model_url.into(),
        }
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceClient {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, TextGenError> {
        debug!(
            model_url = %self.model_url,
            prompt_len = prompt.len(),
            max_length = params.max_length,
            "Sending text generation request"
        );

        let response = self
            .client
            .post(&self.model_url)
            .bearer_auth(&self.token)
            .json(&InferenceRequest {
                inputs: prompt,
                parameters: params,
            })
            .send()
            .await
            .map_err(TextGenError::Request)?;

        let status = response.status();
        let body = response.text().await.map_err(TextGenError::Request)?;

        if !status.is_success() {
            return Err(TextGenError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_LENGTH).collect(),
            });
        }

        parse_inference_response(&body)
    }
}

/// Extract the generated text from an Inference API response body.
fn parse_inference_response(body: &str) -> Result<String, TextGenError> {
    let parsed: InferenceResponse = serde_json::from_str(body)
        .map_err(|e| TextGenError::InvalidResponse(e.to_string()))?;

    let text = match parsed {
        InferenceResponse::Single(InferenceObject {
            error: Some(error), ..
        }) => {
            let message = match error {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            return Err(TextGenError::Service(message));
        }
        InferenceResponse::Single(object) => object.generated_text,
        InferenceResponse::Batch(results) => {
            results.into_iter().next().and_then(|r| r.generated_text)
        }
    };

    match text {
        Some(text) if !text.is_empty() => Ok(text),
        _ => Err(TextGenError::EmptyResponse),
    }
}
