//! Google Gemini and Imagen REST client.
//!
//! One [`GeminiClient`] serves both storyboard collaborators:
//! - [`PromptEnhancer`] via the text model's `generateContent` method
//! - [`ImageSynthesizer`] via the image model's `predict` method
//!
//! Calls are made one at a time by the orchestrator. The client never retries;
//! the first failure is returned to the caller.
//!
//! # Example
//!
//! ```no_run
//! use storyboard_models::{GeminiClient, GeminiConfig};
//! use storyboard_interface::{ImageSynthesizer, PromptEnhancer};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = GeminiClient::from_env(GeminiConfig::default())?;
//! let prompt = client.enhance("A lone ship drifting between stars").await?;
//! let image = client.synthesize(&prompt).await?;
//! println!("{} bytes of {}", image.data().len(), image.mime());
//! # Ok(())
//! # }
//! ```

use std::env;
use std::time::Instant;

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use storyboard_core::GeneratedImage;
use storyboard_error::{
    GeminiError, GeminiErrorKind, HttpError, JsonError, StoryboardError, StoryboardResult,
};
use storyboard_interface::{ImageSynthesizer, PromptEnhancer, StoryboardDriver};

use super::dto::{
    ApiErrorBody, GenerateContentRequest, GenerateContentResponse, PredictRequest,
    PredictResponse,
};
use crate::{GeminiConfig, StoryboardMetrics};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Client for the Gemini text and Imagen image endpoints.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    config: GeminiConfig,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("text_model", self.config.text_model())
            .field("image_model", self.config.image_model())
            .field("base_url", self.config.base_url())
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a client reading the API key from `GEMINI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` if the variable is unset or blank.
    #[instrument(name = "gemini_client_from_env", skip(config))]
    pub fn from_env(config: GeminiConfig) -> StoryboardResult<Self> {
        let api_key = env::var(API_KEY_ENV).unwrap_or_default();
        Self::with_api_key(api_key, config)
    }

    /// Create a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` for a blank key, or `ClientCreation` if the
    /// HTTP client cannot be built.
    #[instrument(name = "gemini_client_with_api_key", skip_all)]
    pub fn with_api_key(
        api_key: impl Into<String>,
        config: GeminiConfig,
    ) -> StoryboardResult<Self> {
        let api_key = api_key.into().trim().to_string();
        if api_key.is_empty() {
            return Err(GeminiError::new(GeminiErrorKind::MissingApiKey).into());
        }

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| GeminiError::new(GeminiErrorKind::ClientCreation(e.to_string())))?;

        Ok(Self {
            client,
            api_key,
            config,
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// POST a JSON body and decode a JSON answer.
    async fn post_json<B, R>(&self, url: &str, body: &B) -> StoryboardResult<R>
    where
        B: Serialize + Sync,
        R: DeserializeOwned,
    {
        debug!(url = %url, "Sending Gemini API request");

        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| HttpError::new(format!("Request to {} failed: {}", url, e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| HttpError::new(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            let message = ApiErrorBody::message_from(&text);
            warn!(status = status.as_u16(), message = %message, "Gemini API returned an error");
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code: status.as_u16(),
                message,
            })
            .into());
        }

        serde_json::from_str(&text).map_err(|e| {
            StoryboardError::from(JsonError::new(format!(
                "Failed to parse Gemini response: {}",
                e
            )))
        })
    }

    async fn enhance_internal(&self, description: &str) -> StoryboardResult<String> {
        let model = self.config.text_model();
        let url = self.config.endpoint(model, "generateContent");
        let request =
            GenerateContentRequest::enhancement(self.config.enhancement_instruction(), description);

        let response: GenerateContentResponse = self.post_json(&url, &request).await?;

        if let Some(text) = response.text() {
            return Ok(text);
        }

        let kind = match response.block_reason() {
            Some(reason) => GeminiErrorKind::ApiRequest(format!("Prompt was blocked: {}", reason)),
            None => GeminiErrorKind::EmptyResponse(model.clone()),
        };
        Err(GeminiError::new(kind).into())
    }

    async fn synthesize_internal(&self, prompt: &str) -> StoryboardResult<GeneratedImage> {
        let model = self.config.image_model();
        let url = self.config.endpoint(model, "predict");
        let request = PredictRequest::single(prompt, self.config.aspect_ratio());

        let response: PredictResponse = self.post_json(&url, &request).await?;

        let Some(prediction) = response.first_image() else {
            let detail = match response.filtered_reason() {
                Some(reason) => format!("{}: {}", model, reason),
                None => model.clone(),
            };
            return Err(GeminiError::new(GeminiErrorKind::NoImageReturned(detail)).into());
        };

        decode_prediction(
            prediction.bytes_base64_encoded.as_deref().unwrap_or_default(),
            prediction.mime_type.as_deref(),
            self.config.image_mime_type(),
        )
    }
}

/// Decode a base64 image payload, defaulting the MIME type when the service omits it.
pub(crate) fn decode_prediction(
    encoded: &str,
    mime: Option<&str>,
    fallback_mime: &str,
) -> StoryboardResult<GeneratedImage> {
    let data = STANDARD
        .decode(encoded.trim())
        .map_err(|e| GeminiError::new(GeminiErrorKind::Base64Decode(e.to_string())))?;

    let mime = mime
        .filter(|mime| !mime.trim().is_empty())
        .unwrap_or(fallback_mime);

    Ok(GeneratedImage::new(mime, data))
}

/// Record request metrics for one collaborator call.
fn record_outcome<T>(
    operation: &str,
    model: &str,
    started: Instant,
    result: &StoryboardResult<T>,
) {
    let metrics = StoryboardMetrics::get();
    match result {
        Ok(_) => {
            metrics.record_request("gemini", model, operation, started.elapsed().as_secs_f64())
        }
        Err(e) => metrics.record_error("gemini", model, operation, crate::classify_error(e)),
    }
}

#[async_trait]
impl PromptEnhancer for GeminiClient {
    #[instrument(skip(self, description), fields(model = %self.config.text_model(), description_len = description.len()))]
    async fn enhance(&self, description: &str) -> StoryboardResult<String> {
        let started = Instant::now();
        let result = self.enhance_internal(description).await;
        record_outcome("enhance", self.config.text_model(), started, &result);
        result
    }
}

#[async_trait]
impl ImageSynthesizer for GeminiClient {
    #[instrument(skip(self, prompt), fields(model = %self.config.image_model(), prompt_len = prompt.len()))]
    async fn synthesize(&self, prompt: &str) -> StoryboardResult<GeneratedImage> {
        let started = Instant::now();
        let result = self.synthesize_internal(prompt).await;
        record_outcome("synthesize", self.config.image_model(), started, &result);
        result
    }
}

impl StoryboardDriver for GeminiClient {
    fn provider_name(&self) -> &'static str {
        "gemini"
    }
}
