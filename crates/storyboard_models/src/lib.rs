//! Generative AI collaborators for the storyboard generator.
//!
//! Provides [`GeminiClient`], which implements both
//! [`PromptEnhancer`](storyboard_interface::PromptEnhancer) (Gemini text model)
//! and [`ImageSynthesizer`](storyboard_interface::ImageSynthesizer) (Imagen),
//! together with the configuration it reads and the metrics it records.
//!
//! # Example
//!
//! ```no_run
//! use storyboard_models::{GeminiClient, StoryboardConfig};
//! use storyboard_interface::PromptEnhancer;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StoryboardConfig::load()?;
//! let client = GeminiClient::from_env(config.gemini().clone())?;
//! let prompt = client.enhance("Rain on a neon street").await?;
//! println!("{}", prompt);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod gemini;
mod metrics;

pub use config::{GeminiConfig, StoryboardConfig};
pub use gemini::{
    API_KEY_ENV, ApiErrorBody, ApiErrorDetail, Candidate, Content, GeminiClient,
    GenerateContentRequest, GenerateContentResponse, PredictInstance, PredictParameters,
    PredictParametersBuilder, PredictRequest, PredictResponse, Prediction, PromptFeedback,
    TextPart,
};
pub use metrics::{StoryboardMetrics, classify_error};
