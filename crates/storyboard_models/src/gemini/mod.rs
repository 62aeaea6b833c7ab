//! Google Gemini collaborators.
//!
//! - [`GeminiClient`] - REST client implementing prompt enhancement and image synthesis
//! - Wire types for the `generateContent` and `predict` methods

mod client;
mod dto;

pub use client::{API_KEY_ENV, GeminiClient};
pub use dto::{
    ApiErrorBody, ApiErrorDetail, Candidate, Content, GenerateContentRequest,
    GenerateContentResponse, PredictInstance, PredictParameters, PredictParametersBuilder,
    PredictRequest, PredictResponse, Prediction, PromptFeedback, TextPart,
};
