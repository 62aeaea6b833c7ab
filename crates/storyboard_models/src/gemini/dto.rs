//! Wire types for the Gemini `generateContent` and Imagen `predict` methods.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A run of text inside a content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TextPart {
    /// Text payload; absent on non-text parts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A role-tagged list of parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Content {
    /// "user" or "model"; omitted for system instructions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Content parts
    #[serde(default)]
    pub parts: Vec<TextPart>,
}

impl Content {
    fn text(role: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            role: role.map(str::to_string),
            parts: vec![TextPart {
                text: Some(text.into()),
            }],
        }
    }
}

/// Body of a `generateContent` request.
///
/// # Examples
///
/// ```
/// use storyboard_models::GenerateContentRequest;
///
/// let request = GenerateContentRequest::enhancement("Write a prompt.", "A cat on a roof");
/// let json = serde_json::to_value(&request).unwrap();
/// assert_eq!(json["contents"][0]["parts"][0]["text"], "A cat on a roof");
/// assert_eq!(json["systemInstruction"]["parts"][0]["text"], "Write a prompt.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Instruction applied to the whole exchange
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
    /// Conversation turns
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    /// Single-turn request asking the model to rewrite `description` under `instruction`.
    pub fn enhancement(instruction: &str, description: &str) -> Self {
        let system_instruction = if instruction.trim().is_empty() {
            None
        } else {
            Some(Content::text(None, instruction))
        };

        Self {
            system_instruction,
            contents: vec![Content::text(Some("user"), description)],
        }
    }
}

/// One answer from the text model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// Generated content
    #[serde(default)]
    pub content: Option<Content>,
    /// Why generation stopped (e.g., "STOP", "SAFETY")
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Feedback about the prompt itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Set when the prompt was refused
    #[serde(default)]
    pub block_reason: Option<String>,
}

/// Body of a `generateContent` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// Candidate answers, best first
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    /// Present when the prompt was blocked
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

impl GenerateContentResponse {
    /// Concatenated, trimmed text of the first candidate, if any.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        let text = text.trim();

        if text.is_empty() {
            None
        } else {
            Some(text.to_string())
        }
    }

    /// Reason the prompt or the first candidate was refused, if it was.
    pub fn block_reason(&self) -> Option<&str> {
        if let Some(reason) = self
            .prompt_feedback
            .as_ref()
            .and_then(|feedback| feedback.block_reason.as_deref())
        {
            return Some(reason);
        }

        self.candidates
            .first()
            .and_then(|candidate| candidate.finish_reason.as_deref())
            .filter(|reason| !matches!(*reason, "STOP" | "MAX_TOKENS"))
    }
}

/// One prompt for the image model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictInstance {
    /// Image prompt
    pub prompt: String,
}

/// Sampling parameters for the image model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct PredictParameters {
    /// Number of images to generate
    #[builder(default = "1")]
    pub sample_count: u32,
    /// Aspect ratio such as "16:9"
    #[builder(default = "\"16:9\".to_string()")]
    pub aspect_ratio: String,
}

/// Body of an Imagen `predict` request.
///
/// # Examples
///
/// ```
/// use storyboard_models::PredictRequest;
///
/// let request = PredictRequest::single("A lighthouse at dusk", "16:9");
/// let json = serde_json::to_value(&request).unwrap();
/// assert_eq!(json["instances"][0]["prompt"], "A lighthouse at dusk");
/// assert_eq!(json["parameters"]["sampleCount"], 1);
/// assert_eq!(json["parameters"]["aspectRatio"], "16:9");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Prompts to render
    pub instances: Vec<PredictInstance>,
    /// Sampling parameters
    pub parameters: PredictParameters,
}

impl PredictRequest {
    /// Request exactly one image for `prompt`.
    pub fn single(prompt: &str, aspect_ratio: &str) -> Self {
        Self {
            instances: vec![PredictInstance {
                prompt: prompt.to_string(),
            }],
            parameters: PredictParameters {
                sample_count: 1,
                aspect_ratio: aspect_ratio.to_string(),
            },
        }
    }
}

/// One generated image, base64 encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Base64 image payload
    #[serde(default)]
    pub bytes_base64_encoded: Option<String>,
    /// MIME type of the payload
    #[serde(default)]
    pub mime_type: Option<String>,
    /// Set when the safety filter removed the image
    #[serde(default)]
    pub rai_filtered_reason: Option<String>,
}

/// Body of an Imagen `predict` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PredictResponse {
    /// Generated images
    #[serde(default)]
    pub predictions: Vec<Prediction>,
}

impl PredictResponse {
    /// First prediction that actually carries image bytes.
    pub fn first_image(&self) -> Option<&Prediction> {
        self.predictions
            .iter()
            .find(|prediction| prediction.bytes_base64_encoded.is_some())
    }

    /// First safety-filter reason reported, if any.
    pub fn filtered_reason(&self) -> Option<&str> {
        self.predictions
            .iter()
            .find_map(|prediction| prediction.rai_filtered_reason.as_deref())
    }
}

/// Error envelope returned with non-success statuses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    /// Error details
    pub error: ApiErrorDetail,
}

/// Details inside [`ApiErrorBody`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorDetail {
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Status name such as "RESOURCE_EXHAUSTED"
    #[serde(default)]
    pub status: Option<String>,
}

impl ApiErrorBody {
    /// Best human-readable message for an error body, falling back to the raw text.
    pub fn message_from(body: &str) -> String {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) if !parsed.error.message.is_empty() => match parsed.error.status {
                Some(status) => format!("{} ({})", parsed.error.message, status),
                None => parsed.error.message,
            },
            _ => body.trim().to_string(),
        }
    }
}
