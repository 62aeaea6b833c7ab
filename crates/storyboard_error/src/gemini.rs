//! Gemini and Imagen error types.

/// Failure conditions when talking to the Gemini API.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GeminiErrorKind {
    /// API key not found in environment or configuration
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// Failed to build the HTTP client
    #[display("Failed to create Gemini client: {}", _0)]
    ClientCreation(String),
    /// Request could not be sent or the body could not be read
    #[display("Gemini API request failed: {}", _0)]
    ApiRequest(String),
    /// Non-success HTTP status with the body the service returned
    #[display("HTTP {} error: {}", status_code, message)]
    HttpError {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Text model answered without any text parts
    #[display("Gemini returned no text for model {}", _0)]
    EmptyResponse(String),
    /// Image model answered without an image payload
    #[display("Imagen returned no image for model {}", _0)]
    NoImageReturned(String),
    /// Image payload was not valid base64
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
}

/// Gemini error with source location tracking.
///
/// # Examples
///
/// ```
/// use storyboard_error::{GeminiError, GeminiErrorKind};
///
/// let err = GeminiError::new(GeminiErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Gemini Error: {} at line {} in {}", kind, line, file)]
pub struct GeminiError {
    /// The kind of error that occurred
    pub kind: GeminiErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GeminiError {
    /// Create a new GeminiError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GeminiErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Message suitable for showing to whoever started the run.
    ///
    /// Drops the source location so the text reads like the service's own
    /// complaint.
    pub fn user_message(&self) -> String {
        self.kind.to_string()
    }
}
