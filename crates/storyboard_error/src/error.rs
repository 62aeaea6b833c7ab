//! Top-level error wrapper types.

use crate::{ConfigError, GeminiError, GenerationError, HttpError, JsonError, StorageError};

/// Every error condition the storyboard crates can raise.
///
/// # Examples
///
/// ```
/// use storyboard_error::{StoryboardError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: StoryboardError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StoryboardErrorKind {
    /// HTTP transport error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Gemini or Imagen service error
    #[from(GeminiError)]
    Gemini(GeminiError),
    /// Storyboard run could not start
    #[from(GenerationError)]
    Generation(GenerationError),
    /// Reading scripts or writing storyboards failed
    #[from(StorageError)]
    Storage(StorageError),
}

/// Storyboard error with kind discrimination.
///
/// # Examples
///
/// ```
/// use storyboard_error::{ConfigError, StoryboardResult};
///
/// fn might_fail() -> StoryboardResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Storyboard Error: {}", _0)]
pub struct StoryboardError(Box<StoryboardErrorKind>);

impl StoryboardError {
    /// Create a new error from a kind.
    pub fn new(kind: StoryboardErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StoryboardErrorKind {
        &self.0
    }

    /// The message a person running the storyboard should see.
    ///
    /// Strips wrapper prefixes and source locations, keeping only the
    /// underlying condition.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyboard_error::{GeminiError, GeminiErrorKind, StoryboardError};
    ///
    /// let err: StoryboardError = GeminiError::new(GeminiErrorKind::HttpError {
    ///     status_code: 429,
    ///     message: "quota exceeded".to_string(),
    /// })
    /// .into();
    /// assert_eq!(err.user_message(), "HTTP 429 error: quota exceeded");
    /// ```
    pub fn user_message(&self) -> String {
        match self.kind() {
            StoryboardErrorKind::Http(e) => e.message.clone(),
            StoryboardErrorKind::Json(e) => e.message.clone(),
            StoryboardErrorKind::Config(e) => e.message.clone(),
            StoryboardErrorKind::Gemini(e) => e.user_message(),
            StoryboardErrorKind::Generation(e) => e.kind.to_string(),
            StoryboardErrorKind::Storage(e) => e.kind.to_string(),
        }
    }
}

// Generic From implementation for any type that converts to StoryboardErrorKind
impl<T> From<T> for StoryboardError
where
    T: Into<StoryboardErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for storyboard operations.
pub type StoryboardResult<T> = std::result::Result<T, StoryboardError>;
