//! Transport errors from the remote image services.

/// Transport failure talking to Gemini or Imagen.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} at line {} in {}", message, line, file)]
pub struct HttpError {
    /// What went wrong
    pub message: String,
    /// Line number where the error was raised
    pub line: u32,
    /// Source file where the error was raised
    pub file: &'static str,
}

impl HttpError {
    /// Capture `message` together with the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyboard_error::HttpError;
    ///
    /// let err = HttpError::new("Connection refused");
    /// assert_eq!(err.message, "Connection refused");
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
