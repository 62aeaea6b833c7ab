//! Encoding and decoding errors for API bodies and manifests.

/// A response or manifest could not be encoded or decoded.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// What went wrong
    pub message: String,
    /// Line number where the error was raised
    pub line: u32,
    /// Source file where the error was raised
    pub file: &'static str,
}

impl JsonError {
    /// Capture `message` together with the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyboard_error::JsonError;
    ///
    /// let err = JsonError::new("expected value at line 1 column 1");
    /// assert_eq!(err.message, "expected value at line 1 column 1");
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
