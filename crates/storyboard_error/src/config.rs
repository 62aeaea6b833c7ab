//! Configuration and parser setup errors.

/// Configuration files, overrides, or parser settings were rejected.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What went wrong
    pub message: String,
    /// Line number where the error was raised
    pub line: u32,
    /// Source file where the error was raised
    pub file: &'static str,
}

impl ConfigError {
    /// Capture `message` together with the caller's location.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyboard_error::ConfigError;
    ///
    /// let err = ConfigError::new("Missing [gemini] section");
    /// assert_eq!(err.message, "Missing [gemini] section");
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
