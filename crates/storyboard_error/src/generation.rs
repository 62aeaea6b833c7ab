//! Storyboard generation error types.

/// Guidance shown when a script yields no usable scenes.
pub const NO_SCENES_GUIDANCE: &str = "No valid scenes found. Ensure scenes start with **1. ...** and contain descriptions like [画面: ...].";

/// Conditions that stop a storyboard run before any collaborator is called.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum GenerationErrorKind {
    /// The parser found no heading with a recognized annotation
    #[display("{}", NO_SCENES_GUIDANCE)]
    NoScenes,
    /// The script was empty or whitespace only
    #[display("Script is empty")]
    EmptyScript,
}

/// Generation error with location tracking.
///
/// # Examples
///
/// ```
/// use storyboard_error::{GenerationError, GenerationErrorKind};
///
/// let err = GenerationError::new(GenerationErrorKind::NoScenes);
/// assert!(format!("{}", err).contains("No valid scenes found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The specific error condition
    pub kind: GenerationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new GenerationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
