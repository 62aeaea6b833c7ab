//! Scene descriptors produced by the script parser.

use serde::{Deserialize, Serialize};

/// One scene worth illustrating: its heading plus the merged visual description.
///
/// Descriptors only exist for scenes that carried at least one description
/// annotation, so `description` is never empty. Identity is positional; two
/// scenes may share a label.
///
/// # Examples
///
/// ```
/// use storyboard_core::SceneDescriptor;
///
/// let scene = SceneDescriptor::new("1. EXT - FUTURE CITY - DAY", "Towers pierce the clouds.");
/// assert_eq!(scene.label(), "1. EXT - FUTURE CITY - DAY");
/// assert_eq!(scene.description(), "Towers pierce the clouds.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SceneDescriptor {
    /// Heading text without the surrounding asterisks
    label: String,
    /// Annotation fragments joined by single spaces
    description: String,
}

impl SceneDescriptor {
    /// Create a descriptor from a label and description.
    pub fn new(label: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            description: description.into(),
        }
    }

    /// Heading text, e.g. `"2. INT - CAFE - DAY"`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Merged visual description.
    pub fn description(&self) -> &str {
        &self.description
    }
}
