//! Core data types for the storyboard generator.
//!
//! These are the values passed between the script parser, the image
//! collaborators, and the orchestrator. None of them carry behavior beyond
//! simple accessors and encoding helpers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod image;
mod item;
mod scene;

pub use image::{DEFAULT_IMAGE_MIME, GeneratedImage};
pub use item::{StoryboardItem, StoryboardItemBuilder};
pub use scene::SceneDescriptor;
