//! Trait definitions for the storyboard generator's external collaborators.
//!
//! The orchestrator never talks to a network service directly. It calls a
//! [`PromptEnhancer`] to turn a scene description into an image prompt, then an
//! [`ImageSynthesizer`] to turn that prompt into image bytes.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::{ImageSynthesizer, PromptEnhancer, StoryboardDriver};
