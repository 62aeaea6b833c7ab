//! Finished storyboard entries.

use crate::{GeneratedImage, SceneDescriptor};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A scene after both collaborators have run on it.
///
/// # Examples
///
/// ```
/// use storyboard_core::{GeneratedImage, SceneDescriptor, StoryboardItem};
///
/// let scene = SceneDescriptor::new("1. A", "cat");
/// let item = StoryboardItem::from_scene(
///     scene,
///     "A tabby cat on a windowsill, golden hour",
///     GeneratedImage::png(vec![1, 2, 3]),
/// );
/// assert_eq!(item.scene().label(), "1. A");
/// assert_eq!(item.image().data(), &[1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct StoryboardItem {
    /// The parsed scene this item illustrates
    scene: SceneDescriptor,
    /// Prompt returned by the enhancement collaborator
    prompt: String,
    /// Image returned by the synthesis collaborator
    image: GeneratedImage,
}

impl StoryboardItem {
    /// Creates a new builder for `StoryboardItem`.
    pub fn builder() -> StoryboardItemBuilder {
        StoryboardItemBuilder::default()
    }

    /// Assemble an item from a scene and the outputs generated for it.
    pub fn from_scene(
        scene: SceneDescriptor,
        prompt: impl Into<String>,
        image: GeneratedImage,
    ) -> Self {
        Self {
            scene,
            prompt: prompt.into(),
            image,
        }
    }
}
