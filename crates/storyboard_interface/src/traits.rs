//! Collaborator traits consumed by the orchestrator.

use async_trait::async_trait;
use storyboard_core::GeneratedImage;
use storyboard_error::StoryboardResult;

/// Rewrites a terse scene description into a detailed image prompt.
#[async_trait]
pub trait PromptEnhancer: Send + Sync {
    /// Produce an image prompt for `description`.
    ///
    /// Fails with a service error on network, quota, or content problems.
    /// Implementations do not retry.
    async fn enhance(&self, description: &str) -> StoryboardResult<String>;
}

/// Renders an image prompt into image bytes.
#[async_trait]
pub trait ImageSynthesizer: Send + Sync {
    /// Generate one image for `prompt`.
    async fn synthesize(&self, prompt: &str) -> StoryboardResult<GeneratedImage>;
}

/// A provider offering both collaborator capabilities.
///
/// The orchestrator is generic over this trait. `Arc<T>` forwards to `T`, so
/// a shared driver can be handed to an executor and still inspected afterwards.
pub trait StoryboardDriver: PromptEnhancer + ImageSynthesizer {
    /// Provider name used in logs (e.g., "gemini").
    fn provider_name(&self) -> &'static str {
        "unknown"
    }
}

#[async_trait]
impl<T: PromptEnhancer + ?Sized> PromptEnhancer for std::sync::Arc<T> {
    async fn enhance(&self, description: &str) -> StoryboardResult<String> {
        (**self).enhance(description).await
    }
}

#[async_trait]
impl<T: ImageSynthesizer + ?Sized> ImageSynthesizer for std::sync::Arc<T> {
    async fn synthesize(&self, prompt: &str) -> StoryboardResult<GeneratedImage> {
        (**self).synthesize(prompt).await
    }
}

impl<T: StoryboardDriver + ?Sized> StoryboardDriver for std::sync::Arc<T> {
    fn provider_name(&self) -> &'static str {
        (**self).provider_name()
    }
}
