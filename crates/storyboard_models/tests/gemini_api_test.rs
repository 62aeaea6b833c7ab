//! Live Gemini API tests.
//!
//! Run with `cargo test -p storyboard_models --features api` and
//! `GEMINI_API_KEY` set (a `.env` file is honored).

use storyboard_interface::{ImageSynthesizer, PromptEnhancer};
use storyboard_models::{GeminiClient, GeminiConfig};

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_enhance_returns_prompt() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let client = GeminiClient::from_env(GeminiConfig::default())?;

    let prompt = client
        .enhance("A rain-soaked alley lit by a single neon sign")
        .await?;

    assert!(!prompt.trim().is_empty());
    Ok(())
}

#[tokio::test]
#[cfg_attr(not(feature = "api"), ignore)]
async fn test_synthesize_returns_image() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let client = GeminiClient::from_env(GeminiConfig::default())?;

    let image = client
        .synthesize("A watercolor lighthouse at dusk, wide shot")
        .await?;

    assert!(!image.data().is_empty());
    assert!(image.mime().starts_with("image/"));
    Ok(())
}
