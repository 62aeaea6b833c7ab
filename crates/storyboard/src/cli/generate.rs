//! `storyboard generate` command handler.

use crate::cli::{GenerateOptions, load_script};
use std::path::Path;
use storyboard::{
    GeminiClient, StoryboardConfig, StoryboardDriver, StoryboardExecutor, StoryboardManifest,
    StoryboardResult, StoryboardWriter, TracingObserver,
};
use tracing::{info, instrument};

/// Run a full storyboard generation with Gemini and write the results.
#[instrument(skip_all, fields(out = %options.out.display()))]
pub async fn generate_storyboard(options: &GenerateOptions) -> StoryboardResult<()> {
    let script = load_script(&options.source).await?;

    let config = match &options.config {
        Some(path) => StoryboardConfig::from_file(path)?,
        None => StoryboardConfig::load()?,
    };

    let mut gemini = config.gemini().clone();
    if let Some(aspect_ratio) = &options.aspect_ratio {
        gemini = gemini.with_aspect_ratio(aspect_ratio);
    }

    let client = match &options.api_key {
        Some(key) => GeminiClient::with_api_key(key, gemini)?,
        None => GeminiClient::from_env(gemini)?,
    };

    let manifest = render_storyboard(client, &script, &options.out).await?;
    info!(
        frames = manifest.items().len(),
        out = %options.out.display(),
        "Storyboard ready"
    );
    Ok(())
}

/// Render `script` with `driver` and write everything produced into `out`.
///
/// Finished frames are written even when the run fails partway; the error is
/// returned afterwards.
pub async fn render_storyboard<D: StoryboardDriver>(
    driver: D,
    script: &str,
    out: &Path,
) -> StoryboardResult<StoryboardManifest> {
    let executor = StoryboardExecutor::new(driver).with_observer(Box::new(TracingObserver));
    let session = executor.execute(script).await;

    let manifest = StoryboardWriter::new(out).write(&session).await?;

    match session.into_parts() {
        (_, Some(error)) => Err(error),
        (_, None) => Ok(manifest),
    }
}
