//! Script loading for CLI commands.

use crate::cli::ScriptSource;
use std::path::Path;
use storyboard::{
    GenerationError, GenerationErrorKind, SAMPLE_SCRIPT, StorageError, StorageErrorKind,
    StoryboardResult,
};
use tokio::io::AsyncReadExt;
use tracing::debug;

/// Read the script named by `source`.
///
/// # Errors
///
/// Fails if the file or stdin cannot be read, or if the script is blank.
pub async fn load_script(source: &ScriptSource) -> StoryboardResult<String> {
    let script = if source.sample {
        SAMPLE_SCRIPT.to_string()
    } else {
        match source.script.as_deref() {
            Some(path) if path == Path::new("-") => read_stdin().await?,
            Some(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            })?,
            None => read_stdin().await?,
        }
    };

    if script.trim().is_empty() {
        return Err(GenerationError::new(GenerationErrorKind::EmptyScript).into());
    }

    debug!(bytes = script.len(), "Loaded script");
    Ok(script)
}

async fn read_stdin() -> StoryboardResult<String> {
    let mut script = String::new();
    tokio::io::stdin()
        .read_to_string(&mut script)
        .await
        .map_err(|e| StorageError::new(StorageErrorKind::FileRead(format!("stdin: {}", e))))?;
    Ok(script)
}
