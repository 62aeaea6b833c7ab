//! Writing finished storyboards to disk.
//!
//! Layout of an output directory:
//!
//! ```text
//! storyboard/
//! ├── scene_01.png
//! ├── scene_02.png
//! └── storyboard.json
//! ```

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use storyboard_core::StoryboardItem;
use storyboard_error::{JsonError, StorageError, StorageErrorKind, StoryboardResult};
use storyboard_orchestrator::{RunState, StoryboardSession};
use tracing::{debug, info, instrument};

/// Name of the manifest written next to the images.
pub const MANIFEST_FILE: &str = "storyboard.json";

/// One storyboard frame as recorded in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ManifestEntry {
    /// 1-based scene position in the run
    index: usize,
    /// Scene heading label
    label: String,
    /// Merged annotation text
    description: String,
    /// Prompt sent to the image model
    prompt: String,
    /// Image file name, relative to the manifest
    image_file: String,
    /// MIME type of the image file
    mime: String,
}

/// Contents of `storyboard.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct StoryboardManifest {
    /// Final run state
    state: RunState,
    /// Frames that were produced, in scene order
    items: Vec<ManifestEntry>,
}

/// Writes a session's images and manifest into a directory.
#[derive(Debug, Clone)]
pub struct StoryboardWriter {
    out_dir: PathBuf,
}

impl StoryboardWriter {
    /// Writer targeting `out_dir`, created on first write.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Output directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// File name for the item at 0-based `index`, e.g. `scene_01.png`.
    pub fn image_file_name(index: usize, item: &StoryboardItem) -> String {
        format!("scene_{:02}.{}", index + 1, item.image().file_extension())
    }

    /// Write every item in `session` plus the manifest.
    ///
    /// Failed sessions are written too, so finished frames survive a failed run.
    /// Frame files from an earlier run in the same directory are removed first;
    /// other files are left alone.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the directory or a file cannot be written.
    #[instrument(skip(self, session), fields(out_dir = %self.out_dir.display(), items = session.items().len()))]
    pub async fn write(&self, session: &StoryboardSession) -> StoryboardResult<StoryboardManifest> {
        tokio::fs::create_dir_all(&self.out_dir).await.map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                self.out_dir.display(),
                e
            )))
        })?;
        self.remove_stale_frames().await?;

        let mut entries = Vec::with_capacity(session.items().len());
        for (index, item) in session.items().iter().enumerate() {
            let image_file = Self::image_file_name(index, item);
            self.write_file(&image_file, item.image().data()).await?;
            debug!(file = %image_file, bytes = item.image().data().len(), "Wrote image");

            entries.push(ManifestEntry {
                index: index + 1,
                label: item.scene().label().to_string(),
                description: item.scene().description().to_string(),
                prompt: item.prompt().clone(),
                image_file,
                mime: item.image().mime().to_string(),
            });
        }

        let manifest = StoryboardManifest {
            state: session.state().clone(),
            items: entries,
        };
        let json = serde_json::to_vec_pretty(&manifest)
            .map_err(|e| JsonError::new(format!("Failed to serialize manifest: {}", e)))?;
        self.write_file(MANIFEST_FILE, &json).await?;

        info!(
            items = manifest.items.len(),
            path = %self.out_dir.join(MANIFEST_FILE).display(),
            "Storyboard written"
        );
        Ok(manifest)
    }

    /// Write through a temp file, then rename into place.
    async fn write_file(&self, name: &str, data: &[u8]) -> StoryboardResult<()> {
        let path = self.out_dir.join(name);
        let temp_path = path.with_extension("tmp");

        tokio::fs::write(&temp_path, data).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        if let Err(e) = tokio::fs::rename(&temp_path, &path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                path.display(),
                e
            )))
            .into());
        }

        Ok(())
    }

    /// Delete `scene_NN.*` files left by an earlier run.
    async fn remove_stale_frames(&self) -> StoryboardResult<()> {
        let read_error = |e: std::io::Error| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                self.out_dir.display(),
                e
            )))
        };

        let mut entries = tokio::fs::read_dir(&self.out_dir).await.map_err(read_error)?;
        while let Some(entry) = entries.next_entry().await.map_err(read_error)? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };
            if !is_frame_file(name) || !entry.file_type().await.map_err(read_error)?.is_file() {
                continue;
            }

            tokio::fs::remove_file(entry.path()).await.map_err(|e| {
                StorageError::new(StorageErrorKind::FileWrite(format!(
                    "{}: {}",
                    entry.path().display(),
                    e
                )))
            })?;
            debug!(file = %name, "Removed stale frame");
        }

        Ok(())
    }
}

/// Whether `name` looks like `scene_<digits>.<ext>`.
fn is_frame_file(name: &str) -> bool {
    name.strip_prefix("scene_")
        .and_then(|rest| rest.split_once('.'))
        .is_some_and(|(number, _)| {
            !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_file_names() {
        assert!(is_frame_file("scene_01.png"));
        assert!(is_frame_file("scene_123.tmp"));
        assert!(!is_frame_file("scene_.png"));
        assert!(!is_frame_file("scene_01"));
        assert!(!is_frame_file("scene_notes.txt"));
        assert!(!is_frame_file("storyboard.json"));
    }
}
