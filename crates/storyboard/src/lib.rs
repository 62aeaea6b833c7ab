//! Storyboard - annotated screenplays to illustrated storyboards.
//!
//! A script marks scenes with bold numbered headings and describes each shot
//! in bracketed annotations. The generator extracts one description per
//! scene, has a text model rewrite it into an image prompt, renders that
//! prompt with an image model, and collects the results in scene order.
//!
//! # Quick Start
//!
//! ```no_run
//! use storyboard::{GeminiClient, StoryboardConfig, StoryboardExecutor, StoryboardWriter};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StoryboardConfig::load()?;
//! let client = GeminiClient::from_env(config.gemini().clone())?;
//!
//! let session = StoryboardExecutor::new(client)
//!     .execute(storyboard::SAMPLE_SCRIPT)
//!     .await;
//!
//! StoryboardWriter::new("./storyboard").write(&session).await?;
//! session.into_result()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `storyboard_error` - Error types
//! - `storyboard_core` - Scene, image, and item types
//! - `storyboard_interface` - Collaborator traits
//! - `storyboard_script` - Script parser
//! - `storyboard_models` - Gemini and Imagen client, configuration, metrics
//! - `storyboard_orchestrator` - Sequential run state machine
//!
//! This crate re-exports everything for convenience and adds the on-disk
//! storyboard writer used by the `storyboard` binary.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod output;

pub use output::{MANIFEST_FILE, ManifestEntry, StoryboardManifest, StoryboardWriter};

pub use storyboard_core::*;
pub use storyboard_error::*;
pub use storyboard_interface::*;
pub use storyboard_models::{
    API_KEY_ENV, GeminiClient, GeminiConfig, StoryboardConfig, StoryboardMetrics, classify_error,
};
pub use storyboard_orchestrator::{
    GenerationPhase, RunObserver, RunState, StoryboardExecutor, StoryboardSession,
    TracingObserver,
};
pub use storyboard_script::{AnnotationTag, SAMPLE_SCRIPT, ScriptParser, parse_script};
