//! Error types for the storyboard generator.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! Script parsing never fails, so nothing here describes malformed scripts.
//! Failures come from configuration, the remote image service, and the disk.
//!
//! # Examples
//!
//! ```
//! use storyboard_error::{StoryboardResult, HttpError};
//!
//! fn fetch_image() -> StoryboardResult<Vec<u8>> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! assert!(fetch_image().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod generation;
mod http;
mod json;
mod storage;

pub use config::ConfigError;
pub use error::{StoryboardError, StoryboardErrorKind, StoryboardResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use generation::{GenerationError, GenerationErrorKind, NO_SCENES_GUIDANCE};
pub use http::HttpError;
pub use json::JsonError;
pub use storage::{StorageError, StorageErrorKind};
