//! Screenplay parser for the storyboard generator.
//!
//! Scripts mark scenes with bold numbered headings and describe what should be
//! drawn with bracketed annotations:
//!
//! ```text
//! **1. EXT - FUTURE CITY - DAY**
//!
//! [画面：Towers pierce the clouds.]
//! [特写：A drone's lens, blinking.]
//! ```
//!
//! [`parse_script`] turns that into one [`SceneDescriptor`] per heading that
//! carries at least one recognized annotation. Parsing is pure and never fails.
//!
//! # Example
//!
//! ```
//! use storyboard_script::parse_script;
//!
//! let scenes = parse_script("**1. A**\n[画面：cat]\n**2. B**\n[画面：dog] extra [特写:close]");
//! assert_eq!(scenes.len(), 2);
//! assert_eq!(scenes[1].label(), "2. B");
//! assert_eq!(scenes[1].description(), "dog close");
//! ```
//!
//! [`SceneDescriptor`]: storyboard_core::SceneDescriptor

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod parser;
mod tag;

pub use parser::{ScriptParser, parse_script};
pub use tag::AnnotationTag;

/// The demo screenplay bundled with the generator.
pub const SAMPLE_SCRIPT: &str = include_str!("../assets/sample_script.md");
