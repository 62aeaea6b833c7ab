//! Scene segmentation and annotation extraction.

use crate::AnnotationTag;
use regex::Regex;
use std::sync::LazyLock;
use storyboard_core::SceneDescriptor;
use storyboard_error::{ConfigError, StoryboardResult};
use tracing::{debug, instrument};

/// `**<digits>.<text>**` on a single line. The label is capture group 1.
const HEADING_PATTERN: &str = r"\*\*\s*([0-9]+\..*?)\s*\*\*";

static DEFAULT_PARSER: LazyLock<ScriptParser> = LazyLock::new(ScriptParser::new);

/// Parse a script with the default tag vocabulary.
///
/// Returns scenes in source order. Scenes without a recognized annotation are
/// left out, as is any text before the first heading. Empty input, or input
/// without headings, yields an empty vector.
///
/// # Examples
///
/// ```
/// use storyboard_script::parse_script;
///
/// assert!(parse_script("").is_empty());
/// assert!(parse_script("FADE IN.\n[画面：nothing to anchor this]").is_empty());
///
/// let scenes = parse_script("**1. A**\n[画面：A\nB]\n[特写:C]");
/// assert_eq!(scenes[0].description(), "A B C");
/// ```
pub fn parse_script(script: &str) -> Vec<SceneDescriptor> {
    DEFAULT_PARSER.parse(script)
}

/// Compiled heading and annotation patterns for one tag vocabulary.
///
/// A parser holds no state between calls; share it freely across threads.
#[derive(Debug, Clone)]
pub struct ScriptParser {
    heading: Regex,
    annotation: Regex,
    tags: Vec<String>,
}

impl Default for ScriptParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptParser {
    /// Build a parser recognizing the standard [`AnnotationTag`] vocabulary.
    pub fn new() -> Self {
        let tags: Vec<String> = AnnotationTag::all()
            .iter()
            .map(|tag| tag.as_str().to_string())
            .collect();
        let annotation = Regex::new(&annotation_pattern(&tags))
            .expect("default annotation pattern is valid");
        let heading = Regex::new(HEADING_PATTERN).expect("heading pattern is valid");

        Self {
            heading,
            annotation,
            tags,
        }
    }

    /// Build a parser recognizing a custom set of tag words.
    ///
    /// Tags are matched literally; regex metacharacters are escaped.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `tags` is empty or contains a blank tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use storyboard_script::ScriptParser;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let parser = ScriptParser::with_tags(["SHOT", "INSERT"])?;
    /// let scenes = parser.parse("**1. Lab**\n[SHOT: beakers]\n[画面：ignored]");
    /// assert_eq!(scenes[0].description(), "beakers");
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_tags<I, S>(tags: I) -> StoryboardResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tags: Vec<String> = tags
            .into_iter()
            .map(|tag| tag.as_ref().trim().to_string())
            .collect();

        if tags.is_empty() {
            return Err(ConfigError::new("Annotation tag list cannot be empty").into());
        }
        if tags.iter().any(String::is_empty) {
            return Err(ConfigError::new("Annotation tags cannot be blank").into());
        }

        let annotation = Regex::new(&annotation_pattern(&tags)).map_err(|e| {
            ConfigError::new(format!("Failed to compile annotation pattern: {}", e))
        })?;
        let heading = Regex::new(HEADING_PATTERN)
            .map_err(|e| ConfigError::new(format!("Failed to compile heading pattern: {}", e)))?;

        Ok(Self {
            heading,
            annotation,
            tags,
        })
    }

    /// Tag words this parser recognizes.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Split `script` into scenes and merge each scene's annotations.
    #[instrument(level = "debug", skip_all, fields(script_len = script.len()))]
    pub fn parse(&self, script: &str) -> Vec<SceneDescriptor> {
        // (label, heading start, body start)
        let headings: Vec<(&str, usize, usize)> = self
            .heading
            .captures_iter(script)
            .filter_map(|caps| {
                let whole = caps.get(0)?;
                let label = caps.get(1)?;
                Some((label.as_str().trim(), whole.start(), whole.end()))
            })
            .collect();

        let scenes: Vec<SceneDescriptor> = headings
            .iter()
            .enumerate()
            .filter_map(|(index, &(label, _, body_start))| {
                let body_end = headings
                    .get(index + 1)
                    .map_or(script.len(), |&(_, next_start, _)| next_start);
                let description = self.describe(&script[body_start..body_end]);

                if description.is_empty() {
                    debug!(label, "Scene has no description annotations, skipping");
                    None
                } else {
                    Some(SceneDescriptor::new(label, description))
                }
            })
            .collect();

        debug!(
            headings = headings.len(),
            scenes = scenes.len(),
            "Parsed script"
        );
        scenes
    }

    /// Join every annotation in a scene body, in order, with single spaces.
    fn describe(&self, body: &str) -> String {
        self.annotation
            .captures_iter(body)
            .filter_map(|caps| caps.get(1))
            .map(|text| normalize_fragment(text.as_str()))
            .filter(|fragment| !fragment.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// `[<tag><colon><content>]` with content matched lazily across lines.
fn annotation_pattern(tags: &[String]) -> String {
    let alternation = tags
        .iter()
        .map(|tag| regex::escape(tag))
        .collect::<Vec<_>>()
        .join("|");
    format!(r"\[(?:{})[：:]((?s:.*?))\]", alternation)
}

/// Trim, then turn every line break into one space.
fn normalize_fragment(text: &str) -> String {
    text.trim().replace("\r\n", " ").replace(['\n', '\r'], " ")
}
