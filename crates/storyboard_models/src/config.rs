//! Configuration for the Gemini collaborators.
//!
//! Loaded with the `config` crate from, in increasing precedence:
//! 1. Bundled defaults (`storyboard.toml` shipped with the workspace)
//! 2. `~/.config/storyboard/storyboard.toml`
//! 3. `./storyboard.toml`
//! 4. `STORYBOARD__GEMINI__<FIELD>` environment variables

use config::{Config, Environment, File, FileFormat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use storyboard_error::{ConfigError, StoryboardError, StoryboardResult};
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../../../storyboard.toml");

/// Settings for the Gemini text model and the Imagen image model.
///
/// # Example
///
/// ```toml
/// [gemini]
/// text_model = "gemini-2.5-flash"
/// image_model = "imagen-3.0-generate-002"
/// aspect_ratio = "4:3"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Getters)]
pub struct GeminiConfig {
    /// API root, without a trailing slash
    base_url: String,
    /// Model that rewrites descriptions into prompts
    text_model: String,
    /// Model that renders prompts into images
    image_model: String,
    /// Aspect ratio requested from the image model
    aspect_ratio: String,
    /// MIME type assumed when the image model does not report one
    image_mime_type: String,
    /// Per-request timeout in seconds
    #[getter(skip)]
    timeout_secs: u64,
    /// System instruction sent with every enhancement request
    enhancement_instruction: String,
}

impl GeminiConfig {
    /// Override the text model.
    pub fn with_text_model(mut self, model: impl Into<String>) -> Self {
        self.text_model = model.into();
        self
    }

    /// Override the image model.
    pub fn with_image_model(mut self, model: impl Into<String>) -> Self {
        self.image_model = model.into();
        self
    }

    /// Override the API root (useful for proxies and tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the requested aspect ratio.
    pub fn with_aspect_ratio(mut self, aspect_ratio: impl Into<String>) -> Self {
        self.aspect_ratio = aspect_ratio.into();
        self
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }

    /// URL for a model method, e.g. `models/gemini-2.5-flash:generateContent`.
    pub fn endpoint(&self, model: &str, method: &str) -> String {
        format!(
            "{}/models/{}:{}",
            self.base_url.trim_end_matches('/'),
            model.trim_start_matches("models/"),
            method
        )
    }
}

impl Default for GeminiConfig {
    fn default() -> Self {
        StoryboardConfig::bundled().gemini
    }
}

/// Top-level storyboard configuration.
///
/// # Example
///
/// ```no_run
/// use storyboard_models::StoryboardConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = StoryboardConfig::load()?;
/// println!("Image model: {}", config.gemini().image_model());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Getters)]
pub struct StoryboardConfig {
    /// Gemini collaborator settings
    gemini: GeminiConfig,
}

impl StoryboardConfig {
    /// The bundled defaults alone, with no user overrides.
    pub fn bundled() -> Self {
        Self::builder_with_defaults()
            .build()
            .and_then(|config| config.try_deserialize())
            .expect("bundled storyboard.toml is valid")
    }

    /// Load configuration with precedence: environment > current dir > home dir > bundled.
    ///
    /// User config files are optional and silently skipped if missing.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed or a value has the wrong type.
    #[instrument]
    pub fn load() -> StoryboardResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder = Self::builder_with_defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/storyboard/storyboard.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("storyboard").required(false))
            .add_source(Environment::with_prefix("STORYBOARD").separator("__"));

        Self::finish(builder)
    }

    /// Load bundled defaults overlaid with a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> StoryboardResult<Self> {
        debug!("Loading configuration from file");

        let builder = Self::builder_with_defaults().add_source(File::from(path.as_ref()));
        Self::finish(builder).map_err(|e| {
            StoryboardError::from(ConfigError::new(format!(
                "Failed to read configuration from {}: {}",
                path.as_ref().display(),
                e.user_message()
            )))
        })
    }

    /// Replace the Gemini settings.
    pub fn with_gemini(mut self, gemini: GeminiConfig) -> Self {
        self.gemini = gemini;
        self
    }

    fn builder_with_defaults() -> config::ConfigBuilder<config::builder::DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> StoryboardResult<Self> {
        builder
            .build()
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StoryboardError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_defaults() {
        let config = StoryboardConfig::bundled();
        assert_eq!(config.gemini().text_model(), "gemini-2.5-flash");
        assert_eq!(config.gemini().aspect_ratio(), "16:9");
        assert!(config.gemini().enhancement_instruction().starts_with("You are"));
        assert!(!config.gemini().enhancement_instruction().ends_with('\n'));
    }

    #[test]
    fn test_endpoint_joins_cleanly() {
        let gemini = GeminiConfig::default().with_base_url("http://localhost:8080/v1beta/");
        assert_eq!(
            gemini.endpoint("models/imagen-3.0-generate-002", "predict"),
            "http://localhost:8080/v1beta/models/imagen-3.0-generate-002:predict"
        );
    }

    #[test]
    fn test_overrides_replace_single_fields() {
        let gemini = GeminiConfig::default()
            .with_text_model("gemini-2.5-pro")
            .with_aspect_ratio("1:1");
        assert_eq!(gemini.text_model(), "gemini-2.5-pro");
        assert_eq!(gemini.aspect_ratio(), "1:1");
        assert_eq!(gemini.image_model(), "imagen-3.0-generate-002");
    }
}
