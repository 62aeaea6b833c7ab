//! CLI command definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Storyboard - turn annotated screenplays into illustrated storyboards
#[derive(Parser, Debug)]
#[command(name = "storyboard")]
#[command(about = "Turn annotated screenplays into illustrated storyboards", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the scenes a script contains, without calling any model
    Parse {
        /// Script to read
        #[command(flatten)]
        source: ScriptSource,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Generate a prompt and an image for every scene
    Generate(GenerateOptions),
}

/// Where the script comes from
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct ScriptSource {
    /// Path to the script, or `-` for stdin
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Use the bundled demo screenplay
    #[arg(long)]
    pub sample: bool,
}

/// Options for `storyboard generate`
#[derive(Args, Debug, Clone)]
pub struct GenerateOptions {
    /// Script to read
    #[command(flatten)]
    pub source: ScriptSource,

    /// Directory receiving images and storyboard.json
    #[arg(long, default_value = "storyboard")]
    pub out: PathBuf,

    /// Configuration file layered over the bundled defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Gemini API key (defaults to GEMINI_API_KEY)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Aspect ratio requested from the image model, e.g. 1:1
    #[arg(long)]
    pub aspect_ratio: Option<String>,
}

/// Output format options
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
