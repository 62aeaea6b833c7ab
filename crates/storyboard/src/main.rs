//! Storyboard CLI binary.
//!
//! - Parse a script and list its scenes
//! - Generate a storyboard with Gemini and Imagen

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, generate_storyboard, parse_command};

    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Parse { source, format } => {
            parse_command(&source, format).await?;
        }

        Commands::Generate(options) => {
            generate_storyboard(&options).await?;
        }
    }

    Ok(())
}
