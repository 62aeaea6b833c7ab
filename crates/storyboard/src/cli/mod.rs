//! Command-line interface module.

mod commands;
mod generate;
mod parse;
mod source;

pub use commands::{Cli, Commands, GenerateOptions, OutputFormat, ScriptSource};
pub use generate::generate_storyboard;
pub use parse::parse_command;
pub use source::load_script;
