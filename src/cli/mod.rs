//! CLI layer for smart-newline.
//!
//! Provides the command-line interface using clap, with commands for
//! deriving prefixes, editing files and managing settings.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, Commands, ConfigCommands};
