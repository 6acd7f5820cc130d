//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::prefix::Direction;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// smart-newline: list-aware new lines for markdown.
///
/// Derives list, checklist and blockquote continuation prefixes and applies
/// them to files.
#[derive(Parser, Debug)]
#[command(name = "smart-newline")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the settings file.
    ///
    /// Defaults to `.smart-newline/settings.json` in the current directory.
    #[arg(short, long, env = "SMART_NEWLINE_SETTINGS", global = true)]
    pub settings: Option<PathBuf>,

    /// Enable verbose (debug) logging on stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json).
    #[arg(long, default_value = "text", global = true)]
    pub format: String,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the prefix a new line would get next to LINE.
    Derive {
        /// Text of the current line.
        #[arg(allow_hyphen_values = true)]
        line: String,

        /// Insert the new line below or above (below, above).
        #[arg(short, long, default_value = "below")]
        direction: Direction,
    },

    /// Insert a new line into a file, continuing any list on the cursor line.
    Insert {
        /// Markdown file to edit.
        file: PathBuf,

        /// Cursor line (1-based).
        #[arg(short, long)]
        line: usize,

        /// Cursor column in bytes (0-based).
        #[arg(short, long, default_value = "0")]
        column: usize,

        /// Insert the new line below or above (below, above).
        #[arg(short, long, default_value = "below")]
        direction: Direction,

        /// Print the edited document instead of writing it back.
        #[arg(long)]
        dry_run: bool,
    },

    /// Show or change settings.
    #[command(subcommand)]
    Config(ConfigCommands),
}

/// Settings subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the current settings.
    Show,

    /// Set one setting.
    Set {
        /// Setting key (auto-insert-list-prefix, daily-notes-directory,
        /// insert-daily-timestamp).
        key: String,

        /// New value.
        value: String,
    },

    /// Restore default settings.
    Reset,
}

impl Cli {
    /// Returns the settings path, using the default if not specified.
    #[must_use]
    pub fn get_settings_path(&self) -> PathBuf {
        self.settings
            .clone()
            .unwrap_or_else(|| PathBuf::from(crate::config::DEFAULT_SETTINGS_PATH))
    }
}
