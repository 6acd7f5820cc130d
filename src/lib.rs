//! # smart-newline
//!
//! List-aware "insert new line" for markdown editors.
//!
//! When a new line is opened below or above a list item, it gets the right
//! continuation prefix: bullets and quotes are repeated, ordered markers are
//! renumbered when inserting above, and checklists continue unticked. An
//! empty item ends the list instead.
//!
//! ## Features
//!
//! - **Prefix core**: a pure, total [`derive`] function over line text
//! - **Editor integration**: the [`Editor`] trait, an in-memory
//!   [`TextBuffer`] and the [`NewlineHandler`] commands
//! - **Daily notes**: optional `HH:MM` timestamps in a configured directory
//! - **Settings**: JSON-backed toggles

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![warn(unsafe_code)]

pub mod cli;
pub mod config;
pub mod daily;
pub mod editor;
pub mod error;
pub mod prefix;

// Re-export commonly used types at crate root
pub use error::{Error, Result};

// Re-export core types
pub use prefix::{Decision, Direction, ListPrefix, Marker, classify, derive};

// Re-export editor types
pub use editor::{Editor, Insertion, NewlineHandler, Position, TextBuffer};

// Re-export settings and daily-note helpers
pub use config::{DEFAULT_SETTINGS_PATH, Settings};
pub use daily::{Clock, FixedClock, SystemClock, is_file_in_daily_notes_dir};

// Re-export CLI types
pub use cli::{Cli, Commands, OutputFormat};
