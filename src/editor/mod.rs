//! Editor integration.
//!
//! The prefix core only decides what a new line starts with. This module
//! applies that decision to a document: it breaks the line, reproduces
//! indentation, writes the prefix and moves the cursor.
//!
//! - [`Editor`]: the host-editor operations the handler drives
//! - [`TextBuffer`]: an in-memory line buffer implementing [`Editor`]
//! - [`NewlineHandler`]: the insert-line-below/above commands

pub mod buffer;
pub mod handler;

pub use buffer::TextBuffer;
pub use handler::{Insertion, NewlineHandler};

use crate::error::Result;
use serde::Serialize;
use std::fmt;

/// A zero-based cursor position. `ch` is a byte column within the line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Position {
    /// Line index.
    pub line: usize,
    /// Byte column.
    pub ch: usize,
}

impl Position {
    /// Creates a new position.
    #[must_use]
    pub const fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.ch)
    }
}

/// Editing operations required from a host editor.
///
/// Mirrors the handful of calls an editor plugin makes: read the cursor,
/// read a line, insert text at a position, move the cursor.
pub trait Editor {
    /// Returns the current cursor position.
    fn cursor(&self) -> Position;

    /// Moves the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is outside the document.
    fn set_cursor(&mut self, pos: Position) -> Result<()>;

    /// Returns the text of a line, without its line ending.
    fn line(&self, line: usize) -> Option<&str>;

    /// Returns the number of lines in the document.
    fn line_count(&self) -> usize;

    /// Inserts `text` at `pos`. A `\n` in `text` starts a new line.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is outside the document.
    fn insert(&mut self, pos: Position, text: &str) -> Result<()>;
}
