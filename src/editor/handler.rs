//! Insert-line-below / insert-line-above commands.

use crate::config::Settings;
use crate::daily::{Clock, SystemClock, current_time_formatted, is_file_in_daily_notes_dir};
use crate::editor::{Editor, Position};
use crate::error::{EditorError, Result};
use crate::prefix::{Decision, Direction, derive};
use serde::Serialize;
use std::path::Path;
use tracing::debug;

/// Outcome of a new-line insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insertion {
    /// Direction the line was inserted in.
    pub direction: Direction,
    /// Prefix decision applied to the new line.
    pub decision: Decision,
    /// Timestamp written after the prefix, if any.
    pub timestamp: Option<String>,
    /// Cursor position after the insertion.
    pub cursor: Position,
}

/// Applies list continuation when a new line is inserted.
///
/// # Examples
///
/// ```
/// use smart_newline::config::Settings;
/// use smart_newline::editor::{Editor, NewlineHandler, Position, TextBuffer};
/// use smart_newline::prefix::Direction;
///
/// let mut buf = TextBuffer::from_text("  3. buy milk");
/// let handler = NewlineHandler::new(Settings::default());
///
/// let done = handler.insert_line(&mut buf, Direction::Below, None).unwrap();
/// assert_eq!(buf.to_text(), "  3. buy milk\n  3. ");
/// assert_eq!(done.cursor, Position::new(1, 5));
/// ```
#[derive(Debug, Clone)]
pub struct NewlineHandler<C = SystemClock> {
    settings: Settings,
    clock: C,
}

impl NewlineHandler<SystemClock> {
    /// Creates a handler using the system clock for timestamps.
    #[must_use]
    pub const fn new(settings: Settings) -> Self {
        Self {
            settings,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> NewlineHandler<C> {
    /// Creates a handler with a custom clock.
    #[must_use]
    pub const fn with_clock(settings: Settings, clock: C) -> Self {
        Self { settings, clock }
    }

    /// Returns the active settings.
    #[must_use]
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Inserts a new line below or above the cursor line.
    ///
    /// With list prefixing enabled the new line gets the cursor line's
    /// indentation followed by the derived prefix, and in daily notes an
    /// optional `HH:MM ` timestamp. With it disabled an empty line is
    /// inserted. The cursor ends at the end of whatever was written.
    ///
    /// The timestamp is only written after a continued list prefix: bare
    /// lines and list terminations are never stamped, even in daily notes.
    ///
    /// `file_path` is the path of the edited document, used only for the
    /// daily-notes check.
    ///
    /// # Errors
    ///
    /// Returns an error if the cursor is not on a line of the document.
    pub fn insert_line<E: Editor + ?Sized>(
        &self,
        editor: &mut E,
        direction: Direction,
        file_path: Option<&Path>,
    ) -> Result<Insertion> {
        let cursor = editor.cursor();
        let line = editor
            .line(cursor.line)
            .ok_or(EditorError::LineOutOfRange {
                line: cursor.line,
                line_count: editor.line_count(),
            })?
            .to_string();

        let mut at = open_line(editor, cursor.line, line.len(), direction)?;

        if !self.settings.auto_insert_list_prefix {
            editor.set_cursor(at)?;
            return Ok(Insertion {
                direction,
                decision: Decision::NoPrefix,
                timestamp: None,
                cursor: at,
            });
        }

        let decision = derive(&line, direction);
        debug!(%direction, ?decision, line = cursor.line, "derived list prefix");

        let indentation = &line[..line.len() - line.trim_start().len()];
        let mut written = indentation.to_string();
        if let Some(prefix) = decision.text() {
            written.push_str(prefix);
        }

        let timestamp = self.timestamp_for(&decision, file_path);
        if let Some(ref ts) = timestamp {
            written.push_str(ts);
            written.push(' ');
        }

        if !written.is_empty() {
            editor.insert(at, &written)?;
            at.ch = written.len();
        }
        editor.set_cursor(at)?;

        Ok(Insertion {
            direction,
            decision,
            timestamp,
            cursor: at,
        })
    }

    fn timestamp_for(&self, decision: &Decision, file_path: Option<&Path>) -> Option<String> {
        let stamp = decision.continues_list()
            && self.settings.insert_daily_timestamp
            && is_file_in_daily_notes_dir(file_path, &self.settings.daily_notes_directory);
        stamp.then(|| current_time_formatted(&self.clock))
    }
}

/// Breaks a new empty line below or above `line` and returns its start.
fn open_line<E: Editor + ?Sized>(
    editor: &mut E,
    line: usize,
    line_len: usize,
    direction: Direction,
) -> Result<Position> {
    match direction {
        Direction::Below => {
            editor.insert(Position::new(line, line_len), "\n")?;
            Ok(Position::new(line + 1, 0))
        }
        Direction::Above => {
            editor.insert(Position::new(line, 0), "\n")?;
            Ok(Position::new(line, 0))
        }
    }
}
