//! In-memory line buffer.

use crate::editor::{Editor, Position};
use crate::error::{EditorError, Result};

/// A document held as a vector of lines, with a cursor.
///
/// Each line remembers its own ending (`\n`, `\r\n`, or none for a final
/// line without one) so [`TextBuffer::to_text`] writes back what was read,
/// even in files that mix endings.
///
/// # Examples
///
/// ```
/// use smart_newline::editor::{Editor, Position, TextBuffer};
///
/// let mut buf = TextBuffer::from_text("- one\n");
/// buf.insert(Position::new(0, 5), "\n- two").unwrap();
/// assert_eq!(buf.to_text(), "- one\n- two\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
    endings: Vec<&'static str>,
    cursor: Position,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::from_text("")
    }
}

impl TextBuffer {
    /// Creates a buffer from document text. The cursor starts at `0:0`.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let (lines, endings): (Vec<String>, Vec<&'static str>) = if text.is_empty() {
            (vec![String::new()], vec![""])
        } else {
            text.split_inclusive('\n').map(split_ending).unzip()
        };

        Self {
            lines,
            endings,
            cursor: Position::default(),
        }
    }

    /// Renders the buffer back to text.
    #[must_use]
    pub fn to_text(&self) -> String {
        self.lines
            .iter()
            .zip(&self.endings)
            .fold(String::new(), |mut text, (line, ending)| {
                text.push_str(line);
                text.push_str(ending);
                text
            })
    }

    /// Returns all lines.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Ending for a line break opened on `line`: the line's own ending, or
    /// the previous line's when it is the unterminated last line.
    fn break_ending(&self, line: usize) -> &'static str {
        self.endings
            .get(line)
            .copied()
            .filter(|ending| !ending.is_empty())
            .or_else(|| line.checked_sub(1).and_then(|prev| self.endings.get(prev).copied()))
            .unwrap_or("\n")
    }

    fn check(&self, pos: Position) -> Result<&str> {
        let line = self
            .lines
            .get(pos.line)
            .ok_or(EditorError::LineOutOfRange {
                line: pos.line,
                line_count: self.lines.len(),
            })?;
        if pos.ch > line.len() || !line.is_char_boundary(pos.ch) {
            return Err(EditorError::ColumnOutOfRange {
                line: pos.line,
                ch: pos.ch,
                len: line.len(),
            }
            .into());
        }
        Ok(line.as_str())
    }
}

fn split_ending(line: &str) -> (String, &'static str) {
    if let Some(text) = line.strip_suffix("\r\n") {
        (text.to_string(), "\r\n")
    } else if let Some(text) = line.strip_suffix('\n') {
        (text.to_string(), "\n")
    } else {
        (line.to_string(), "")
    }
}

impl Editor for TextBuffer {
    fn cursor(&self) -> Position {
        self.cursor
    }

    fn set_cursor(&mut self, pos: Position) -> Result<()> {
        self.check(pos)?;
        self.cursor = pos;
        Ok(())
    }

    fn line(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(String::as_str)
    }

    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn insert(&mut self, pos: Position, text: &str) -> Result<()> {
        let line = self.check(pos)?;
        let (head, tail) = line.split_at(pos.ch);
        let tail = tail.to_string();

        let mut pieces = text.split('\n');
        let mut replacement = vec![format!("{head}{}", pieces.next().unwrap_or_default())];
        replacement.extend(pieces.map(str::to_string));
        if let Some(last) = replacement.last_mut() {
            last.push_str(&tail);
        }

        let ending = self.endings.get(pos.line).copied().unwrap_or_default();
        let mut endings = vec![self.break_ending(pos.line); replacement.len() - 1];
        endings.push(ending);

        self.lines.splice(pos.line..=pos.line, replacement);
        self.endings.splice(pos.line..=pos.line, endings);
        Ok(())
    }
}
