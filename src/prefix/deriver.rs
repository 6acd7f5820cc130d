//! Prefix deriver.
//!
//! Turns a classified line and an insertion direction into a [`Decision`].

use crate::error::CommandError;
use crate::prefix::classifier::{Marker, classify};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Canonical prefix of an unticked checklist item.
pub const UNCHECKED_ITEM: &str = "- [ ] ";

/// Side of the current line the new line is inserted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// After the current line (vim `o`).
    Below,
    /// Before the current line (vim `O`).
    Above,
}

impl Direction {
    /// Returns the lowercase name used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Below => "below",
            Self::Above => "above",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "below" | "down" => Ok(Self::Below),
            "above" | "up" => Ok(Self::Above),
            _ => Err(CommandError::InvalidArgument(format!(
                "direction must be 'below' or 'above', got '{s}'"
            ))),
        }
    }
}

/// What the new line should start with.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "decision", content = "prefix", rename_all = "snake_case")]
pub enum Decision {
    /// Not a list line: insert a bare line break.
    NoPrefix,
    /// The current list item is empty: the list ends, insert no marker.
    TerminateList,
    /// Continue the list with this prefix (no indentation).
    Prefix(String),
}

impl Decision {
    /// Text to write after the reproduced indentation.
    ///
    /// `Some("")` for [`Decision::NoPrefix`], `None` for
    /// [`Decision::TerminateList`].
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::NoPrefix => Some(""),
            Self::TerminateList => None,
            Self::Prefix(prefix) => Some(prefix),
        }
    }

    /// Returns true if the new line continues a list.
    #[must_use]
    pub const fn continues_list(&self) -> bool {
        matches!(self, Self::Prefix(_))
    }
}

/// Derives the prefix for a line inserted next to `line`.
///
/// Ordered markers are incremented only when inserting above; below keeps
/// the source number. A `-` checklist always continues unticked.
///
/// # Examples
///
/// ```
/// use smart_newline::prefix::{Decision, Direction, derive};
///
/// assert_eq!(derive("3. buy milk", Direction::Above), Decision::Prefix("4. ".into()));
/// assert_eq!(derive("3. buy milk", Direction::Below), Decision::Prefix("3. ".into()));
/// assert_eq!(derive("- [x] done", Direction::Below), Decision::Prefix("- [ ] ".into()));
/// assert_eq!(derive("- ", Direction::Below), Decision::TerminateList);
/// assert_eq!(derive("plain", Direction::Below), Decision::NoPrefix);
/// ```
#[must_use]
pub fn derive(line: &str, direction: Direction) -> Decision {
    let Some(prefix) = classify(line) else {
        return Decision::NoPrefix;
    };
    if prefix.is_empty_item() {
        return Decision::TerminateList;
    }

    match (prefix.marker, prefix.checkbox) {
        (Marker::Ordered(digits), None) if direction == Direction::Above => {
            return Decision::Prefix(format!("{}. ", increment(digits)));
        }
        (Marker::Bullet('-'), Some(state)) if state != ' ' => {
            return Decision::Prefix(UNCHECKED_ITEM.to_string());
        }
        _ => {}
    }

    Decision::Prefix(prefix.text.to_string())
}

/// Adds one to a run of ASCII digits of any length, dropping leading zeros.
fn increment(digits: &str) -> String {
    let mut carry = true;
    let mut reversed: Vec<char> = digits
        .trim_start_matches('0')
        .chars()
        .rev()
        .map(|c| match (carry, c) {
            (false, _) => c,
            (true, '9') => '0',
            (true, _) => {
                carry = false;
                c.to_digit(10)
                    .and_then(|d| char::from_digit(d + 1, 10))
                    .unwrap_or(c)
            }
        })
        .collect();
    if carry {
        reversed.push('1');
    }
    reversed.iter().rev().collect()
}
