//! Line-prefix classifier.
//!
//! Recognizes the markers that open a markdown list or quote line and
//! returns a structured capture instead of a bare substring.

use regex::Regex;
use std::sync::OnceLock;

/// Bullet (`-`, `+`, `*`), ordered (`12.`) or quote (`>`) marker, one space,
/// then an optional checklist token such as `[ ] ` or `[x] `.
#[allow(clippy::expect_used)]
fn list_prefix_regex() -> &'static Regex {
    static LIST_PREFIX: OnceLock<Regex> = OnceLock::new();
    LIST_PREFIX.get_or_init(|| {
        Regex::new(r"^(?P<indent>\s*)(?P<marker>[-+*]|[0-9]+\.|>) (?:\[(?P<state>.)\] )?")
            .expect("valid regex")
    })
}

/// The marker that opens a list or quote line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker<'a> {
    /// `-`, `+` or `*`.
    Bullet(char),
    /// Ordered marker; holds the digits without the trailing `.`.
    Ordered(&'a str),
    /// Blockquote `>`.
    Quote,
}

impl<'a> Marker<'a> {
    fn parse(token: &'a str) -> Self {
        match token {
            ">" => Self::Quote,
            t => t
                .strip_suffix('.')
                .map_or_else(|| Self::Bullet(t.chars().next().unwrap_or('-')), Self::Ordered),
        }
    }
}

/// A recognized list prefix, borrowed from the classified line.
///
/// # Examples
///
/// ```
/// use smart_newline::prefix::{Marker, classify};
///
/// let prefix = classify("  - [x] ship it").unwrap();
/// assert_eq!(prefix.indent, "  ");
/// assert_eq!(prefix.text, "- [x] ");
/// assert_eq!(prefix.marker, Marker::Bullet('-'));
/// assert_eq!(prefix.checkbox, Some('x'));
/// assert_eq!(prefix.rest, "ship it");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPrefix<'a> {
    /// Leading whitespace before the marker.
    pub indent: &'a str,
    /// Marker, separator space and checklist token, without indentation.
    pub text: &'a str,
    /// Everything after the prefix.
    pub rest: &'a str,
    /// Marker kind.
    pub marker: Marker<'a>,
    /// Checklist state character, if a checklist token is present.
    pub checkbox: Option<char>,
}

impl ListPrefix<'_> {
    /// Returns true when the line holds only the marker (and checklist token).
    ///
    /// Trailing spaces after the prefix count as content.
    #[must_use]
    pub const fn is_empty_item(&self) -> bool {
        self.rest.is_empty()
    }
}

/// Classifies a line, returning its list prefix if it has one.
///
/// Markers must sit at the start of the line (after optional whitespace) and
/// be followed by exactly one space; markers appearing mid-line are ignored.
#[must_use]
pub fn classify(line: &str) -> Option<ListPrefix<'_>> {
    let caps = list_prefix_regex().captures(line)?;
    let indent = caps.name("indent")?;
    let marker = caps.name("marker")?;
    let whole = caps.get(0)?;

    Some(ListPrefix {
        indent: indent.as_str(),
        text: &line[indent.end()..whole.end()],
        rest: &line[whole.end()..],
        marker: Marker::parse(marker.as_str()),
        checkbox: caps.name("state").and_then(|m| m.as_str().chars().next()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bullet_markers() {
        for (line, bullet) in [("- a", '-'), ("+ a", '+'), ("* a", '*')] {
            let prefix = classify(line).unwrap();
            assert_eq!(prefix.marker, Marker::Bullet(bullet));
            assert_eq!(prefix.text.len(), 2);
            assert_eq!(prefix.rest, "a");
        }
    }

    #[test]
    fn test_ordered_marker() {
        let prefix = classify("42. answer").unwrap();
        assert_eq!(prefix.marker, Marker::Ordered("42"));
        assert_eq!(prefix.text, "42. ");
        assert_eq!(prefix.checkbox, None);
    }

    #[test]
    fn test_quote_marker() {
        let prefix = classify("> quoted").unwrap();
        assert_eq!(prefix.marker, Marker::Quote);
        assert_eq!(prefix.text, "> ");
    }

    #[test]
    fn test_checklist_token() {
        let prefix = classify("- [ ] todo").unwrap();
        assert_eq!(prefix.checkbox, Some(' '));
        assert_eq!(prefix.text, "- [ ] ");

        let prefix = classify("1. [/] half").unwrap();
        assert_eq!(prefix.marker, Marker::Ordered("1"));
        assert_eq!(prefix.checkbox, Some('/'));
    }

    #[test]
    fn test_checklist_needs_trailing_space() {
        // `[x]` without a following space is content, not a token
        let prefix = classify("- [x]done").unwrap();
        assert_eq!(prefix.checkbox, None);
        assert_eq!(prefix.rest, "[x]done");
    }

    #[test]
    fn test_indentation_captured() {
        let prefix = classify("\t  * nested").unwrap();
        assert_eq!(prefix.indent, "\t  ");
        assert_eq!(prefix.text, "* ");
        assert_eq!(prefix.rest, "nested");
    }

    #[test]
    fn test_not_a_list_line() {
        assert!(classify("").is_none());
        assert!(classify("   ").is_none());
        assert!(classify("plain text").is_none());
        assert!(classify("-no space").is_none());
        assert!(classify("-").is_none());
        assert!(classify("1.no space").is_none());
        assert!(classify("a - b").is_none());
        assert!(classify("x. letter").is_none());
    }

    #[test]
    fn test_non_ascii_digits_rejected() {
        assert!(classify("\u{0663}. arabic three").is_none());
    }

    #[test]
    fn test_empty_item() {
        assert!(classify("- ").unwrap().is_empty_item());
        assert!(classify("  - [x] ").unwrap().is_empty_item());
        assert!(!classify("-  ").unwrap().is_empty_item());
        assert!(!classify("- a").unwrap().is_empty_item());
    }

    #[test]
    fn test_multibyte_checkbox_state() {
        let prefix = classify("- [✓] done").unwrap();
        assert_eq!(prefix.checkbox, Some('✓'));
        assert_eq!(prefix.rest, "done");
    }
}
