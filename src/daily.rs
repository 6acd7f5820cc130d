//! Daily-note timestamps.
//!
//! When the active document lives under the configured daily-notes
//! directory, list continuations can be stamped with the current time.

use chrono::{Local, NaiveTime};
use std::path::Path;

/// Time format used for timestamps (24-hour, zero-padded).
pub const TIME_FORMAT: &str = "%H:%M";

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    /// Returns the current local time of day.
    fn now(&self) -> NaiveTime;
}

/// Clock backed by the system's local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Clock frozen at a fixed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}

/// Checks whether `file_path` is within the daily-notes directory.
///
/// Containment is a plain substring test on the path's string form, so
/// `"journal/daily"` matches `vault/journal/daily/2024-01-01.md`. An empty
/// directory never matches.
///
/// # Examples
///
/// ```
/// use smart_newline::daily::is_file_in_daily_notes_dir;
/// use std::path::Path;
///
/// let note = Path::new("vault/Daily/2024-05-01.md");
/// assert!(is_file_in_daily_notes_dir(Some(note), "Daily"));
/// assert!(!is_file_in_daily_notes_dir(Some(note), "Projects"));
/// assert!(!is_file_in_daily_notes_dir(None, "Daily"));
/// ```
#[must_use]
pub fn is_file_in_daily_notes_dir(file_path: Option<&Path>, daily_notes_directory: &str) -> bool {
    if daily_notes_directory.is_empty() {
        return false;
    }
    file_path.is_some_and(|path| path.to_string_lossy().contains(daily_notes_directory))
}

/// Formats a time of day as `HH:MM`.
#[must_use]
pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Returns the clock's current time formatted as `HH:MM`.
#[must_use]
pub fn current_time_formatted(clock: &dyn Clock) -> String {
    format_time(clock.now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_format_time_zero_padded() {
        assert_eq!(format_time(time(7, 5)), "07:05");
        assert_eq!(format_time(time(0, 0)), "00:00");
    }

    #[test]
    fn test_format_time_24_hour() {
        assert_eq!(format_time(time(23, 59)), "23:59");
        assert_eq!(format_time(time(13, 0)), "13:00");
    }

    #[test]
    fn test_current_time_formatted_uses_clock() {
        let clock = FixedClock(time(9, 30));
        assert_eq!(current_time_formatted(&clock), "09:30");
    }

    #[test]
    fn test_system_clock_shape() {
        let formatted = current_time_formatted(&SystemClock);
        assert_eq!(formatted.len(), 5);
        assert_eq!(&formatted[2..3], ":");
    }

    #[test]
    fn test_daily_dir_match() {
        let path = PathBuf::from("/home/me/vault/journal/daily/2024-01-01.md");
        assert!(is_file_in_daily_notes_dir(Some(&path), "journal/daily"));
        assert!(is_file_in_daily_notes_dir(Some(&path), "daily"));
        assert!(!is_file_in_daily_notes_dir(Some(&path), "weekly"));
    }

    #[test]
    fn test_daily_dir_is_case_sensitive() {
        let path = PathBuf::from("vault/Daily/note.md");
        assert!(!is_file_in_daily_notes_dir(Some(&path), "daily"));
    }

    #[test]
    fn test_daily_dir_empty_disables() {
        let path = PathBuf::from("vault/Daily/note.md");
        assert!(!is_file_in_daily_notes_dir(Some(&path), ""));
    }

    #[test]
    fn test_daily_dir_without_path() {
        assert!(!is_file_in_daily_notes_dir(None, "Daily"));
    }
}
