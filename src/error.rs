//! Error types for smart-newline operations.
//!
//! The prefix core is total and never fails. Everything around it (the
//! editor collaborator, settings persistence and the CLI) reports failures
//! through the hierarchy below, built with `thiserror`.

use thiserror::Error;

/// Result type alias for smart-newline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Editor errors (cursor or insert position out of range).
    #[error("editor error: {0}")]
    Editor(#[from] EditorError),

    /// Settings errors (parse, unknown key, bad value).
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// Errors raised by an [`Editor`](crate::editor::Editor) implementation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum EditorError {
    /// The requested line does not exist.
    #[error("line {line} out of range (document has {line_count} lines)")]
    LineOutOfRange {
        /// Requested zero-based line.
        line: usize,
        /// Number of lines in the document.
        line_count: usize,
    },

    /// The requested column is past the end of the line or splits a character.
    #[error("column {ch} is not a valid position on line {line} (length {len})")]
    ColumnOutOfRange {
        /// Zero-based line.
        line: usize,
        /// Requested byte column.
        ch: usize,
        /// Byte length of the line.
        len: usize,
    },
}

/// Settings-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Settings file exists but is not valid JSON for [`Settings`](crate::config::Settings).
    #[error("invalid settings file: {path}: {reason}")]
    Parse {
        /// Path to the settings file.
        path: String,
        /// Parser message.
        reason: String,
    },

    /// Unknown settings key.
    #[error(
        "unknown setting: {key} (expected one of: {})",
        crate::config::SETTING_KEYS.join(", ")
    )]
    UnknownKey {
        /// Key that was not recognized.
        key: String,
    },

    /// Value could not be parsed for the given key.
    #[error("invalid value for {key}: {value}")]
    InvalidValue {
        /// Settings key.
        key: String,
        /// Rejected value.
        value: String,
    },

    /// Serialization error while writing settings.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Failed to write file.
    #[error("failed to write file: {path}: {reason}")]
    WriteFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Directory creation error.
    #[error("failed to create directory: {path}: {reason}")]
    DirectoryFailed {
        /// Path to the directory.
        path: String,
        /// Reason for failure.
        reason: String,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editor_error_display() {
        let err = EditorError::LineOutOfRange {
            line: 7,
            line_count: 3,
        };
        assert_eq!(
            err.to_string(),
            "line 7 out of range (document has 3 lines)"
        );

        let err = EditorError::ColumnOutOfRange {
            line: 0,
            ch: 12,
            len: 4,
        };
        assert!(err.to_string().contains("column 12"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::UnknownKey {
            key: "colour".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown setting: colour (expected one of: auto-insert-list-prefix, \
             daily-notes-directory, insert-daily-timestamp)"
        );

        let err = ConfigError::InvalidValue {
            key: "auto-insert-list-prefix".to_string(),
            value: "maybe".to_string(),
        };
        assert!(err.to_string().contains("maybe"));
    }

    #[test]
    fn test_io_error_display() {
        let err = IoError::FileNotFound {
            path: "/tmp/notes.md".to_string(),
        };
        assert_eq!(err.to_string(), "file not found: /tmp/notes.md");
    }

    #[test]
    fn test_error_from_editor() {
        let err: Error = EditorError::LineOutOfRange {
            line: 1,
            line_count: 1,
        }
        .into();
        assert!(matches!(err, Error::Editor(_)));
        assert!(err.to_string().starts_with("editor error:"));
    }

    #[test]
    fn test_from_serde_json_error_to_config_error() {
        let json_err: serde_json::Error = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err: ConfigError = json_err.into();
        assert!(matches!(err, ConfigError::Serialization(_)));
    }

    #[test]
    fn test_command_error_display() {
        let err = CommandError::InvalidArgument("--line".to_string());
        assert!(err.to_string().contains("invalid argument"));
    }
}
