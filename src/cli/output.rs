//! Output formatting for CLI commands.
//!
//! Supports text and JSON output formats.

use crate::config::Settings;
use crate::editor::Insertion;
use crate::error::Error;
use crate::prefix::{Decision, Direction};
use serde::Serialize;
use std::fmt::Write;
use std::path::Path;

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// JSON output.
    Json,
}

impl OutputFormat {
    /// Parses format from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }
}

/// Formats a prefix decision.
#[must_use]
pub fn format_decision(
    line: &str,
    direction: Direction,
    decision: &Decision,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => match decision {
            Decision::NoPrefix => "no prefix\n".to_string(),
            Decision::TerminateList => "terminate list\n".to_string(),
            Decision::Prefix(prefix) => format!("prefix: {prefix:?}\n"),
        },
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct DecisionOutput<'a> {
                line: &'a str,
                direction: Direction,
                #[serde(flatten)]
                decision: &'a Decision,
            }
            format_json(&DecisionOutput {
                line,
                direction,
                decision,
            })
        }
    }
}

/// Formats the result of an `insert` command.
///
/// `document` is the edited text for dry runs, `None` when it was written.
#[must_use]
pub fn format_insertion(
    file: &Path,
    insertion: &Insertion,
    document: Option<&str>,
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Text => {
            if let Some(doc) = document {
                let mut output = doc.to_string();
                if !output.ends_with('\n') {
                    output.push('\n');
                }
                return output;
            }
            let mut output = String::new();
            let _ = writeln!(output, "Inserted line {} in {}", insertion.direction, file.display());
            let _ = writeln!(output, "  Decision: {}", describe(&insertion.decision));
            if let Some(ref ts) = insertion.timestamp {
                let _ = writeln!(output, "  Timestamp: {ts}");
            }
            let _ = writeln!(output, "  Cursor:   {}", insertion.cursor);
            output
        }
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct InsertOutput<'a> {
                file: String,
                #[serde(flatten)]
                insertion: &'a Insertion,
                #[serde(skip_serializing_if = "Option::is_none")]
                document: Option<&'a str>,
            }
            format_json(&InsertOutput {
                file: file.to_string_lossy().to_string(),
                insertion,
                document,
            })
        }
    }
}

/// Formats settings.
#[must_use]
pub fn format_settings(settings: &Settings, path: &Path, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let mut output = String::new();
            let _ = writeln!(output, "Settings ({})", path.display());
            let _ = writeln!(
                output,
                "  auto-insert-list-prefix: {}",
                settings.auto_insert_list_prefix
            );
            let dir = if settings.daily_notes_directory.is_empty() {
                "(not set)"
            } else {
                settings.daily_notes_directory.as_str()
            };
            let _ = writeln!(output, "  daily-notes-directory:   {dir}");
            let _ = writeln!(
                output,
                "  insert-daily-timestamp:  {}",
                settings.insert_daily_timestamp
            );
            output
        }
        OutputFormat::Json => format_json(settings),
    }
}

/// Formats an error for display.
#[must_use]
pub fn format_error(err: &Error, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => err.to_string(),
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct ErrorOutput {
                error: String,
            }
            format_json(&ErrorOutput {
                error: err.to_string(),
            })
        }
    }
}

fn describe(decision: &Decision) -> String {
    match decision {
        Decision::NoPrefix => "no prefix".to_string(),
        Decision::TerminateList => "terminate list".to_string(),
        Decision::Prefix(prefix) => format!("prefix {prefix:?}"),
    }
}

/// Formats a value as JSON.
fn format_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string()) + "\n"
}
