//! CLI command implementations.
//!
//! Contains the business logic for each CLI command.

use crate::cli::output::{OutputFormat, format_decision, format_insertion, format_settings};
use crate::cli::parser::{Cli, Commands, ConfigCommands};
use crate::config::Settings;
use crate::editor::{Editor, NewlineHandler, Position, TextBuffer};
use crate::error::{CommandError, IoError, Result};
use crate::prefix::{Direction, derive};
use std::path::Path;
use tracing::info;

/// Executes the CLI command.
///
/// # Arguments
///
/// * `cli` - Parsed CLI arguments.
///
/// # Returns
///
/// Result with output string on success.
///
/// # Errors
///
/// Returns an error if the command fails to execute.
pub fn execute(cli: &Cli) -> Result<String> {
    let format = OutputFormat::parse(&cli.format);
    let settings_path = cli.get_settings_path();

    match &cli.command {
        Commands::Derive { line, direction } => Ok(cmd_derive(line, *direction, format)),
        Commands::Insert {
            file,
            line,
            column,
            direction,
            dry_run,
        } => cmd_insert(
            &settings_path,
            file,
            *line,
            *column,
            *direction,
            *dry_run,
            format,
        ),
        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommands::Show => cmd_config_show(&settings_path, format),
            ConfigCommands::Set { key, value } => {
                cmd_config_set(&settings_path, key, value, format)
            }
            ConfigCommands::Reset => cmd_config_reset(&settings_path, format),
        },
    }
}

// ==================== Command Implementations ====================

fn cmd_derive(line: &str, direction: Direction, format: OutputFormat) -> String {
    let decision = derive(line, direction);
    format_decision(line, direction, &decision, format)
}

fn cmd_insert(
    settings_path: &Path,
    file: &Path,
    line: usize,
    column: usize,
    direction: Direction,
    dry_run: bool,
    format: OutputFormat,
) -> Result<String> {
    if line == 0 {
        return Err(CommandError::InvalidArgument("--line is 1-based".to_string()).into());
    }

    let path_str = file.to_string_lossy().to_string();
    if !file.exists() {
        return Err(IoError::FileNotFound { path: path_str }.into());
    }
    let text = std::fs::read_to_string(file).map_err(|e| IoError::ReadFailed {
        path: path_str.clone(),
        reason: e.to_string(),
    })?;

    let settings = Settings::load(settings_path)?;
    let mut buffer = TextBuffer::from_text(&text);
    buffer.set_cursor(Position::new(line - 1, column))?;

    let insertion = NewlineHandler::new(settings).insert_line(&mut buffer, direction, Some(file))?;
    let edited = buffer.to_text();

    if dry_run {
        return Ok(format_insertion(file, &insertion, Some(&edited), format));
    }

    std::fs::write(file, &edited).map_err(|e| IoError::WriteFailed {
        path: path_str.clone(),
        reason: e.to_string(),
    })?;
    info!(file = %path_str, cursor = %insertion.cursor, "inserted line");

    Ok(format_insertion(file, &insertion, None, format))
}

fn cmd_config_show(settings_path: &Path, format: OutputFormat) -> Result<String> {
    let settings = Settings::load(settings_path)?;
    Ok(format_settings(&settings, settings_path, format))
}

fn cmd_config_set(
    settings_path: &Path,
    key: &str,
    value: &str,
    format: OutputFormat,
) -> Result<String> {
    let mut settings = Settings::load(settings_path)?;
    settings.set(key, value)?;
    settings.save(settings_path)?;
    Ok(format_settings(&settings, settings_path, format))
}

fn cmd_config_reset(settings_path: &Path, format: OutputFormat) -> Result<String> {
    let settings = Settings::default();
    settings.save(settings_path)?;
    Ok(format_settings(&settings, settings_path, format))
}
