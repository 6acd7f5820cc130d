//! User settings.
//!
//! Settings are stored as pretty-printed JSON. Fields missing from the file
//! take their default value, so older files keep working as keys are added.

use crate::error::{ConfigError, IoError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Default settings path relative to the working directory.
pub const DEFAULT_SETTINGS_PATH: &str = ".smart-newline/settings.json";

/// Keys accepted by [`Settings::set`], listed in unknown-key errors.
pub const SETTING_KEYS: [&str; 3] = [
    "auto-insert-list-prefix",
    "daily-notes-directory",
    "insert-daily-timestamp",
];

/// Persisted user settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Continue list markers on new lines. When off, new lines are bare.
    pub auto_insert_list_prefix: bool,

    /// Path fragment identifying daily notes (empty disables timestamps).
    pub daily_notes_directory: String,

    /// Stamp list continuations in daily notes with `HH:MM`.
    pub insert_daily_timestamp: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_insert_list_prefix: true,
            daily_notes_directory: String::new(),
            insert_daily_timestamp: false,
        }
    }
}

impl Settings {
    /// Loads settings from `path`, falling back to defaults if it is absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let path_str = path.to_string_lossy().to_string();
        if !path.exists() {
            debug!(path = %path_str, "settings file not found, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path).map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;
        let settings: Self = serde_json::from_str(&raw).map_err(|e| ConfigError::Parse {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        debug!(path = %path_str, ?settings, "loaded settings");
        Ok(settings)
    }

    /// Writes settings to `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| IoError::DirectoryFailed {
                path: parent.to_string_lossy().to_string(),
                reason: e.to_string(),
            })?;
        }

        let json = serde_json::to_string_pretty(self).map_err(ConfigError::from)?;
        std::fs::write(path, json + "\n").map_err(|e| IoError::WriteFailed {
            path: path.to_string_lossy().to_string(),
            reason: e.to_string(),
        })?;

        info!(path = %path.display(), "saved settings");
        Ok(())
    }

    /// Updates one setting by its kebab-case key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownKey`] or [`ConfigError::InvalidValue`].
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "auto-insert-list-prefix" => self.auto_insert_list_prefix = parse_bool(key, value)?,
            "daily-notes-directory" => self.daily_notes_directory = value.trim().to_string(),
            "insert-daily-timestamp" => self.insert_daily_timestamp = parse_bool(key, value)?,
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert!(settings.auto_insert_list_prefix);
        assert!(settings.daily_notes_directory.is_empty());
        assert!(!settings.insert_daily_timestamp);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::load(&temp_dir.path().join("nope.json")).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, r#"{"daily_notes_directory": "Journal"}"#).unwrap();

        let settings = Settings::load(&path).unwrap();
        assert!(settings.auto_insert_list_prefix);
        assert_eq!(settings.daily_notes_directory, "Journal");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/settings.json");

        let settings = Settings {
            auto_insert_list_prefix: false,
            daily_notes_directory: "Daily".to_string(),
            insert_daily_timestamp: true,
        };
        settings.save(&path).unwrap();

        assert_eq!(Settings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_load_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();

        let result = Settings::load(&path);
        assert!(matches!(result, Err(Error::Config(ConfigError::Parse { .. }))));
    }

    #[test]
    fn test_set_known_keys() {
        let mut settings = Settings::default();
        settings.set("auto-insert-list-prefix", "off").unwrap();
        settings.set("daily-notes-directory", " Journal/Daily ").unwrap();
        settings.set("insert-daily-timestamp", "YES").unwrap();

        assert!(!settings.auto_insert_list_prefix);
        assert_eq!(settings.daily_notes_directory, "Journal/Daily");
        assert!(settings.insert_daily_timestamp);
    }

    #[test]
    fn test_set_unknown_key() {
        let mut settings = Settings::default();
        let err = settings.set("theme", "dark").unwrap_err();
        assert!(matches!(err, Error::Config(ConfigError::UnknownKey { .. })));
    }

    #[test]
    fn test_set_invalid_bool() {
        let mut settings = Settings::default();
        let err = settings.set("insert-daily-timestamp", "maybe").unwrap_err();
        assert!(err.to_string().contains("maybe"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_unknown_key_lists_accepted_keys() {
        let mut settings = Settings::default();
        let message = settings.set("colour", "red").unwrap_err().to_string();
        for key in SETTING_KEYS {
            assert!(message.contains(key), "{message}");
        }
    }

    #[test]
    fn test_setting_keys_all_accepted() {
        let mut settings = Settings::default();
        for key in SETTING_KEYS {
            let value = if key == "daily-notes-directory" { "d" } else { "true" };
            assert!(settings.set(key, value).is_ok(), "{key}");
        }
    }
}
