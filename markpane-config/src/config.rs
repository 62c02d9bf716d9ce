//! The `Config` struct and its persistence.
//!
//! Covers:
//! - `load` / `save` (YAML file I/O with atomic write)
//! - XDG-style path helpers (`config_dir`, `config_path`, `session_path`)

use crate::error::ConfigError;
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application directory name under the user's config directory
const APP_DIR: &str = "markpane";

/// User settings for the layout core and the `markpane` tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Verbosity of diagnostic logging
    pub log_level: LogLevel,

    /// Location of the session file holding every window's layout.
    /// `None` uses `session.json` inside the config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_file: Option<PathBuf>,

    /// Drop tabs whose file no longer exists when a layout is restored
    pub verify_files_on_restore: bool,

    /// Write session files with indentation
    pub pretty_session_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            session_file: None,
            verify_files_on_restore: true,
            pretty_session_json: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location, falling back to defaults
    /// when no config file exists yet
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::info!("Config file {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml_ng::from_str(&contents)?;
        config.validate()?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml_ng::to_string(self)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if let Some(session_file) = &self.session_file
            && session_file.as_os_str().is_empty()
        {
            return Err(ConfigError::Validation(
                "session_file must not be an empty path".to_string(),
            ));
        }
        Ok(())
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join(APP_DIR)
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join(APP_DIR)
            } else {
                PathBuf::from(".")
            }
        }
    }

    /// Get the configuration file path
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the session file path, honouring `session_file` when set
    pub fn session_path(&self) -> PathBuf {
        self.session_file
            .clone()
            .unwrap_or_else(|| Self::config_dir().join("session.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp = tempdir().unwrap();
        let config = Config::load_from(&temp.path().join("absent.yaml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.verify_files_on_restore);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "log_level: debug\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.session_file.is_none());
        assert!(config.verify_files_on_restore);
    }

    #[test]
    fn test_corrupt_file_is_parse_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "log_level: [[[").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_empty_session_file_is_rejected() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "session_file: ''\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.yaml");

        let config = Config {
            log_level: LogLevel::Info,
            session_file: Some(temp.path().join("layouts.json")),
            verify_files_on_restore: false,
            pretty_session_json: true,
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.session_path(), temp.path().join("layouts.json"));
    }

    #[test]
    fn test_default_session_path_lives_in_config_dir() {
        let config = Config::default();
        assert_eq!(config.session_path(), Config::config_dir().join("session.json"));
    }
}
