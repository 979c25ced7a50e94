use crate::constants::env_vars;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub mod paths;

use paths::{get_config_path, get_log_dir_path};

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
///
/// Every setting is optional: the tool runs with built-in defaults when no
/// config file exists, and nothing prompts the user on first start.
#[derive(Debug, Default, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path to the log file. If not specified, logs will be written to a
    /// default location under the platform config directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file yields the defaults; environment variables
    /// override config file values.
    ///
    /// # Environment Variables
    /// - `COURTSIDE_LOG_FILE` - Override log file path
    ///
    /// # Errors
    /// Returns an error when an existing config file cannot be read or
    /// parsed, or when the resulting configuration is invalid.
    pub fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path)?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file_path);
        }

        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(path) = &self.log_file_path
            && path.trim().is_empty()
        {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }
        Ok(())
    }

    /// Saves current configuration to the default config file location.
    pub fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path)
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// Shows the config file location and current settings, and handles
    /// the case when no config file exists.
    pub fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load()?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/courtside.log");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            println!("\nDefaults are in effect. Log File Location:");
            println!("{log_dir}/courtside.log");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path, creating the parent
    /// directory if it doesn't exist.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - On directory creation or write failure
    /// * `AppError::TomlSerialize` - On serialization failure
    pub fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Loads configuration from a custom file path (for testing).
    #[allow(dead_code)] // Used in tests
    pub fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[test]
    fn test_config_round_trip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path = config_path.to_string_lossy();

        let config = Config {
            log_file_path: Some("/tmp/courtside-test.log".to_string()),
        };
        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_default_config_has_no_log_path() {
        let config = Config::default();
        assert!(config.log_file_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_log_path_is_invalid() {
        let config = Config {
            log_file_path: Some("   ".to_string()),
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_load_from_missing_file_is_an_error() {
        let result = Config::load_from_path("/nonexistent/courtside/config.toml");
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "log_file_path = [not toml").unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy());
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[test]
    #[serial]
    fn test_env_var_overrides_log_path() {
        // SAFETY: guarded by #[serial]; no other test reads this variable
        // concurrently.
        unsafe { std::env::set_var(env_vars::LOG_FILE, "/tmp/override.log") };
        let config = Config::load().unwrap();
        unsafe { std::env::remove_var(env_vars::LOG_FILE) };

        assert_eq!(config.log_file_path.as_deref(), Some("/tmp/override.log"));
    }
}
