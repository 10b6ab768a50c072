use crate::constants::{self, env_vars};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the Ergast-compatible API, without a trailing season segment.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Season shown when none is given on the command line.
    #[serde(default = "default_season")]
    pub season: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 10 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    /// Seconds between refreshes in watch mode. Defaults to 60 seconds.
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval_seconds: u64,
}

fn default_api_base_url() -> String {
    constants::DEFAULT_API_BASE_URL.to_string()
}

fn default_season() -> String {
    constants::DEFAULT_SEASON.to_string()
}

fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_refresh_interval() -> u64 {
    constants::DEFAULT_REFRESH_INTERVAL_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: default_api_base_url(),
            season: default_season(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            refresh_interval_seconds: default_refresh_interval(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, defaults are used; nothing is written.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `F1_HUB_API_BASE_URL` - Override API base URL
    /// - `F1_HUB_SEASON` - Override default season
    /// - `F1_HUB_LOG_FILE` - Override log file path
    /// - `F1_HUB_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 10)
    /// - `F1_HUB_REFRESH_INTERVAL` - Override refresh interval in seconds (default: 60)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - The file could not be read or parsed, or validation failed
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies environment variable overrides. Unparseable numeric values
    /// are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(api_base_url) = std::env::var(env_vars::API_BASE_URL) {
            self.api_base_url = api_base_url;
        }

        if let Ok(season) = std::env::var(env_vars::SEASON) {
            self.season = season;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Some(interval) = std::env::var(env_vars::REFRESH_INTERVAL)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.refresh_interval_seconds = interval;
        }
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
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
    /// # Notes
    /// - Shows config file location and current settings
    /// - Shows defaults when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let has_file = Path::new(&config_path).exists();
        let config = Config::load().await?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        if !has_file {
            println!("(No file yet, showing defaults)");
        }
        println!("────────────────────────────────────");
        println!("API Base URL:");
        println!("{}", config.api_base_url);
        println!("────────────────────────────────────");
        println!("Season:");
        println!("{}", config.season);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Refresh Interval:");
        println!("{} seconds", config.refresh_interval_seconds);
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist. A trailing slash on
    /// the base URL is dropped before writing.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(&Config {
            api_base_url: self.api_base_url.trim_end_matches('/').to_string(),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path. Missing keys fall back
    /// to their defaults.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
