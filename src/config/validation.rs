use super::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API base URL cannot be empty and must start with http:// or https://
/// - Season cannot be empty or contain '/'
/// - HTTP timeout and refresh interval must be at least one second
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    let api_base_url = config.api_base_url.trim();
    if api_base_url.is_empty() {
        return Err(AppError::config_error("API base URL cannot be empty"));
    }

    if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
        return Err(AppError::config_error(
            "API base URL must start with http:// or https://",
        ));
    }

    validate_season(&config.season)?;

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error(
            "HTTP timeout must be at least 1 second",
        ));
    }

    if config.refresh_interval_seconds == 0 {
        return Err(AppError::config_error(
            "Refresh interval must be at least 1 second",
        ));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

/// Checks that a season identifier can be placed in a URL path segment.
/// Values such as "2023" or "current" are accepted as-is.
pub fn validate_season(season: &str) -> Result<(), AppError> {
    if season.trim().is_empty() {
        return Err(AppError::config_error("Season cannot be empty"));
    }
    if season.contains('/') || season.chars().any(char::is_whitespace) {
        return Err(AppError::config_error(format!(
            "Season '{season}' must be a single path segment"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_base_url() {
        let config = Config {
            api_base_url: "  ".to_string(),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_base_url_without_scheme() {
        let config = Config {
            api_base_url: "ergast.com/api/f1".to_string(),
            ..Config::default()
        };
        let error = validate_config(&config).unwrap_err();
        assert!(error.to_string().contains("http://"));
    }

    #[test]
    fn test_zero_timeouts_rejected() {
        let config = Config {
            http_timeout_seconds: 0,
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());

        let config = Config {
            refresh_interval_seconds: 0,
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_season_rules() {
        assert!(validate_season("2023").is_ok());
        assert!(validate_season("current").is_ok());
        assert!(validate_season("").is_err());
        assert!(validate_season("2023/5").is_err());
        assert!(validate_season("20 23").is_err());
    }

    #[test]
    fn test_empty_log_path_rejected() {
        let config = Config {
            log_file_path: Some(String::new()),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_log_directory_is_created() {
        let temp_dir = tempdir().unwrap();
        let log_path = temp_dir.path().join("logs").join("f1_hub.log");
        let config = Config {
            log_file_path: Some(log_path.to_string_lossy().to_string()),
            ..Config::default()
        };

        assert!(validate_config(&config).is_ok());
        assert!(temp_dir.path().join("logs").exists());
    }
}
