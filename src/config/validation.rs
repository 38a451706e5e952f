use super::Config;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - API domain cannot be empty
/// - API domain must be a valid URL or domain name
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
/// - Timeouts and the concurrency limit must be positive
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    let api_domain = config.api_domain.as_str();
    if api_domain.is_empty() {
        return Err(AppError::config_error("API domain cannot be empty"));
    }

    if !api_domain.starts_with("http://") && !api_domain.starts_with("https://") {
        // Without a scheme it should at least look like a domain
        if !api_domain.contains('.') && !api_domain.starts_with("localhost") {
            return Err(AppError::config_error(
                "API domain must be a valid URL or domain name",
            ));
        }
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

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be at least 1 second"));
    }

    if config.fetch_timeout_seconds == 0 || config.invocation_deadline_seconds == 0 {
        return Err(AppError::config_error(
            "Fetch timeout and invocation deadline must be at least 1 second",
        ));
    }

    if config.max_concurrent_fetches == 0 {
        return Err(AppError::config_error(
            "Max concurrent fetches must be at least 1",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_domain(domain: &str) -> Config {
        Config {
            api_domain: domain.to_string(),
            ..Config::default()
        }
    }

    #[test]
    fn test_accepts_urls_and_domains() {
        for domain in [
            "https://booking.naver.com",
            "http://127.0.0.1:8080",
            "booking.example.com",
            "localhost:3000",
        ] {
            assert!(
                validate_config(&config_with_domain(domain)).is_ok(),
                "{domain} should be accepted"
            );
        }
    }

    #[test]
    fn test_rejects_empty_and_bare_domains() {
        assert!(validate_config(&config_with_domain("")).is_err());
        assert!(validate_config(&config_with_domain("booking")).is_err());
    }

    #[test]
    fn test_rejects_empty_log_path() {
        let config = Config {
            log_file_path: Some(String::new()),
            ..Config::default()
        };
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_creates_missing_log_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir.path().join("logs").join("court_slots.log");
        let config = Config {
            log_file_path: Some(log_path.to_string_lossy().to_string()),
            ..Config::default()
        };

        assert!(validate_config(&config).is_ok());
        assert!(temp_dir.path().join("logs").exists());
    }

    #[test]
    fn test_rejects_zero_limits() {
        let zero_concurrency = Config {
            max_concurrent_fetches: 0,
            ..Config::default()
        };
        let zero_fetch_timeout = Config {
            fetch_timeout_seconds: 0,
            ..Config::default()
        };
        let zero_http_timeout = Config {
            http_timeout_seconds: 0,
            ..Config::default()
        };

        assert!(validate_config(&zero_concurrency).is_err());
        assert!(validate_config(&zero_fetch_timeout).is_err());
        assert!(validate_config(&zero_http_timeout).is_err());
    }
}
