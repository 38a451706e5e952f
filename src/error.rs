use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    // Tool argument errors, raised before any network call
    #[error("Missing required argument: {name}")]
    MissingArgument { name: String },

    #[error("Argument '{name}' must be a {expected}")]
    InvalidArgumentType { name: String, expected: String },

    #[error("Argument '{name}' has an invalid value: {value}")]
    InvalidArgumentValue { name: String, value: String },

    #[error("Invalid month: {month} (expected 1-12)")]
    InvalidMonth { month: i64 },

    #[error("Unknown court name: {name}")]
    UnknownVenue { name: String },

    #[error("Failed to fetch data from API: {0}")]
    ApiFetch(#[from] reqwest::Error),

    #[error("Failed to parse API response: {0}")]
    ApiParse(#[from] serde_json::Error),

    // Specific HTTP status code errors
    #[error("API request not found (404): {url}")]
    ApiNotFound { url: String },

    #[error("API server error ({status}): {message} (URL: {url})")]
    ApiServerError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API client error ({status}): {message} (URL: {url})")]
    ApiClientError {
        status: u16,
        message: String,
        url: String,
    },

    #[error("API rate limit exceeded (429): {message} (URL: {url})")]
    ApiRateLimit { message: String, url: String },

    #[error("API service unavailable ({status}): {message} (URL: {url})")]
    ApiServiceUnavailable {
        status: u16,
        message: String,
        url: String,
    },

    // Network-specific errors
    #[error("Network timeout while fetching data from: {url}")]
    NetworkTimeout { url: String },

    #[error("Connection failed to: {url} - {message}")]
    NetworkConnection { url: String, message: String },

    // Data parsing and validation errors
    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    #[error("API returned empty or missing data: {message} (URL: {url})")]
    ApiNoData { message: String, url: String },

    #[error("GraphQL operation '{operation}' returned errors: {}", messages.join("; "))]
    GraphQl {
        operation: String,
        messages: Vec<String>,
    },

    #[error("Resource id is not an integer string: {value}")]
    InvalidResourceId { value: String },

    #[error("Schedule fetch timed out for resource {resource_id}")]
    FetchTimeout { resource_id: i64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),

    #[error("Failed to serialize output: {0}")]
    OutputSerialize(serde_json::Error),
}

impl AppError {
    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument { name: name.into() }
    }

    pub fn invalid_argument_type(name: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::InvalidArgumentType {
            name: name.into(),
            expected: expected.into(),
        }
    }

    pub fn invalid_argument_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidArgumentValue {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn unknown_venue(name: impl Into<String>) -> Self {
        Self::UnknownVenue { name: name.into() }
    }

    /// Create an API not found error
    pub fn api_not_found(url: impl Into<String>) -> Self {
        Self::ApiNotFound { url: url.into() }
    }

    /// Create an API server error (5xx status codes)
    pub fn api_server_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServerError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API client error (4xx status codes except 404 and 429)
    pub fn api_client_error(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiClientError {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API rate limit error
    pub fn api_rate_limit(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiRateLimit {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an API service unavailable error
    pub fn api_service_unavailable(
        status: u16,
        message: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self::ApiServiceUnavailable {
            status,
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a network timeout error
    pub fn network_timeout(url: impl Into<String>) -> Self {
        Self::NetworkTimeout { url: url.into() }
    }

    /// Create a network connection error
    pub fn network_connection(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::NetworkConnection {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a no data error
    pub fn api_no_data(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiNoData {
            message: message.into(),
            url: url.into(),
        }
    }

    pub fn graphql(operation: impl Into<String>, messages: Vec<String>) -> Self {
        Self::GraphQl {
            operation: operation.into(),
            messages,
        }
    }

    pub fn invalid_resource_id(value: impl Into<String>) -> Self {
        Self::InvalidResourceId {
            value: value.into(),
        }
    }

    /// Check if the error was caused by the caller's arguments.
    /// These are always raised before any request is sent.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::MissingArgument { .. }
                | AppError::InvalidArgumentType { .. }
                | AppError::InvalidArgumentValue { .. }
                | AppError::InvalidMonth { .. }
                | AppError::UnknownVenue { .. }
        )
    }

    /// Check if the error came from talking to the remote booking API
    pub fn is_remote_error(&self) -> bool {
        matches!(
            self,
            AppError::ApiFetch(_)
                | AppError::ApiParse(_)
                | AppError::ApiNotFound { .. }
                | AppError::ApiServerError { .. }
                | AppError::ApiClientError { .. }
                | AppError::ApiRateLimit { .. }
                | AppError::ApiServiceUnavailable { .. }
                | AppError::NetworkTimeout { .. }
                | AppError::NetworkConnection { .. }
                | AppError::ApiMalformedJson { .. }
                | AppError::ApiUnexpectedStructure { .. }
                | AppError::ApiNoData { .. }
                | AppError::GraphQl { .. }
                | AppError::InvalidResourceId { .. }
                | AppError::FetchTimeout { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_helper() {
        let error = AppError::config_error("Invalid configuration");
        assert!(matches!(error, AppError::Config(_)));
        assert_eq!(
            error.to_string(),
            "Configuration error: Invalid configuration"
        );
    }

    #[test]
    fn test_log_setup_error_helper() {
        let error = AppError::log_setup_error("Failed to initialize logger");
        assert!(matches!(error, AppError::LogSetup(_)));
        assert_eq!(
            error.to_string(),
            "Log setup error: Failed to initialize logger"
        );
    }

    #[test]
    fn test_api_server_error_helper() {
        let error = AppError::api_server_error(
            500,
            "Internal server error",
            "https://booking.example.com/graphql?opName=schedule",
        );
        assert!(matches!(error, AppError::ApiServerError { .. }));
        assert_eq!(
            error.to_string(),
            "API server error (500): Internal server error (URL: https://booking.example.com/graphql?opName=schedule)"
        );
    }

    #[test]
    fn test_graphql_error_joins_messages() {
        let error = AppError::graphql(
            "bizItems",
            vec!["bad input".to_string(), "unauthorized".to_string()],
        );
        assert_eq!(
            error.to_string(),
            "GraphQL operation 'bizItems' returned errors: bad input; unauthorized"
        );
    }

    #[test]
    fn test_invalid_month_message() {
        let error = AppError::InvalidMonth { month: 13 };
        assert_eq!(error.to_string(), "Invalid month: 13 (expected 1-12)");
    }

    #[test]
    fn test_input_errors_are_classified() {
        assert!(AppError::missing_argument("courtName").is_input_error());
        assert!(AppError::invalid_argument_type("year", "string").is_input_error());
        assert!(AppError::invalid_argument_value("year", "abc").is_input_error());
        assert!(AppError::InvalidMonth { month: 0 }.is_input_error());
        assert!(AppError::unknown_venue("nowhere").is_input_error());

        assert!(!AppError::missing_argument("courtName").is_remote_error());
        assert!(!AppError::config_error("x").is_input_error());
    }

    #[test]
    fn test_remote_errors_are_classified() {
        let errors = vec![
            AppError::api_not_found("url"),
            AppError::api_server_error(500, "boom", "url"),
            AppError::api_client_error(400, "bad", "url"),
            AppError::api_rate_limit("slow down", "url"),
            AppError::api_service_unavailable(503, "down", "url"),
            AppError::network_timeout("url"),
            AppError::network_connection("url", "refused"),
            AppError::api_malformed_json("not json", "url"),
            AppError::api_unexpected_structure("missing data", "url"),
            AppError::api_no_data("empty", "url"),
            AppError::invalid_resource_id("abc"),
            AppError::FetchTimeout { resource_id: 7 },
        ];

        for error in errors {
            assert!(error.is_remote_error(), "{error} should be remote");
            assert!(!error.is_input_error(), "{error} should not be input");
        }
    }

    #[test]
    fn test_output_serialize_is_local() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = AppError::OutputSerialize(source);
        assert!(!error.is_remote_error());
        assert!(!error.is_input_error());
        assert!(error.to_string().starts_with("Failed to serialize output"));
    }
}
