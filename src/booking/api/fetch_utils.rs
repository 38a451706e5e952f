//! GraphQL POST helper with status mapping and response classification

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument, warn};

use crate::booking::models::{GraphQlRequest, GraphQlResponse};
use crate::constants::ERROR_BODY_PREVIEW_CHARS;
use crate::error::AppError;

fn preview(body: &str) -> String {
    body.chars().take(ERROR_BODY_PREVIEW_CHARS).collect()
}

/// Posts one GraphQL operation and returns its `data` payload.
///
/// Non-success statuses become status-specific errors carrying a preview of
/// the response body. A response without `data` is an error; GraphQL `errors`
/// next to usable `data` are only logged.
#[instrument(skip(client, variables, query))]
pub(super) async fn post_graphql<V, T>(
    client: &Client,
    url: &str,
    operation: &'static str,
    variables: V,
    query: &'static str,
) -> Result<T, AppError>
where
    V: Serialize,
    T: DeserializeOwned,
{
    let request = GraphQlRequest {
        operation_name: operation,
        variables,
        query,
    };

    let response = match client.post(url).json(&request).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {}: {}", url, e);
            return Err(if e.is_timeout() {
                AppError::network_timeout(url)
            } else if e.is_connect() {
                AppError::network_connection(url, e.to_string())
            } else {
                AppError::ApiFetch(e)
            });
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response text from URL {}: {}", url, e);
            return Err(AppError::ApiFetch(e));
        }
    };

    if !status.is_success() {
        let status_code = status.as_u16();
        let body = preview(&response_text);
        let message = if body.trim().is_empty() {
            status.canonical_reason().unwrap_or("Unknown error").to_string()
        } else {
            body
        };

        error!("HTTP {} from {}: {}", status_code, url, response_text);

        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(message, url),
            400..=499 => AppError::api_client_error(status_code, message, url),
            502 | 503 => AppError::api_service_unavailable(status_code, message, url),
            _ => AppError::api_server_error(status_code, message, url),
        });
    }

    debug!("Response length: {} bytes", response_text.len());

    let envelope = match serde_json::from_str::<GraphQlResponse<T>>(&response_text) {
        Ok(parsed) => parsed,
        Err(e) => {
            error!("Failed to parse {} response: {} (URL: {})", operation, e, url);
            error!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );

            return Err(if response_text.trim().is_empty() {
                AppError::api_no_data("Response body is empty", url)
            } else if !response_text.trim_start().starts_with('{')
                && !response_text.trim_start().starts_with('[')
            {
                AppError::api_malformed_json("Response is not valid JSON", url)
            } else {
                AppError::api_unexpected_structure(e.to_string(), url)
            });
        }
    };

    let messages: Vec<String> = envelope
        .errors
        .unwrap_or_default()
        .into_iter()
        .map(|e| e.message)
        .collect();

    match envelope.data {
        Some(data) => {
            if !messages.is_empty() {
                warn!(
                    "{} returned data with GraphQL errors: {}",
                    operation,
                    messages.join("; ")
                );
            }
            Ok(data)
        }
        None if !messages.is_empty() => Err(AppError::graphql(operation, messages)),
        None => Err(AppError::api_no_data(
            format!("{operation} response has no data"),
            url,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::api::http_client::create_test_http_client;
    use serde::Deserialize;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{body_partial_json, header, method, path, query_param},
    };

    #[derive(Debug, Deserialize)]
    struct Echo {
        value: i32,
    }

    async fn post_echo(server: &MockServer) -> Result<Echo, AppError> {
        let client = create_test_http_client();
        let url = format!("{}/graphql?opName=echo", server.uri());
        post_graphql(&client, &url, "echo", json!({"x": 1}), "query echo { value }").await
    }

    #[tokio::test]
    async fn test_posts_operation_and_returns_data() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/graphql"))
            .and(query_param("opName", "echo"))
            .and(header("content-type", "application/json"))
            .and(body_partial_json(json!({"operationName": "echo", "variables": {"x": 1}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"value": 7}})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let echo = post_echo(&mock_server).await.unwrap();
        assert_eq!(echo.value, 7);
    }

    #[tokio::test]
    async fn test_server_error_carries_status_and_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("database exploded"))
            .mount(&mock_server)
            .await;

        match post_echo(&mock_server).await {
            Err(AppError::ApiServerError {
                status, message, ..
            }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "database exploded");
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_long_error_body_is_shortened_in_error() {
        let mock_server = MockServer::start().await;
        let body = "x".repeat(ERROR_BODY_PREVIEW_CHARS * 2);

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string(body))
            .mount(&mock_server)
            .await;

        match post_echo(&mock_server).await {
            Err(AppError::ApiServerError { message, .. }) => {
                assert_eq!(message.chars().count(), ERROR_BODY_PREVIEW_CHARS);
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_status_codes_map_to_error_kinds() {
        let cases = [
            (404u16, "not_found"),
            (429, "rate_limit"),
            (400, "client"),
            (503, "unavailable"),
        ];

        for (status, kind) in cases {
            let mock_server = MockServer::start().await;
            Mock::given(method("POST"))
                .respond_with(ResponseTemplate::new(status))
                .mount(&mock_server)
                .await;

            let err = post_echo(&mock_server).await.unwrap_err();
            let matched = match kind {
                "not_found" => matches!(err, AppError::ApiNotFound { .. }),
                "rate_limit" => matches!(err, AppError::ApiRateLimit { .. }),
                "client" => matches!(err, AppError::ApiClientError { status: 400, .. }),
                _ => matches!(err, AppError::ApiServiceUnavailable { status: 503, .. }),
            };
            assert!(matched, "status {status} mapped to {err:?}");
        }
    }

    #[tokio::test]
    async fn test_graphql_errors_without_data() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": null,
                "errors": [{"message": "businessId is required"}]
            })))
            .mount(&mock_server)
            .await;

        match post_echo(&mock_server).await {
            Err(AppError::GraphQl {
                operation,
                messages,
            }) => {
                assert_eq!(operation, "echo");
                assert_eq!(messages, vec!["businessId is required".to_string()]);
            }
            other => panic!("expected GraphQL error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unparseable_bodies_are_classified() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&mock_server)
            .await;
        assert!(matches!(
            post_echo(&mock_server).await,
            Err(AppError::ApiMalformedJson { .. })
        ));

        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"other": 1}})))
            .mount(&mock_server)
            .await;
        assert!(matches!(
            post_echo(&mock_server).await,
            Err(AppError::ApiUnexpectedStructure { .. })
        ));

        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;
        assert!(matches!(
            post_echo(&mock_server).await,
            Err(AppError::ApiNoData { .. })
        ));
    }
}
