//! Tests for the HTTP transport

use super::*;
use crate::config::ClientConfig;
use crate::error::Error;
use crate::types::BackoffType;
use std::time::Duration;
use test_case::test_case;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(base_url: String) -> ClientConfig {
    ClientConfig::builder()
        .base_url(base_url)
        .no_rate_limit()
        .max_retries(0)
        .build()
}

#[test]
fn test_request_config_builder() {
    let config = RequestConfig::new()
        .query("limit", "100")
        .query_opt("start", Some("cursor_1"))
        .query_opt("job_name", None::<String>)
        .header("X-Request-Id", "abc123")
        .json(serde_json::json!({"name": "demo"}));

    assert_eq!(
        config.query,
        vec![
            ("limit".to_string(), "100".to_string()),
            ("start".to_string(), "cursor_1".to_string()),
        ]
    );
    assert_eq!(
        config.headers.get("X-Request-Id"),
        Some(&"abc123".to_string())
    );
    assert!(config.body.is_some());
}

#[tokio::test]
async fn test_get_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "value": 42
        })))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(test_config(mock_server.uri())).unwrap();
    let data: serde_json::Value = client
        .get_json("/projects", RequestConfig::new().query("limit", "5"))
        .await
        .unwrap();

    assert_eq!(data["value"], 42);
}

#[tokio::test]
async fn test_non_success_decodes_error_envelope() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "code": "not_found",
            "message": "Project 'missing' does not exist"
        })))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(test_config(mock_server.uri())).unwrap();
    let err = client
        .get_json::<serde_json::Value>("/projects/missing", RequestConfig::new())
        .await
        .unwrap_err();

    match err {
        Error::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 404);
            assert_eq!(code.as_deref(), Some("not_found"));
            assert!(message.contains("does not exist"));
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_error_body_falls_back_to_raw_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Bad request"))
        .mount(&mock_server)
        .await;

    let client = HttpClient::new(test_config(mock_server.uri())).unwrap();
    let err = client
        .get_json::<serde_json::Value>("/projects", RequestConfig::new())
        .await
        .unwrap_err();

    match err {
        Error::Api {
            status,
            code,
            message,
        } => {
            assert_eq!(status, 400);
            assert!(code.is_none());
            assert_eq!(message, "Bad request");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_retried_then_succeeds() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .base_url(mock_server.uri())
        .no_rate_limit()
        .max_retries(2)
        .backoff(
            BackoffType::Constant,
            Duration::from_millis(1),
            Duration::from_millis(1),
        )
        .build();

    let client = HttpClient::new(config).unwrap();
    let data: serde_json::Value = client
        .get_json("/projects", RequestConfig::new())
        .await
        .unwrap();
    assert_eq!(data["ok"], true);
}

#[tokio::test]
async fn test_client_error_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(404).set_body_string("nope"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = ClientConfig::builder()
        .base_url(mock_server.uri())
        .no_rate_limit()
        .max_retries(3)
        .build();

    let client = HttpClient::new(config).unwrap();
    let err = client
        .get_json::<serde_json::Value>("/projects", RequestConfig::new())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_invalid_base_url_rejected() {
    let result = HttpClient::new(ClientConfig::builder().base_url("not a url").build());
    assert!(result.is_err());
}

#[test_case(BackoffType::Constant, 0, 100; "constant first")]
#[test_case(BackoffType::Constant, 3, 100; "constant later")]
#[test_case(BackoffType::Linear, 0, 100; "linear first")]
#[test_case(BackoffType::Linear, 2, 300; "linear third")]
#[test_case(BackoffType::Exponential, 0, 100; "exponential first")]
#[test_case(BackoffType::Exponential, 3, 800; "exponential fourth")]
fn test_calculate_backoff(backoff_type: BackoffType, attempt: u32, expected_ms: u64) {
    let config = ClientConfig::builder()
        .backoff(
            backoff_type,
            Duration::from_millis(100),
            Duration::from_secs(60),
        )
        .build();
    let client = HttpClient::new(config).unwrap();
    assert_eq!(
        client.calculate_backoff(attempt),
        Duration::from_millis(expected_ms)
    );
}

#[test]
fn test_backoff_capped_at_max() {
    let config = ClientConfig::builder()
        .backoff(
            BackoffType::Exponential,
            Duration::from_millis(100),
            Duration::from_millis(250),
        )
        .build();
    let client = HttpClient::new(config).unwrap();
    assert_eq!(client.calculate_backoff(10), Duration::from_millis(250));
}
