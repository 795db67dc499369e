//! Focusmate client tests against a mock HTTP server.

use chrono::{DateTime, TimeZone, Utc};
use mockito::Matcher;
use pomox_core::integrations::FocusmateClient;
use pomox_core::storage::FocusmateConfig;
use pomox_core::FocusmateError;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 10, 15, 0).unwrap()
}

fn config(key: &str) -> FocusmateConfig {
    FocusmateConfig {
        api_key: key.to_string(),
    }
}

fn client(server: &mockito::ServerGuard, key: &str) -> FocusmateClient {
    FocusmateClient::with_base_url(reqwest::Client::new(), &config(key), server.url())
}

/// Test: the request carries the API key header and a +/-2h window.
#[tokio::test]
async fn test_active_session_request_shape() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/sessions")
        .match_header("x-api-key", "secret-key")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("start".into(), "2024-01-15T08:15:00.000Z".into()),
            Matcher::UrlEncoded("end".into(), "2024-01-15T12:15:00.000Z".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"sessions": [
                {"sessionId": "past", "duration": 1500000, "startTime": "2024-01-15T09:00:00.000Z",
                 "users": [{"userId": "u1", "completed": true}]},
                {"sessionId": "current", "duration": 1500000, "startTime": "2024-01-15T10:00:00.000Z",
                 "users": [{"userId": "u1", "completed": false}]}
            ]}"#,
        )
        .create_async()
        .await;

    let active = client(&server, "secret-key")
        .active_session(now())
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(active.session_id, "current");
    assert_eq!(active.end_time, Utc.with_ymd_and_hms(2024, 1, 15, 10, 25, 0).unwrap());
    assert_eq!(active.remaining_ms, 600_000);
}

/// Test: 401 maps to an invalid key error.
#[tokio::test]
async fn test_unauthorized_is_invalid_api_key() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/sessions")
        .match_query(Matcher::Any)
        .with_status(401)
        .create_async()
        .await;

    let err = client(&server, "bad").active_session(now()).await.unwrap_err();
    assert!(matches!(err, FocusmateError::InvalidApiKey));
    assert_eq!(err.to_string(), "Invalid Focusmate API key");
}

/// Test: other failures keep their status code.
#[tokio::test]
async fn test_server_error_carries_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/sessions")
        .match_query(Matcher::Any)
        .with_status(500)
        .create_async()
        .await;

    let err = client(&server, "key").active_session(now()).await.unwrap_err();
    assert!(matches!(err, FocusmateError::Api { status: 500 }));
    assert_eq!(err.to_string(), "Focusmate API error: 500");
}

/// Test: an empty session list means no active session.
#[tokio::test]
async fn test_empty_session_list() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/sessions")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"sessions": []}"#)
        .create_async()
        .await;

    let err = client(&server, "key").active_session(now()).await.unwrap_err();
    assert!(matches!(err, FocusmateError::NoActiveSession));
}

/// Test: a missing key fails before any request is made.
#[tokio::test]
async fn test_missing_key_makes_no_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let err = client(&server, "").active_session(now()).await.unwrap_err();
    assert!(matches!(err, FocusmateError::MissingApiKey));
    mock.assert_async().await;
}

/// Test: a body that is not a session list is a decode error.
#[tokio::test]
async fn test_malformed_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/sessions")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("not json")
        .create_async()
        .await;

    let err = client(&server, "key").active_session(now()).await.unwrap_err();
    assert!(matches!(err, FocusmateError::Decode(_)));
}
