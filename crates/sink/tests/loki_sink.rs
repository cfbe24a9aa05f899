//! Loki sink integration tests against a mock push endpoint

use chrono::{TimeZone, Utc};
use hermes_core::{EventRecord, Labels, Severity};
use hermes_sink::{DeliveryError, LokiSink, Sink};
use std::net::TcpListener;
use std::time::Duration;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PUSH_PATH: &str = "/loki/api/v1/push";

fn record() -> EventRecord {
    EventRecord::new(
        "Order limit: arb_hunter sell 0.5 ETH at $3490.12",
        Severity::Info,
        Utc.timestamp_opt(1_717_171_717, 171_717_171).unwrap(),
        Labels::default(),
    )
}

fn endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), PUSH_PATH)
}

#[tokio::test]
async fn test_posts_exact_body_and_accepts_204() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(PUSH_PATH))
        .and(header("content-type", "application/json"))
        .and(body_string(
            r#"{"streams":[{"stream":{"job":"crypto-exchange","level":"INFO"},"values":[["1717171717171717171","Order limit: arb_hunter sell 0.5 ETH at $3490.12"]]}]}"#,
        ))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let sink = LokiSink::new(endpoint(&server)).unwrap();
    sink.emit(&record()).await.unwrap();
}

#[tokio::test]
async fn test_non_204_is_a_delivery_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(PUSH_PATH))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let sink = LokiSink::new(endpoint(&server)).unwrap();
    assert_eq!(
        sink.emit(&record()).await,
        Err(DeliveryError::Status(200))
    );
}

#[tokio::test]
async fn test_server_error_is_a_delivery_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let sink = LokiSink::new(endpoint(&server)).unwrap();
    assert_eq!(
        sink.emit(&record()).await,
        Err(DeliveryError::Status(500))
    );
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(204).set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let sink = LokiSink::with_timeout(endpoint(&server), Duration::from_millis(50)).unwrap();
    assert_eq!(sink.emit(&record()).await, Err(DeliveryError::Timeout));
}

#[tokio::test]
async fn test_unreachable_backend_is_a_transport_failure() {
    // Bind then release a port so nothing is listening on it
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let sink = LokiSink::new(format!("http://127.0.0.1:{}{}", port, PUSH_PATH)).unwrap();
    assert!(matches!(
        sink.emit(&record()).await,
        Err(DeliveryError::Transport(_))
    ));
}
