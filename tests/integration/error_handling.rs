//! Integration tests for failure propagation
//!
//! Every failure aborts the batch; no partial results are returned.

use crate::integration::mock_server::MockServerFixture;
use elastic_mget::{Client, Error, MultiGetItem};
use std::time::Duration;

fn one_item() -> MultiGetItem {
    MultiGetItem::new("1").index("tweets").doc_type("tweet")
}

#[tokio::test]
async fn test_server_error_is_remote_error() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_raw_response(500, r#"{"error":"NullPointerException[null]","status":500}"#)
        .await;

    let client = fixture.create_test_client();
    let err = client
        .multi_get()
        .add(one_item())
        .execute()
        .await
        .unwrap_err();

    match err {
        Error::Remote {
            status,
            class,
            message,
            retryable,
        } => {
            assert_eq!(status, 500);
            assert_eq!(class, "server_error");
            assert_eq!(message, "NullPointerException[null]");
            assert!(!retryable);
        }
        other => panic!("expected remote error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_overloaded_store_is_marked_retryable() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture.mock_raw_response(503, "").await;

    let client = fixture.create_test_client();
    let err = client
        .multi_get()
        .add(one_item())
        .execute()
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
    assert!(matches!(err, Error::Remote { retryable: true, .. }));
}

#[tokio::test]
async fn test_truncated_json_is_decode_error() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_raw_response(200, r#"{"docs":[{"_index":"tweets","_id":"#)
        .await;

    let client = fixture.create_test_client();
    let err = client
        .multi_get()
        .add(one_item())
        .execute()
        .await
        .unwrap_err();
    assert!(err.is_decode(), "got {:?}", err);
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Nothing listens on port 1.
    let client = Client::builder()
        .base_url("http://127.0.0.1:1")
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    let err = client
        .multi_get()
        .add(one_item())
        .execute()
        .await
        .unwrap_err();
    assert!(err.is_transport(), "got {:?}", err);
}

#[tokio::test]
async fn test_malformed_base_url_fails_before_network() {
    let err = Client::builder().base_url("http//missing-colon").build().unwrap_err();
    assert!(matches!(err, Error::Configuration { .. }));
}
