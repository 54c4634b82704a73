//! Integration tests for the multi-get request/response cycle

use crate::integration::mock_server::MockServerFixture;
use elastic_mget::{FetchSourceContext, MultiGetItem};
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
struct Tweet {
    user: String,
    message: String,
}

#[tokio::test]
async fn test_preference_and_single_item() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_mget(
            &[("preference", "_local")],
            json!({"docs": [{"_index": "tweets", "_type": "tweet", "_id": "1"}]}),
            r#"{"docs":[{"_index":"tweets","_type":"tweet","_id":"1","_version":1,"found":true,
                "_source":{"user":"olivere","message":"Welcome to Golang and Elasticsearch."}}]}"#,
        )
        .await;

    let client = fixture.create_test_client();
    let res = client
        .multi_get()
        .preference("_local")
        .add(MultiGetItem::new("1").index("tweets").doc_type("tweet"))
        .execute()
        .await
        .expect("multi-get");

    mock.assert_async().await;
    assert_eq!(res.len(), 1);
    let doc = &res.docs[0];
    assert!(doc.found);
    assert_eq!(doc.version, Some(1));
    let tweet: Tweet = doc.source_as().unwrap().unwrap();
    assert_eq!(tweet.user, "olivere");
    assert!(tweet.message.starts_with("Welcome"));
}

#[tokio::test]
async fn test_realtime_refresh_and_mixed_outcomes() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_mget(
            &[("realtime", "true"), ("refresh", "false")],
            json!({"docs": [
                {"_index": "tweets", "_id": "1", "_fields": ["user", "message"]},
                {"_index": "tweets", "_id": "2", "_routing": "olivere",
                 "_source": {"includes": ["user"], "excludes": []}},
                {"_index": "missing", "_id": "3"},
            ]}),
            r#"{"docs":[
                {"_index":"tweets","_type":"tweet","_id":"1","found":true,
                 "fields":{"user":["olivere"],"message":["hello"]}},
                {"_index":"tweets","_type":"tweet","_id":"2","_routing":"olivere","found":true,
                 "_source":{"user":"olivere"}},
                {"_index":"missing","_id":"3",
                 "error":{"type":"index_not_found_exception","reason":"no such index [missing]"}}
            ]}"#,
        )
        .await;

    let client = fixture.create_test_client();
    let res = client
        .multi_get()
        .realtime(true)
        .refresh(false)
        .add(MultiGetItem::new("1").index("tweets").fields(["user"]).fields(["message"]))
        .add(
            MultiGetItem::new("2")
                .index("tweets")
                .routing("olivere")
                .fetch_source(FetchSourceContext::new(true).include(["user"])),
        )
        .add(MultiGetItem::new("3").index("missing"))
        .execute()
        .await
        .expect("per-document failures do not fail the batch");

    mock.assert_async().await;
    assert_eq!(res.len(), 3);
    assert_eq!(res.found().count(), 2);
    let fields = res.find("tweets", "1").and_then(|d| d.fields.as_ref()).unwrap();
    assert_eq!(fields["user"], json!(["olivere"]));
    assert_eq!(
        res.find("tweets", "2").and_then(|d| d.routing.as_deref()),
        Some("olivere")
    );
    let missing = res.find("missing", "3").unwrap();
    assert!(!missing.found);
    assert_eq!(missing.error_reason().as_deref(), Some("no such index [missing]"));
}

#[tokio::test]
async fn test_empty_batch_without_query_string() {
    let fixture = MockServerFixture::new().await;
    let mock = fixture
        .mock_mget(&[], json!({"docs": []}), r#"{"docs":[]}"#)
        .await;

    let client = fixture.create_test_client();
    let svc = client.multi_get();
    assert_eq!(svc.path(), "/_mget");
    let res = svc.execute().await.expect("empty batch");

    mock.assert_async().await;
    assert!(res.is_empty());
}

#[tokio::test]
async fn test_results_follow_store_order() {
    let fixture = MockServerFixture::new().await;
    let _mock = fixture
        .mock_mget(
            &[],
            json!({"docs": [{"_id": "a"}, {"_id": "b"}]}),
            r#"{"docs":[{"_index":"i","_id":"b","found":true},{"_index":"i","_id":"a","found":false}]}"#,
        )
        .await;

    let client = fixture.create_test_client();
    let res = client
        .multi_get()
        .add_all(["a", "b"].into_iter().map(MultiGetItem::new))
        .execute()
        .await
        .unwrap();

    let ids: Vec<&str> = res.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["b", "a"]);
    assert!(res.find("", "b").unwrap().found);
}
