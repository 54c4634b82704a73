//! Mock HTTP server setup for integration tests

use elastic_mget::Client;
use mockito::{Matcher, Mock, Server, ServerGuard};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Test fixture that manages a mock document store
pub struct MockServerFixture {
    pub server: Arc<Mutex<ServerGuard>>,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self {
            server: Arc::new(Mutex::new(server)),
            base_url,
        }
    }

    /// Create a client pointed at the mock server
    pub fn create_test_client(&self) -> Client {
        Client::builder()
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(5))
            .build()
            .expect("client against mock server")
    }

    /// Expect `GET /_mget` with the given query pairs and JSON body; answer 200 with `response`.
    pub async fn mock_mget(
        &self,
        query: &[(&str, &str)],
        expected_body: serde_json::Value,
        response: &str,
    ) -> Mock {
        let mut server = self.server.lock().await;
        let mut mock = server
            .mock("GET", "/_mget")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(expected_body));
        if !query.is_empty() {
            mock = mock.match_query(Matcher::AllOf(
                query
                    .iter()
                    .map(|(k, v)| Matcher::UrlEncoded(k.to_string(), v.to_string()))
                    .collect(),
            ));
        }
        mock.with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response)
            .create_async()
            .await
    }

    /// Answer any `GET /_mget` with a raw status and body.
    pub async fn mock_raw_response(&self, status: usize, body: &str) -> Mock {
        let mut server = self.server.lock().await;
        server
            .mock("GET", Matcher::Regex(r"^/_mget".to_string()))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}
