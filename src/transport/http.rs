use super::{Transport, TransportError, TransportRequest, TransportResponse};
use crate::{Error, ErrorContext, Result};
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default [`Transport`] backed by a pooled `reqwest::Client`.
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpTransport {
    pub fn new(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Build the underlying HTTP client with pool and timeout settings.
    pub(crate) fn build_client(
        timeout: Duration,
        pool_max_idle_per_host: usize,
        proxy: Option<reqwest::Proxy>,
    ) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(pool_max_idle_per_host)
            .pool_idle_timeout(Some(Duration::from_secs(90)));

        if let Some(proxy) = proxy {
            builder = builder.proxy(proxy);
        }

        builder.build().map_err(|e| {
            Error::configuration_with_context(
                format!("Failed to create HTTP client: {}", e),
                ErrorContext::new().with_source("http_transport"),
            )
        })
    }

    /// Join the operation path (with its query string) onto the base URL.
    ///
    /// Any path prefix on the base URL is kept, so `http://host/es` + `/_mget`
    /// yields `http://host/es/_mget`.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url> {
        let raw = format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path);
        Url::parse(&raw).map_err(|e| {
            Error::configuration_with_context(
                format!("Cannot build request URL: {}", e),
                ErrorContext::new()
                    .with_field_path("request.path")
                    .with_details(raw)
                    .with_source("http_transport"),
            )
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn perform(&self, request: TransportRequest) -> Result<TransportResponse> {
        let url = self.endpoint(&request.path)?;
        debug!(method = %request.method, %url, "sending request");

        let mut req = self
            .client
            .request(request.method, url)
            .header(ACCEPT, "application/json");
        if let Some(body) = &request.body {
            req = req.header(CONTENT_TYPE, "application/json").json(body);
        }

        let response = req.send().await.map_err(TransportError::Http)?;
        let status = response.status().as_u16();
        // Read the whole body so the connection is released before we return.
        let body = response.bytes().await.map_err(TransportError::Http)?;

        Ok(TransportResponse { status, body })
    }
}
