//! Transport layer: the seam between request assembly and the network.
//!
//! The multi-get service only builds a [`TransportRequest`] and interprets the
//! returned [`TransportResponse`]; connection handling, TLS and timeouts belong
//! to the [`Transport`] implementation.

pub mod http;

pub use http::HttpTransport;

use crate::Result;
use async_trait::async_trait;
use bytes::Bytes;

/// A fully assembled request, relative to the transport's base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    pub method: reqwest::Method,
    /// Operation path including the encoded query string, e.g. `/_mget?refresh=true`.
    pub path: String,
    pub body: Option<serde_json::Value>,
}

/// A response whose body has already been read in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Bytes,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one round trip against the store.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn perform(&self, request: TransportRequest) -> Result<TransportResponse>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
