//! # elastic-mget
//!
//! Batched document retrieval for Elasticsearch-compatible stores: describe the
//! documents you want, send them in a single `GET /_mget` request, and get
//! typed per-document results back.
//!
//! ## Overview
//!
//! - [`MultiGetItem`] describes one document (index, type, id, routing, stored
//!   fields, source filtering, version constraint).
//! - [`MultiGetService`] collects items plus request-level options
//!   (`preference`, `realtime`, `refresh`), builds the body and query string,
//!   and executes the request through the client's [`transport::Transport`].
//! - [`MultiGetResult`] holds one [`GetResult`] per requested document.
//!
//! Any failure (bad configuration, transport, non-2xx status, undecodable body)
//! aborts the whole batch with an [`Error`]. A document that simply does not
//! exist is not a failure; it comes back with `found == false`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use elastic_mget::{Client, FetchSourceContext, MultiGetItem};
//!
//! #[tokio::main]
//! async fn main() -> elastic_mget::Result<()> {
//!     let client = Client::builder()
//!         .base_url("http://localhost:9200")
//!         .build()?;
//!
//!     let res = client
//!         .multi_get()
//!         .realtime(true)
//!         .add(MultiGetItem::new("1").index("tweets").doc_type("tweet"))
//!         .add(
//!             MultiGetItem::new("2")
//!                 .index("tweets")
//!                 .doc_type("tweet")
//!                 .fetch_source(FetchSourceContext::new(true).include(["user"])),
//!         )
//!         .execute()
//!         .await?;
//!
//!     for doc in &res {
//!         println!("{} found={}", doc.id, doc.found);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client handle, builder and response status checking |
//! | [`mget`] | Multi-get item, request builder and result |
//! | [`transport`] | Transport trait and the default HTTP transport |
//! | [`types`] | Store-defined types (`GetResult`, `FetchSourceContext`) |

pub mod client;
pub mod mget;
pub mod transport;
pub mod types;

pub use client::{Client, ClientBuilder};
pub use mget::{version, MultiGetItem, MultiGetResult, MultiGetService};
pub use types::{FetchSourceContext, GetResult};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
