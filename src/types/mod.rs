//! Store-defined types shared by document operations.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`FetchSourceContext`] | Which parts of a document's `_source` to return |
//! | [`GetResult`] | One document as returned by the store |
//!
//! ## Example
//!
//! ```rust
//! use elastic_mget::types::{FetchSourceContext, GetResult};
//!
//! let filter = FetchSourceContext::new(true)
//!     .include(["user", "message"])
//!     .exclude(["*.raw"]);
//! assert_eq!(
//!     filter.to_value(),
//!     serde_json::json!({"includes": ["user", "message"], "excludes": ["*.raw"]})
//! );
//!
//! let doc: GetResult = serde_json::from_str(
//!     r#"{"_index":"tweets","_type":"tweet","_id":"1","found":true,"_source":{"user":"olivere"}}"#,
//! ).unwrap();
//! assert!(doc.found);
//! ```

pub mod fetch_source;
pub mod get_result;

pub use fetch_source::FetchSourceContext;
pub use get_result::GetResult;
