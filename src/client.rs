//! Client handle for the document store.
//!
//! Keep the public surface small: build a [`Client`] once, then create one
//! request service per call (`client.multi_get()`).
//! Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;
mod status;

pub use builder::ClientBuilder;
pub use core::Client;
pub(crate) use status::check_response;
pub use status::error_class_for_status;
