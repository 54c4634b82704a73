//! Multi-get: fetch many documents in one `/_mget` round trip.

mod item;
mod service;
mod types;

pub mod version;

pub use item::MultiGetItem;
pub use service::{MultiGetService, MGET_PATH};
pub use types::MultiGetResult;
