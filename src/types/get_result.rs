//! Per-document result of a get operation.

use crate::{Error, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A single document lookup outcome.
///
/// A missing document is not an error: it decodes with `found == false`.
/// Per-document failures (e.g. a missing index inside a batch) arrive in `error`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GetResult {
    #[serde(rename = "_index", default)]
    pub index: String,
    #[serde(rename = "_type", default, skip_serializing_if = "String::is_empty")]
    pub doc_type: String,
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(rename = "_version", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
    #[serde(rename = "_routing", default, skip_serializing_if = "Option::is_none")]
    pub routing: Option<String>,
    #[serde(default)]
    pub found: bool,
    #[serde(rename = "_source", default, skip_serializing_if = "Option::is_none")]
    pub source: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<serde_json::Map<String, serde_json::Value>>,
    /// String in older stores, `{"type", "reason"}` object in newer ones.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

impl GetResult {
    /// Decode `_source` into a caller type. `Ok(None)` when no source was returned.
    pub fn source_as<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        match &self.source {
            None => Ok(None),
            Some(v) => T::deserialize(v)
                .map(Some)
                .map_err(|e| Error::decode(format!("cannot decode _source of {}/{}", self.index, self.id), e)),
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Human readable reason for a per-document failure.
    pub fn error_reason(&self) -> Option<String> {
        match self.error.as_ref()? {
            serde_json::Value::String(s) => Some(s.clone()),
            obj @ serde_json::Value::Object(_) => obj
                .get("reason")
                .or_else(|| obj.get("type"))
                .and_then(|v| v.as_str())
                .map(String::from)
                .or_else(|| Some(obj.to_string())),
            other => Some(other.to_string()),
        }
    }
}
