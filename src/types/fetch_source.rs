//! Source filtering directive.

use serde_json::{json, Value};

/// Controls whether, and which parts of, a document's stored `_source` come back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSourceContext {
    fetch_source: bool,
    includes: Vec<String>,
    excludes: Vec<String>,
}

impl FetchSourceContext {
    pub fn new(fetch_source: bool) -> Self {
        Self {
            fetch_source,
            includes: Vec::new(),
            excludes: Vec::new(),
        }
    }

    /// Add field patterns to return. Wildcards are interpreted by the store.
    pub fn include<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.includes.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Add field patterns to leave out.
    pub fn exclude<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excludes.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn fetch_source(&self) -> bool {
        self.fetch_source
    }

    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    pub fn excludes(&self) -> &[String] {
        &self.excludes
    }

    /// Body form: `false` when disabled, otherwise both pattern lists.
    pub fn to_value(&self) -> Value {
        if !self.fetch_source {
            return Value::Bool(false);
        }
        json!({
            "includes": self.includes,
            "excludes": self.excludes,
        })
    }

    /// Query-string form, for operations that filter `_source` via URL parameters.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if !self.fetch_source {
            params.push(("_source", "false".to_string()));
            return params;
        }
        if !self.includes.is_empty() {
            params.push(("_source_include", self.includes.join(",")));
        }
        if !self.excludes.is_empty() {
            params.push(("_source_exclude", self.excludes.join(",")));
        }
        params
    }
}

impl Default for FetchSourceContext {
    fn default() -> Self {
        Self::new(true)
    }
}
