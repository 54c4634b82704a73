use super::version;
use crate::types::FetchSourceContext;
use serde_json::{Map, Value};

/// One document to retrieve in a multi-get batch.
///
/// Only the document id is mandatory. Everything else is emitted into the
/// request body only when set.
///
/// ```rust
/// use elastic_mget::MultiGetItem;
///
/// let item = MultiGetItem::new("1")
///     .index("tweets")
///     .doc_type("tweet")
///     .routing("olivere")
///     .fields(["user"])
///     .fields(["message", "retweets"]);
///
/// assert_eq!(
///     item.to_value(),
///     serde_json::json!({
///         "_index": "tweets",
///         "_type": "tweet",
///         "_id": "1",
///         "_routing": "olivere",
///         "_fields": ["user", "message", "retweets"],
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MultiGetItem {
    index: String,
    doc_type: String,
    id: String,
    routing: String,
    fields: Option<Vec<String>>,
    version: i64,
    version_type: Option<String>,
    fetch_source: Option<FetchSourceContext>,
}

impl MultiGetItem {
    /// Item for the given document id, everything else unset.
    pub fn new(id: impl Into<String>) -> Self {
        Self::default().id(id)
    }

    /// Target index. Empty means the store's default.
    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.index = index.into();
        self
    }

    /// Mapping type, for stores that still use them.
    pub fn doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = doc_type.into();
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn routing(mut self, routing: impl Into<String>) -> Self {
        self.routing = routing.into();
        self
    }

    /// Append stored fields to return. Repeated calls accumulate in call order;
    /// duplicates are kept.
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields
            .get_or_insert_with(Vec::new)
            .extend(fields.into_iter().map(Into::into));
        self
    }

    /// Concurrency-version constraint. See [`crate::mget::version`] for the sentinel values;
    /// any other number is passed through unchanged.
    pub fn version(mut self, version: i64) -> Self {
        self.version = version;
        self
    }

    /// One of `internal` (the store default), `external`, `external_gt`,
    /// `external_gte` or `force`. Not validated here.
    pub fn version_type(mut self, version_type: impl Into<String>) -> Self {
        self.version_type = Some(version_type.into());
        self
    }

    pub fn fetch_source(mut self, ctx: FetchSourceContext) -> Self {
        self.fetch_source = Some(ctx);
        self
    }

    pub fn get_index(&self) -> &str {
        &self.index
    }

    pub fn get_doc_type(&self) -> &str {
        &self.doc_type
    }

    pub fn get_id(&self) -> &str {
        &self.id
    }

    pub fn get_routing(&self) -> &str {
        &self.routing
    }

    pub fn get_fields(&self) -> Option<&[String]> {
        self.fields.as_deref()
    }

    pub fn get_version(&self) -> i64 {
        self.version
    }

    pub fn get_version_type(&self) -> Option<&str> {
        self.version_type.as_deref()
    }

    pub fn get_fetch_source(&self) -> Option<&FetchSourceContext> {
        self.fetch_source.as_ref()
    }

    /// Body form of this item inside `{"docs": [...]}`.
    ///
    /// `_id` is always present, even when empty. Version and version type are
    /// not part of the body.
    pub fn to_value(&self) -> Value {
        let mut source = Map::new();

        if !self.index.is_empty() {
            source.insert("_index".into(), Value::String(self.index.clone()));
        }
        if !self.doc_type.is_empty() {
            source.insert("_type".into(), Value::String(self.doc_type.clone()));
        }
        source.insert("_id".into(), Value::String(self.id.clone()));

        if let Some(ctx) = &self.fetch_source {
            source.insert("_source".into(), ctx.to_value());
        }
        // An explicitly empty list is still sent.
        if let Some(fields) = &self.fields {
            source.insert(
                "_fields".into(),
                Value::Array(fields.iter().cloned().map(Value::String).collect()),
            );
        }
        if !self.routing.is_empty() {
            source.insert("_routing".into(), Value::String(self.routing.clone()));
        }

        Value::Object(source)
    }
}

impl Default for MultiGetItem {
    fn default() -> Self {
        Self {
            index: String::new(),
            doc_type: String::new(),
            id: String::new(),
            routing: String::new(),
            fields: None,
            version: version::MATCH_ANY,
            version_type: None,
            fetch_source: None,
        }
    }
}
