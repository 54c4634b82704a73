use super::{MultiGetItem, MultiGetResult};
use crate::client::{check_response, Client};
use crate::transport::TransportRequest;
use crate::{Error, ErrorContext, Result};
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Path of the multi-get operation. Index and type travel in the body.
pub const MGET_PATH: &str = "/_mget";

/// Builder for a batched document lookup.
///
/// Items keep their insertion order in the request body. Calling
/// [`execute`](Self::execute) again re-sends the current state.
///
/// ```rust,no_run
/// use elastic_mget::{Client, MultiGetItem};
///
/// # async fn run() -> elastic_mget::Result<()> {
/// let client = Client::builder().base_url("http://localhost:9200").build()?;
/// let res = client
///     .multi_get()
///     .preference("_local")
///     .realtime(true)
///     .add(MultiGetItem::new("1").index("tweets").doc_type("tweet"))
///     .add(MultiGetItem::new("2").index("tweets").doc_type("tweet"))
///     .execute()
///     .await?;
/// for doc in res.found() {
///     println!("{}: {:?}", doc.id, doc.source);
/// }
/// # Ok(())
/// # }
/// ```
pub struct MultiGetService<'a> {
    client: &'a Client,
    preference: Option<String>,
    realtime: Option<bool>,
    refresh: Option<bool>,
    items: Vec<MultiGetItem>,
}

impl<'a> MultiGetService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self {
            client,
            preference: None,
            realtime: None,
            refresh: None,
            items: Vec::new(),
        }
    }

    /// Shard copy preference, e.g. `_local` or `_primary`.
    pub fn preference(mut self, preference: impl Into<String>) -> Self {
        self.preference = Some(preference.into());
        self
    }

    /// Read the latest indexed state instead of the last refreshed one.
    pub fn realtime(mut self, realtime: bool) -> Self {
        self.realtime = Some(realtime);
        self
    }

    /// Refresh the relevant shards before reading.
    pub fn refresh(mut self, refresh: bool) -> Self {
        self.refresh = Some(refresh);
        self
    }

    pub fn add(mut self, item: MultiGetItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn add_all<I>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = MultiGetItem>,
    {
        self.items.extend(items);
        self
    }

    pub fn items(&self) -> &[MultiGetItem] {
        &self.items
    }

    /// Request body: `{"docs": [<item>, ...]}` in insertion order.
    pub fn to_value(&self) -> Value {
        let docs: Vec<Value> = self.items.iter().map(MultiGetItem::to_value).collect();
        json!({ "docs": docs })
    }

    /// Query parameters that are set, in `realtime`, `preference`, `refresh` order.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(realtime) = self.realtime {
            params.push(("realtime", realtime.to_string()));
        }
        if let Some(preference) = &self.preference {
            if !preference.is_empty() {
                params.push(("preference", preference.clone()));
            }
        }
        if let Some(refresh) = self.refresh {
            params.push(("refresh", refresh.to_string()));
        }
        params
    }

    /// Operation path with the encoded query string, if any parameter is set.
    pub fn path(&self) -> String {
        let params = self.query_params();
        if params.is_empty() {
            return MGET_PATH.to_string();
        }
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(params.iter().map(|(k, v)| (*k, v.as_str())))
            .finish();
        format!("{}?{}", MGET_PATH, query)
    }

    fn validate(&self) -> Result<()> {
        if let Some(pos) = self.items.iter().position(|item| item.get_id().is_empty()) {
            return Err(Error::validation_with_context(
                "document id must not be empty",
                ErrorContext::new()
                    .with_field_path(format!("docs[{}]._id", pos))
                    .with_source("mget"),
            ));
        }
        Ok(())
    }

    /// Send the batch and decode the response.
    ///
    /// Any failure aborts the whole batch. Documents the store could not find
    /// are not failures: they come back with `found == false`.
    pub async fn execute(&self) -> Result<MultiGetResult> {
        self.validate()?;

        let request = TransportRequest {
            method: reqwest::Method::GET,
            path: self.path(),
            body: Some(self.to_value()),
        };
        debug!(items = self.items.len(), path = %request.path, "executing multi-get");

        let response = self.client.perform(request).await.map_err(|e| {
            warn!(error = %e, "multi-get request failed");
            e
        })?;
        check_response(&response)?;

        let result: MultiGetResult = serde_json::from_slice(&response.body).map_err(|e| {
            warn!(error = %e, bytes = response.body.len(), "cannot decode multi-get response");
            Error::decode("invalid multi-get response", e)
        })?;
        debug!(docs = result.len(), "multi-get response decoded");
        Ok(result)
    }
}
