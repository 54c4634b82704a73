use crate::client::core::Client;
use crate::transport::{HttpTransport, Transport};
use crate::{Error, ErrorContext, Result};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:9200";

const ENV_URL: &str = "ELASTIC_URL";
const ENV_TIMEOUT_SECS: &str = "ELASTIC_HTTP_TIMEOUT_SECS";
const ENV_POOL_MAX_IDLE_PER_HOST: &str = "ELASTIC_HTTP_POOL_MAX_IDLE_PER_HOST";
const ENV_PROXY_URL: &str = "ELASTIC_PROXY_URL";

struct HttpSettings {
    base_url: Url,
    timeout: Duration,
    pool_max_idle_per_host: usize,
    proxy: Option<reqwest::Proxy>,
}

/// Builder for creating clients with custom configuration.
///
/// Every setting falls back to an environment variable, then to a default:
/// - `ELASTIC_URL` (default `http://127.0.0.1:9200`)
/// - `ELASTIC_HTTP_TIMEOUT_SECS` (default 30)
/// - `ELASTIC_HTTP_POOL_MAX_IDLE_PER_HOST` (default 32)
/// - `ELASTIC_PROXY_URL` (unset by default)
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    pool_max_idle_per_host: Option<usize>,
    proxy_url: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            timeout: None,
            pool_max_idle_per_host: None,
            proxy_url: None,
            transport: None,
        }
    }

    /// Base URL of the store, e.g. `http://localhost:9200`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Whole-request timeout enforced by the HTTP client.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn pool_max_idle_per_host(mut self, n: usize) -> Self {
        self.pool_max_idle_per_host = Some(n);
        self
    }

    pub fn proxy(mut self, url: impl Into<String>) -> Self {
        self.proxy_url = Some(url.into());
        self
    }

    /// Use a custom transport instead of the built-in HTTP one.
    ///
    /// HTTP settings (base URL, timeout, pool, proxy) are ignored in that case.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        if let Some(transport) = &self.transport {
            return Ok(Client::with_transport(transport.clone()));
        }

        let settings = self.http_settings(|key| env::var(key).ok())?;
        let http = HttpTransport::build_client(
            settings.timeout,
            settings.pool_max_idle_per_host,
            settings.proxy,
        )?;
        Ok(Client::with_transport(Arc::new(HttpTransport::new(
            http,
            settings.base_url,
        ))))
    }

    /// Resolve HTTP settings: explicit setter, then `env`, then the default.
    fn http_settings<F>(&self, env: F) -> Result<HttpSettings>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = self
            .base_url
            .clone()
            .or_else(|| env(ENV_URL))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = parse_base_url(&raw_url)?;

        let timeout = self.timeout.unwrap_or_else(|| {
            Duration::from_secs(
                env(ENV_TIMEOUT_SECS)
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(30),
            )
        });
        let pool_max_idle_per_host = self.pool_max_idle_per_host.unwrap_or_else(|| {
            env(ENV_POOL_MAX_IDLE_PER_HOST)
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(32)
        });

        let proxy = match self.proxy_url.as_deref() {
            Some(url) => Some(reqwest::Proxy::all(url).map_err(|e| {
                Error::configuration_with_context(
                    format!("Invalid proxy URL: {}", e),
                    ErrorContext::new()
                        .with_field_path("client.proxy")
                        .with_source("client_builder"),
                )
            })?),
            None => match env(ENV_PROXY_URL) {
                Some(url) => match reqwest::Proxy::all(&url) {
                    Ok(proxy) => Some(proxy),
                    Err(e) => {
                        warn!(error = %e, "ignoring invalid {}", ENV_PROXY_URL);
                        None
                    }
                },
                None => None,
            },
        };

        Ok(HttpSettings {
            base_url,
            timeout,
            pool_max_idle_per_host,
            proxy,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let context = || {
        ErrorContext::new()
            .with_field_path("client.base_url")
            .with_details(raw.to_string())
            .with_source("client_builder")
    };
    let url = Url::parse(raw)
        .map_err(|e| Error::configuration_with_context(format!("Invalid base URL: {}", e), context()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::configuration_with_context(
            format!("Unsupported URL scheme: {}", url.scheme()),
            context(),
        ));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(Error::configuration_with_context(
            "Base URL must not carry a query string or fragment",
            context(),
        ));
    }
    Ok(url)
}
