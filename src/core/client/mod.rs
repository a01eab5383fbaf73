//! Public client surface + builder.
//! Internals are split into `cache` (TTL body cache) and `constants` (UA + defaults).

mod cache;
mod constants;

pub use cache::CacheMode;

use crate::core::AuError;
use cache::CacheStore;
use constants::{
    DEFAULT_HISTORY_CACHE_TTL, DEFAULT_HISTORY_CSV_URL, DEFAULT_HISTORY_REFERER,
    DEFAULT_SPOT_API_URLS, DEFAULT_SPOT_CACHE_TTL, DEFAULT_SPOT_REFERER, DEFAULT_SPOT_SCRIPT_URL,
    DEFAULT_TIMEOUT, USER_AGENT,
};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Which upstream a cached body belongs to; picks the TTL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SourceKind {
    Spot,
    History,
}

/// HTTP client configured with the spot and history endpoints.
///
/// Cloning is cheap: the underlying `reqwest::Client` and the cache are shared.
#[derive(Debug, Clone)]
pub struct AuClient {
    http: Client,
    spot_api_urls: Vec<Url>,
    spot_script_url: Url,
    spot_referer: Option<String>,
    history_csv_url: Url,
    history_referer: Option<String>,
    timeout: Duration,

    spot_cache_ttl: Duration,
    history_cache_ttl: Duration,
    cache: Option<Arc<CacheStore>>,
}

impl Default for AuClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl AuClient {
    /// Create a new builder.
    pub fn builder() -> AuClientBuilder {
        AuClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn spot_api_urls(&self) -> &[Url] {
        &self.spot_api_urls
    }
    pub(crate) fn spot_script_url(&self) -> &Url {
        &self.spot_script_url
    }
    pub(crate) fn spot_referer(&self) -> Option<&str> {
        self.spot_referer.as_deref()
    }
    pub(crate) fn history_csv_url(&self) -> &Url {
        &self.history_csv_url
    }
    pub(crate) fn history_referer(&self) -> Option<&str> {
        self.history_referer.as_deref()
    }
    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Drop every cached body.
    pub async fn clear_cache(&self) {
        if let Some(store) = &self.cache {
            store.clear().await;
        }
    }

    pub(crate) async fn cache_get(&self, url: &Url) -> Option<(String, String)> {
        self.cache.as_ref()?.get(url).await
    }

    pub(crate) async fn cache_put(
        &self,
        url: &Url,
        kind: SourceKind,
        body: &str,
        content_type: &str,
    ) {
        let Some(store) = &self.cache else {
            return;
        };
        let ttl = match kind {
            SourceKind::Spot => self.spot_cache_ttl,
            SourceKind::History => self.history_cache_ttl,
        };
        store.put(url, body, content_type, ttl).await;
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct AuClientBuilder {
    user_agent: Option<String>,
    spot_api_urls: Option<Vec<Url>>,
    spot_script_url: Option<Url>,
    spot_referer: Option<Option<String>>,
    history_csv_url: Option<Url>,
    history_referer: Option<Option<String>>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    cache: bool,
    spot_cache_ttl: Option<Duration>,
    history_cache_ttl: Option<Duration>,
}

impl AuClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the structured spot APIs. They are tried in the given order.
    pub fn spot_api_urls(mut self, urls: Vec<Url>) -> Self {
        self.spot_api_urls = Some(urls);
        self
    }

    /// Override the widget script scraped as the last spot source.
    pub fn spot_script_url(mut self, url: Url) -> Self {
        self.spot_script_url = Some(url);
        self
    }

    /// Override the `Referer` sent to spot endpoints. `None` sends no referer.
    pub fn spot_referer(mut self, referer: Option<String>) -> Self {
        self.spot_referer = Some(referer);
        self
    }

    /// Override the daily history CSV endpoint.
    pub fn history_csv_url(mut self, url: Url) -> Self {
        self.history_csv_url = Some(url);
        self
    }

    /// Override the `Referer` sent to the history endpoint. `None` sends no referer.
    pub fn history_referer(mut self, referer: Option<String>) -> Self {
        self.history_referer = Some(referer);
        self
    }

    /// Per-request timeout. Default: 12s.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Enable in-memory caching with the default TTLs (5 minutes spot, 1 hour history).
    /// If neither this nor a TTL setter is called, caching is disabled.
    pub fn with_cache(mut self) -> Self {
        self.cache = true;
        self
    }

    /// Enable caching and set how long spot bodies stay fresh.
    pub fn spot_cache_ttl(mut self, dur: Duration) -> Self {
        self.cache = true;
        self.spot_cache_ttl = Some(dur);
        self
    }

    /// Enable caching and set how long the history CSV stays fresh.
    pub fn history_cache_ttl(mut self, dur: Duration) -> Self {
        self.cache = true;
        self.history_cache_ttl = Some(dur);
        self
    }

    pub fn build(self) -> Result<AuClient, AuError> {
        let spot_api_urls = match self.spot_api_urls {
            Some(urls) => urls,
            None => DEFAULT_SPOT_API_URLS
                .iter()
                .map(|u| Url::parse(u))
                .collect::<Result<Vec<_>, _>>()?,
        };
        let spot_script_url = match self.spot_script_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_SPOT_SCRIPT_URL)?,
        };
        let history_csv_url = match self.history_csv_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_HISTORY_CSV_URL)?,
        };

        // rustls verifies certificates and hostnames; nothing here relaxes that.
        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(AuClient {
            http,
            spot_api_urls,
            spot_script_url,
            spot_referer: self
                .spot_referer
                .unwrap_or_else(|| Some(DEFAULT_SPOT_REFERER.to_string())),
            history_csv_url,
            history_referer: self
                .history_referer
                .unwrap_or_else(|| Some(DEFAULT_HISTORY_REFERER.to_string())),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            spot_cache_ttl: self.spot_cache_ttl.unwrap_or(DEFAULT_SPOT_CACHE_TTL),
            history_cache_ttl: self.history_cache_ttl.unwrap_or(DEFAULT_HISTORY_CACHE_TTL),
            cache: self.cache.then(|| Arc::new(CacheStore::default())),
        })
    }
}
