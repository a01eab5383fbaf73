//! Live spot price resolution: structured APIs first, then a script scrape.
//!
//! Internals are split into:
//! - `api`:    JSON endpoints and the price-field lookup
//! - `scrape`: regex extraction from the widget script
//!
//! Each source implements [`SpotSource`]. [`SpotResolver`] walks its sources in order
//! and returns the first positive price; every per-source failure is logged and skipped.

mod api;
mod scrape;

pub use api::{JsonApiSource, PRICE_KEYS, extract_json_price};
pub use scrape::{SCRAPE_KEYS, ScriptScrapeSource, scrape_price};

use std::future::Future;
use std::pin::Pin;
use url::Url;

use crate::core::{AuClient, AuError, CacheMode};

/// Boxed future returned by [`SpotSource::fetch_spot`].
pub type SpotFuture<'a> = Pin<Box<dyn Future<Output = Result<f64, AuError>> + Send + 'a>>;

/// The current spot price in USD per troy ounce. Always strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct SpotQuote {
    /// USD per troy ounce.
    pub value: f64,
    /// The source that produced the value.
    pub source: Url,
}

/// A single place a spot price can come from.
///
/// Implementations report why they failed; the resolver turns that into "try the next one".
pub trait SpotSource: Send + Sync {
    /// The endpoint this source reads, used for logging and in [`SpotQuote::source`].
    fn url(&self) -> &Url;

    /// Fetch and parse a price.
    fn fetch_spot<'a>(&'a self, client: &'a AuClient, cache_mode: CacheMode) -> SpotFuture<'a>;
}

/// An ordered fallback chain of spot sources.
pub struct SpotResolver {
    sources: Vec<Box<dyn SpotSource>>,
}

impl SpotResolver {
    /// A resolver over an explicit source list, tried front to back.
    pub fn new(sources: Vec<Box<dyn SpotSource>>) -> Self {
        Self { sources }
    }

    /// The default chain for `client`: each configured JSON API, then the widget script.
    pub fn for_client(client: &AuClient) -> Self {
        let referer = client.spot_referer().map(str::to_string);
        let mut sources: Vec<Box<dyn SpotSource>> = client
            .spot_api_urls()
            .iter()
            .map(|url| {
                Box::new(JsonApiSource::new(url.clone(), referer.clone())) as Box<dyn SpotSource>
            })
            .collect();
        sources.push(Box::new(ScriptScrapeSource::new(
            client.spot_script_url().clone(),
            referer,
        )));
        Self { sources }
    }

    /// Append a source at the lowest priority.
    #[must_use]
    pub fn with_source(mut self, source: Box<dyn SpotSource>) -> Self {
        self.sources.push(source);
        self
    }

    /// The endpoints in the order they will be tried.
    pub fn source_urls(&self) -> Vec<&Url> {
        self.sources.iter().map(|s| s.url()).collect()
    }

    /// Try every source in order and return the first positive, finite price.
    ///
    /// Returns `None` when all sources fail; no error escapes.
    #[tracing::instrument(skip_all, fields(sources = self.sources.len()))]
    pub async fn resolve(&self, client: &AuClient, cache_mode: CacheMode) -> Option<SpotQuote> {
        for source in &self.sources {
            match source.fetch_spot(client, cache_mode).await {
                Ok(value) if value.is_finite() && value > 0.0 => {
                    tracing::debug!(url = %source.url(), value, "spot source succeeded");
                    return Some(SpotQuote {
                        value,
                        source: source.url().clone(),
                    });
                }
                Ok(value) => {
                    tracing::debug!(
                        url = %source.url(),
                        value,
                        "spot source returned a non-positive price; skipping"
                    );
                }
                Err(e) => {
                    tracing::debug!(
                        url = %source.url(),
                        error = %e,
                        "spot source failed; skipping"
                    );
                }
            }
        }
        tracing::warn!("every spot source failed");
        None
    }
}

/// Resolve the spot price with the client's default source chain.
pub async fn resolve_spot_price(client: &AuClient) -> Option<SpotQuote> {
    SpotResolver::for_client(client)
        .resolve(client, CacheMode::Use)
        .await
}
