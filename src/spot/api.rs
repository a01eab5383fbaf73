//! Structured JSON spot APIs.

use serde_json::Value;
use url::Url;

use super::{SpotFuture, SpotSource};
use crate::core::{
    AuClient, AuError, CacheMode,
    client::SourceKind,
    net,
};

/// Price fields looked up in a JSON payload, highest priority first.
pub const PRICE_KEYS: [&str; 4] = ["xauPrice", "price", "ask", "lastPrice"];

/// Pull the spot price out of a decoded API payload.
///
/// Accepts either `{"items": [{...}]}` (only the first item is inspected) or a flat
/// mapping carrying the price fields directly. When the first item has no numeric
/// price field the top level is tried as well. String-valued fields are ignored.
pub fn extract_json_price(payload: &Value) -> Option<f64> {
    payload.as_object()?;

    if let Some(first) = payload
        .get("items")
        .and_then(Value::as_array)
        .and_then(|items| items.first())
        && let Some(p) = first_numeric_field(first)
    {
        return Some(p);
    }

    first_numeric_field(payload)
}

fn first_numeric_field(node: &Value) -> Option<f64> {
    PRICE_KEYS
        .iter()
        .find_map(|key| node.get(*key).and_then(Value::as_f64))
}

/// One structured endpoint in the fallback chain.
#[derive(Debug, Clone)]
pub struct JsonApiSource {
    url: Url,
    referer: Option<String>,
}

impl JsonApiSource {
    pub fn new(url: Url, referer: Option<String>) -> Self {
        Self { url, referer }
    }

    async fn fetch(&self, client: &AuClient, cache_mode: CacheMode) -> Result<f64, AuError> {
        let fetched = net::fetch(
            client,
            &self.url,
            self.referer.as_deref(),
            SourceKind::Spot,
            cache_mode,
        )
        .await?;

        if !fetched.content_type.is_empty() && !fetched.content_type.contains("json") {
            tracing::debug!(
                url = %self.url,
                content_type = %fetched.content_type,
                "spot api answered with a non-JSON content type; parsing anyway"
            );
        }

        let payload: Value = serde_json::from_str(&fetched.body)?;
        extract_json_price(&payload).ok_or_else(|| {
            AuError::Data(format!("no numeric price field in payload from {}", self.url))
        })
    }
}

impl SpotSource for JsonApiSource {
    fn url(&self) -> &Url {
        &self.url
    }

    fn fetch_spot<'a>(&'a self, client: &'a AuClient, cache_mode: CacheMode) -> SpotFuture<'a> {
        Box::pin(self.fetch(client, cache_mode))
    }
}
