//! Last-resort spot source: regex scrape of the price widget script.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

use super::{SpotFuture, SpotSource};
use crate::core::{
    AuClient, AuError, CacheMode,
    client::SourceKind,
    net,
};

/// Keys tried in `key: value` / `key=value` form after the `USD` pattern.
pub const SCRAPE_KEYS: [&str; 4] = ["xauPrice", "price", "lastPrice", "ask"];

// Either comma-grouped thousands (`2,345.67`) or a plain run of digits (`2345.67`).
const NUMBER: &str = r"(\d{1,3}(?:,\d{3})+(?:\.\d+)?|\d+(?:\.\d+)?)";

static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    // `USD` must sit right before the number: `USD 2,401.10`, `USD: 2401.1`, `"USD$2401"`.
    let mut sources = vec![format!(r#"(?i)\bUSD"?\s*[:=$]?\s*"?{NUMBER}\b"#)];
    // Keys need a non-letter on the left so `price` does not match inside `xagPrice`.
    sources.extend(SCRAPE_KEYS.iter().map(|key| {
        format!(r#"(?i)(?:^|[^A-Za-z]){key}"?\s*[:=]\s*"?{NUMBER}"?"#)
    }));
    sources
        .iter()
        .map(|src| Regex::new(src).expect("static spot pattern"))
        .collect()
});

/// Find a price in loosely structured script text.
///
/// Patterns are tried in order (a number directly after `USD`, then each of
/// [`SCRAPE_KEYS`] as a whole key); the first one that matches decides, with thousands
/// separators stripped.
pub fn scrape_price(text: &str) -> Option<f64> {
    PATTERNS.iter().find_map(|re| {
        let raw = re.captures(text)?.get(1)?.as_str();
        raw.replace(',', "").parse::<f64>().ok()
    })
}

/// The widget script endpoint. Its body is JavaScript, not JSON.
#[derive(Debug, Clone)]
pub struct ScriptScrapeSource {
    url: Url,
    referer: Option<String>,
}

impl ScriptScrapeSource {
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

        scrape_price(&fetched.body)
            .ok_or_else(|| AuError::Data(format!("no price pattern matched in {}", self.url)))
    }
}

impl SpotSource for ScriptScrapeSource {
    fn url(&self) -> &Url {
        &self.url
    }

    fn fetch_spot<'a>(&'a self, client: &'a AuClient, cache_mode: CacheMode) -> SpotFuture<'a> {
        Box::pin(self.fetch(client, cache_mode))
    }
}
