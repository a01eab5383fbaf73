//! Centralized constants for default endpoints, referers, UA and TTLs.

use std::time::Duration;

/// Default desktop UA to avoid trivial bot blocking.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/124.0 Safari/537.36"
);

/// Structured spot APIs, tried in order.
pub(crate) const DEFAULT_SPOT_API_URLS: [&str; 2] = [
    "https://data-asg.goldprice.org/dbXRates/USD",
    "https://data-asg.goldprice.org/dbXRates/XAU",
];

/// Widget script scraped when every structured API fails.
pub(crate) const DEFAULT_SPOT_SCRIPT_URL: &str = "http://charts.goldprice.org/gold-price.js";

/// Referer sent to the spot endpoints.
pub(crate) const DEFAULT_SPOT_REFERER: &str = "https://www.goldprice.org/";

/// Daily XAU/USD CSV (Date,Open,High,Low,Close,...).
pub(crate) const DEFAULT_HISTORY_CSV_URL: &str = "https://stooq.com/q/d/l/?s=xauusd&i=d";

/// Referer sent to the history endpoint.
pub(crate) const DEFAULT_HISTORY_REFERER: &str = "https://stooq.com/";

/// Per-request timeout applied when none is configured.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(12);

/// Spot bodies go stale quickly.
pub(crate) const DEFAULT_SPOT_CACHE_TTL: Duration = Duration::from_secs(300);

/// The daily series only changes once a day.
pub(crate) const DEFAULT_HISTORY_CACHE_TTL: Duration = Duration::from_secs(3600);
