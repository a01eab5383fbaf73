//! aurum-rs: how much gold a purchase costs today versus N years ago.
//!
//! - [`spot`]: live XAU/USD from structured APIs with a script-scrape fallback.
//! - [`history`]: daily closes from a CSV endpoint.
//! - [`dates`]: anniversary dates and nearest-close lookup.
//! - [`metrics`]: ounce/gram arithmetic.
//! - [`compare`]: the then-vs-now pipeline and its CSV summary.

pub mod compare;
pub mod core;
pub mod dates;
pub mod history;
pub mod metrics;
pub mod spot;

pub use crate::core::{AuClient, AuClientBuilder, AuError, CacheMode};
pub use compare::{
    ChartBar, ComparisonBuilder, ComparisonRequest, ComparisonResult, Unavailable, compare,
    compute_comparison,
};
pub use history::{PricePoint, PriceSeries, fetch_daily_series, parse_daily_csv};
pub use metrics::{GoldAmount, TROY_OUNCE_IN_GRAMS};
pub use spot::{SpotQuote, SpotResolver, SpotSource, resolve_spot_price};
