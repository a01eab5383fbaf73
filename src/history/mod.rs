//! Daily historical closes from the CSV endpoint.

mod model;
mod parse;

pub use model::{PricePoint, PriceSeries};
pub use parse::parse_daily_csv;

use crate::core::{AuClient, CacheMode, client::SourceKind, net};

/// Download and parse the daily series.
///
/// A failed download is logged and yields an empty series; it never raises.
#[tracing::instrument(skip(client), fields(url = %client.history_csv_url()))]
pub async fn fetch_daily_series(client: &AuClient, cache_mode: CacheMode) -> PriceSeries {
    let fetched = match net::fetch(
        client,
        client.history_csv_url(),
        client.history_referer(),
        SourceKind::History,
        cache_mode,
    )
    .await
    {
        Ok(f) => f,
        Err(e) => {
            tracing::warn!(error = %e, "history download failed");
            return PriceSeries::default();
        }
    };

    parse_daily_csv(&fetched.body)
}
