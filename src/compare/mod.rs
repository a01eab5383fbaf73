//! Then-vs-now pipeline: spot price, anniversary lookup, derived quantities.

mod export;
mod model;

pub use model::{ChartBar, ComparisonRequest, ComparisonResult, Unavailable};

use chrono::{Local, NaiveDate};

use crate::core::{AuClient, CacheMode};
use crate::dates::anniversary_date;
use crate::history::{PriceSeries, fetch_daily_series};
use crate::spot::SpotResolver;

/// Derive the comparison from already-fetched inputs.
///
/// `spot` must be a positive, finite price; otherwise the result is [`Unavailable::Spot`].
/// An empty series, or a target year chrono cannot represent, is [`Unavailable::Historical`].
pub fn compute_comparison(
    request: &ComparisonRequest,
    spot: f64,
    series: &PriceSeries,
    today: NaiveDate,
) -> Result<ComparisonResult, Unavailable> {
    if !(spot.is_finite() && spot > 0.0) {
        return Err(Unavailable::Spot);
    }

    let target = anniversary_date(today, request.years_back).ok_or(Unavailable::Historical)?;
    let hist = series.nearest(target).ok_or(Unavailable::Historical)?;

    Ok(ComparisonResult::new(
        request.purchase_amount,
        spot,
        target,
        hist.date(),
        hist.price(),
    ))
}

/// A builder for one then-vs-now comparison.
///
/// Runs sequentially: the spot price is resolved first (and the run stops if it is
/// unavailable), then the daily series is fetched and searched.
///
/// ```no_run
/// # use aurum_rs::{AuClient, ComparisonBuilder};
/// # #[tokio::main]
/// # async fn main() {
/// let client = AuClient::default();
/// match ComparisonBuilder::new(&client).purchase_amount(2500.0).years_back(5).fetch().await {
///     Ok(r) => println!("{:.2} g today vs {:.2} g on {}", r.grams_now, r.grams_then, r.hist_date),
///     Err(why) => eprintln!("{why}"),
/// }
/// # }
/// ```
pub struct ComparisonBuilder<'a> {
    client: &'a AuClient,
    request: ComparisonRequest,
    today: Option<NaiveDate>,
    cache_mode: CacheMode,
    resolver: Option<SpotResolver>,
}

impl<'a> ComparisonBuilder<'a> {
    pub fn new(client: &'a AuClient) -> Self {
        Self {
            client,
            request: ComparisonRequest::default(),
            today: None,
            cache_mode: CacheMode::Use,
            resolver: None,
        }
    }

    /// Replace the whole request.
    #[must_use]
    pub fn request(mut self, request: ComparisonRequest) -> Self {
        self.request = request;
        self
    }

    /// Purchase amount in USD.
    #[must_use]
    pub fn purchase_amount(mut self, amount: f64) -> Self {
        self.request.purchase_amount = amount;
        self
    }

    /// How many years back "then" is.
    #[must_use]
    pub fn years_back(mut self, years: u32) -> Self {
        self.request.years_back = years;
        self
    }

    /// Pin the calendar date used as "today" (defaults to the local date).
    #[must_use]
    pub fn today(mut self, date: NaiveDate) -> Self {
        self.today = Some(date);
        self
    }

    /// Sets the cache mode for both the spot and the history fetch.
    #[must_use]
    pub fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Use a custom spot source chain instead of the client's default one.
    #[must_use]
    pub fn spot_resolver(mut self, resolver: SpotResolver) -> Self {
        self.resolver = Some(resolver);
        self
    }

    /// Run the pipeline.
    ///
    /// # Errors
    ///
    /// [`Unavailable::Spot`] when no spot source produced a positive price;
    /// [`Unavailable::Historical`] when no historical close could be matched.
    #[tracing::instrument(
        skip(self),
        err,
        fields(amount = self.request.purchase_amount, years_back = self.request.years_back)
    )]
    pub async fn fetch(&self) -> Result<ComparisonResult, Unavailable> {
        let quote = match &self.resolver {
            Some(r) => r.resolve(self.client, self.cache_mode).await,
            None => {
                SpotResolver::for_client(self.client)
                    .resolve(self.client, self.cache_mode)
                    .await
            }
        }
        .ok_or(Unavailable::Spot)?;

        let series = fetch_daily_series(self.client, self.cache_mode).await;
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        compute_comparison(&self.request, quote.value, &series, today)
    }
}

/// Run one comparison with the client's defaults and today's date.
pub async fn compare(
    client: &AuClient,
    request: ComparisonRequest,
) -> Result<ComparisonResult, Unavailable> {
    ComparisonBuilder::new(client).request(request).fetch().await
}
