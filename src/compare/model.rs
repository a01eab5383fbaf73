use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::metrics::{GoldAmount, percent_change};

/// What the caller wants compared.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRequest {
    /// Purchase amount in USD. Expected to be non-negative.
    pub purchase_amount: f64,
    /// How many whole years back "then" is.
    pub years_back: u32,
}

impl Default for ComparisonRequest {
    fn default() -> Self {
        Self {
            purchase_amount: 1000.0,
            years_back: 2,
        }
    }
}

/// Why a comparison could not be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Unavailable {
    /// Every spot source failed, or the resolved price was not positive.
    #[error("spot unavailable")]
    Spot,
    /// The daily series was empty or had no point near the target date.
    #[error("historical unavailable")]
    Historical,
}

/// Gold needed for one purchase, today versus the closest historical close.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonResult {
    /// Spot price today, USD per troy ounce.
    pub spot: f64,
    /// Anniversary date the lookup aimed for.
    pub target_date: NaiveDate,
    /// Date of the closest historical close.
    pub hist_date: NaiveDate,
    /// Historical close, USD per troy ounce.
    pub hist_price: f64,
    pub ounces_now: f64,
    pub grams_now: f64,
    pub ounces_then: f64,
    pub grams_then: f64,
}

/// One bar of the then-vs-today chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChartBar {
    pub label: &'static str,
    pub grams: f64,
}

impl ComparisonResult {
    pub(crate) fn new(
        amount: f64,
        spot: f64,
        target_date: NaiveDate,
        hist_date: NaiveDate,
        hist_price: f64,
    ) -> Self {
        let now = GoldAmount::for_purchase(amount, spot);
        let then = GoldAmount::for_purchase(amount, hist_price);
        Self {
            spot,
            target_date,
            hist_date,
            hist_price,
            ounces_now: now.ounces,
            grams_now: now.grams,
            ounces_then: then.ounces,
            grams_then: then.grams,
        }
    }

    /// Spot versus the historical close, in percent.
    pub fn percent_change(&self) -> f64 {
        percent_change(self.spot, self.hist_price)
    }

    /// Grams needed then and today, in display order.
    pub fn chart_bars(&self) -> [ChartBar; 2] {
        [
            ChartBar {
                label: "Then",
                grams: self.grams_then,
            },
            ChartBar {
                label: "Today",
                grams: self.grams_now,
            },
        ]
    }
}
