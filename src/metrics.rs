//! Unit conversion and "how much gold does this buy" arithmetic.
//!
//! All prices are USD per troy ounce unless a name says otherwise. A zero divisor
//! yields `NaN` instead of panicking or returning infinity.

use serde::Serialize;

/// Grams in one troy ounce.
pub const TROY_OUNCE_IN_GRAMS: f64 = 31.103_476_8;

fn guarded_div(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        f64::NAN
    } else {
        numerator / denominator
    }
}

/// USD per gram for a USD-per-ounce price.
pub fn price_per_gram(price_per_oz: f64) -> f64 {
    price_per_oz / TROY_OUNCE_IN_GRAMS
}

/// Troy ounces `amount` buys at `price_per_oz`.
pub fn ounces_needed(amount: f64, price_per_oz: f64) -> f64 {
    guarded_div(amount, price_per_oz)
}

/// Grams `amount` buys at `price_per_gram`.
pub fn grams_needed(amount: f64, price_per_gram: f64) -> f64 {
    guarded_div(amount, price_per_gram)
}

/// Relative change from `historical` to `current`, in percent. `NaN` when `historical` is zero.
pub fn percent_change(current: f64, historical: f64) -> f64 {
    guarded_div(current - historical, historical) * 100.0
}

/// Quantity of gold a purchase amount corresponds to at one price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoldAmount {
    pub ounces: f64,
    pub grams: f64,
}

impl GoldAmount {
    /// Both units for `amount` at `price_per_oz`.
    pub fn for_purchase(amount: f64, price_per_oz: f64) -> Self {
        Self {
            ounces: ounces_needed(amount, price_per_oz),
            grams: grams_needed(amount, price_per_gram(price_per_oz)),
        }
    }
}
