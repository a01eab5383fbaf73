//! Anniversary dates and nearest-date lookup.

use chrono::{Datelike, Local, NaiveDate};

use crate::history::PricePoint;

/// `today` shifted back by `years_back` whole years, month and day preserved.
///
/// When that day does not exist in the target year (Feb 29 into a non-leap year) the
/// result is clamped to the last day of the same month. Returns `None` only when the
/// target year is outside chrono's supported range.
pub fn anniversary_date(today: NaiveDate, years_back: u32) -> Option<NaiveDate> {
    let year = today.year().checked_sub(i32::try_from(years_back).ok()?)?;
    NaiveDate::from_ymd_opt(year, today.month(), today.day())
        .or_else(|| last_day_of_month(year, today.month()))
}

/// [`anniversary_date`] relative to the local calendar date.
pub fn years_ago(years_back: u32) -> Option<NaiveDate> {
    anniversary_date(Local::now().date_naive(), years_back)
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year.checked_add(1)?, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// Absolute distance in whole days.
pub fn day_distance(a: NaiveDate, b: NaiveDate) -> i64 {
    (a - b).num_days().abs()
}

/// The point whose date is closest to `target`, by absolute day distance.
///
/// Ties go to the first point encountered, which on an ascending series is the earlier
/// date. Returns `None` for an empty slice.
pub fn nearest_point(points: &[PricePoint], target: NaiveDate) -> Option<&PricePoint> {
    points
        .iter()
        .min_by_key(|p| day_distance(p.date(), target))
}
