use chrono::NaiveDate;
use csv::StringRecord;
use regex::Regex;
use std::sync::LazyLock;

use super::{PricePoint, PriceSeries};
use crate::core::AuError;

/// Column holding the ISO date.
const DATE_COL: usize = 0;
/// Column holding the daily close (`Date,Open,High,Low,Close,...`).
const CLOSE_COL: usize = 4;

static ISO_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("static date pattern"));

/// Parse a daily CSV (header row first) into a sorted series.
///
/// Rows that are too short, carry a malformed or impossible date, or a close that is not a
/// positive number are dropped. Never fails: garbage input yields an empty series.
pub fn parse_daily_csv(text: &str) -> PriceSeries {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut points = Vec::new();
    let mut dropped = 0usize;
    for record in rdr.records() {
        match record.map_err(AuError::from).and_then(|r| parse_row(&r)) {
            Ok(p) => points.push(p),
            Err(e) => {
                dropped += 1;
                tracing::trace!(error = %e, "dropping csv row");
            }
        }
    }

    tracing::debug!(kept = points.len(), dropped, "parsed daily csv");
    PriceSeries::from_points(points)
}

fn parse_row(record: &StringRecord) -> Result<PricePoint, AuError> {
    if record.len() <= CLOSE_COL {
        return Err(AuError::Data(format!(
            "expected at least {} columns, got {}",
            CLOSE_COL + 1,
            record.len()
        )));
    }

    let date_s = &record[DATE_COL];
    if !ISO_DATE.is_match(date_s) {
        return Err(AuError::Data(format!("malformed date `{date_s}`")));
    }
    let date = NaiveDate::parse_from_str(date_s, "%Y-%m-%d")
        .map_err(|e| AuError::Data(format!("invalid date `{date_s}`: {e}")))?;

    let close_s = &record[CLOSE_COL];
    let close: f64 = close_s
        .parse()
        .map_err(|_| AuError::Data(format!("non-numeric close `{close_s}`")))?;

    PricePoint::new(date, close)
        .ok_or_else(|| AuError::Data(format!("non-positive close `{close_s}` on {date}")))
}
