use chrono::NaiveDate;
use serde::Serialize;

/// One daily close, USD per troy ounce.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    date: NaiveDate,
    price: f64,
}

impl PricePoint {
    /// Returns `None` unless `price` is finite and strictly positive.
    pub fn new(date: NaiveDate, price: f64) -> Option<Self> {
        (price.is_finite() && price > 0.0).then_some(Self { date, price })
    }

    /// Trading day of the close.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Close in USD per troy ounce; always finite and positive.
    pub fn price(&self) -> f64 {
        self.price
    }
}

/// Daily closes sorted ascending by date.
///
/// Sorting happens once at construction and is stable, so points sharing a date keep
/// their input order. Duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from unsorted points.
    pub fn from_points(mut points: Vec<PricePoint>) -> Self {
        points.sort_by_key(PricePoint::date);
        Self { points }
    }

    /// All points, oldest first.
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` when no row survived parsing.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The oldest point.
    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    /// The most recent point.
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// Iterate oldest to newest.
    pub fn iter(&self) -> std::slice::Iter<'_, PricePoint> {
        self.points.iter()
    }

    /// The point closest to `target`; see [`crate::dates::nearest_point`].
    pub fn nearest(&self, target: NaiveDate) -> Option<&PricePoint> {
        crate::dates::nearest_point(&self.points, target)
    }
}

impl FromIterator<PricePoint> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = PricePoint>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PriceSeries {
    type Item = &'a PricePoint;
    type IntoIter = std::slice::Iter<'a, PricePoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
