use crate::models::ProductType;
use time::OffsetDateTime;

/// A single product price at a point in time.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricePoint {
    /// When the price was observed
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    pub period: OffsetDateTime,
    /// The observed price, if the store has one
    pub price: Option<f64>,
}

/// One row of a product's price history.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProductHistoryRow {
    /// When the price was observed
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    pub period: OffsetDateTime,
    /// The product the price belongs to
    pub product: ProductType,
    /// The observed price, if the store has one
    pub price: Option<f64>,
    /// The state the price was observed in
    pub state: String,
}

/// The most recent prices of one product in one state, newest first.
///
/// This is the shape a store returns from a grouped history scan. `periods`
/// and `prices` always have the same length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateSeries {
    /// The state the series belongs to
    pub state: String,
    /// Observation times, newest first
    pub periods: Vec<OffsetDateTime>,
    /// The product price at each observation
    pub prices: Vec<Option<f64>>,
}

/// The price movement of one product in one state across a window.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ProductPerformance {
    /// The state the window belongs to
    pub state: String,
    /// The product the window tracks
    pub product: ProductType,
    /// The window, newest first
    pub history: Vec<PricePoint>,
    /// The newest price in the window
    pub latest: Option<f64>,
    /// The oldest price of a full window, absent when the window is short
    pub previous: Option<f64>,
    /// `(latest - previous) / 100`, to 2 decimal places
    pub change: f64,
    /// `(latest - previous) / previous / 100`, to 4 decimal places
    pub percentage_change: f64,
}

/// The price movement of one product in one state across a calendar week.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct WeeklyReport {
    /// The state as requested
    pub state: String,
    /// The product the report tracks
    pub product: ProductType,
    /// Prices inside the week, newest first
    pub history: Vec<PricePoint>,
    /// The newest price in the week, or 0
    pub latest: f64,
    /// The second newest price in the week, or 0
    pub previous: f64,
    /// `(latest - previous) / 100`, to 2 decimal places
    pub change: f64,
    /// `(latest - previous) / previous / 100`, to 4 decimal places
    pub percentage_change: f64,
}
