use crate::models::ProductType;
use time::OffsetDateTime;

/// A stored price observation for one state at one point in time.
///
/// Records are written in bulk by an ingestion process and are never
/// updated or deleted by the analytics engine. Product prices may be absent
/// in the store; the analytics layer treats an absent price as zero when it
/// computes deltas.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct PriceRecord {
    /// The store-assigned identifier, increasing with insertion order
    pub id: i64,
    /// The state the prices were observed in
    pub state: String,
    /// An optional regional classification of the state
    #[cfg_attr(feature = "serde", serde(default))]
    pub region: Option<String>,
    /// When the prices were observed
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    pub period: OffsetDateTime,
    /// Price of automotive gas oil
    pub ago: Option<f64>,
    /// Price of premium motor spirit
    pub pms: Option<f64>,
    /// Price of dual purpose kerosene
    pub dpk: Option<f64>,
    /// Price of liquefied petroleum gas
    pub lpg: Option<f64>,
    /// When the record was written
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            with = "time::serde::rfc3339::option",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub created_at: Option<OffsetDateTime>,
    /// When the record was last touched by the store
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            with = "time::serde::rfc3339::option",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub updated_at: Option<OffsetDateTime>,
}

impl PriceRecord {
    /// The price of a single product on this record.
    pub fn price(&self, product: ProductType) -> Option<f64> {
        match product {
            ProductType::Ago => self.ago,
            ProductType::Pms => self.pms,
            ProductType::Dpk => self.dpk,
            ProductType::Lpg => self.lpg,
        }
    }
}

/// A price observation that has not been stored yet.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NewPriceRecord {
    /// The state the prices were observed in
    pub state: String,
    /// An optional regional classification of the state
    #[cfg_attr(feature = "serde", serde(default))]
    pub region: Option<String>,
    /// When the prices were observed
    #[cfg_attr(feature = "serde", serde(with = "time::serde::rfc3339"))]
    pub period: OffsetDateTime,
    /// Price of automotive gas oil
    #[cfg_attr(feature = "serde", serde(default))]
    pub ago: Option<f64>,
    /// Price of premium motor spirit
    #[cfg_attr(feature = "serde", serde(default))]
    pub pms: Option<f64>,
    /// Price of dual purpose kerosene
    #[cfg_attr(feature = "serde", serde(default))]
    pub dpk: Option<f64>,
    /// Price of liquefied petroleum gas
    #[cfg_attr(feature = "serde", serde(default))]
    pub lpg: Option<f64>,
}
