//! Type definitions for the SQLite implementation.
//!
//! This module contains the public timestamp type used for every temporal
//! column, and the internal row types that queries decode into before they are
//! converted to `fpa-core` models.

use fpa_core::models::PriceRecord;

mod datetime;
pub use datetime::DateTime;

/// The columns of the `price` table, in the order every query selects them.
pub(crate) const PRICE_COLUMNS: &str =
    "id, state, region, period, ago, pms, dpk, lpg, created_at, updated_at";

#[derive(sqlx::FromRow)]
pub(crate) struct PriceRow {
    pub id: i64,
    pub state: String,
    pub region: Option<String>,
    pub period: DateTime,
    pub ago: Option<f64>,
    pub pms: Option<f64>,
    pub dpk: Option<f64>,
    pub lpg: Option<f64>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl TryFrom<PriceRow> for PriceRecord {
    type Error = sqlx::Error;

    fn try_from(row: PriceRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id,
            state: row.state,
            region: row.region,
            period: row.period.try_into()?,
            ago: row.ago,
            pms: row.pms,
            dpk: row.dpk,
            lpg: row.lpg,
            created_at: Some(row.created_at.try_into()?),
            updated_at: Some(row.updated_at.try_into()?),
        })
    }
}

#[derive(sqlx::FromRow)]
pub(crate) struct SeriesRow {
    pub state: String,
    pub period: DateTime,
    pub price: Option<f64>,
}
