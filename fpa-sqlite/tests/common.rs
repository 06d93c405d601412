#![allow(dead_code)]

use fpa_core::{analytics::PriceAnalytics, models::NewPriceRecord, ports::IngestRepository as _};
use fpa_sqlite::{Db, config::SqliteConfig};
use time::{Date, OffsetDateTime};

/// A fresh in-memory store, wrapped in the analytics engine.
pub async fn open() -> anyhow::Result<PriceAnalytics<Db>> {
    let db = Db::open(&SqliteConfig::default()).await?;
    Ok(PriceAnalytics::new(db))
}

/// A fresh in-memory store holding `records`.
pub async fn seeded(records: Vec<NewPriceRecord>) -> anyhow::Result<PriceAnalytics<Db>> {
    let analytics = open().await?;
    analytics.repository().insert_prices(records).await?;
    Ok(analytics)
}

pub fn midnight(date: Date) -> OffsetDateTime {
    date.midnight().assume_utc()
}

/// A record with only a PMS price.
pub fn pms(state: &str, period: OffsetDateTime, price: f64) -> NewPriceRecord {
    NewPriceRecord {
        state: state.to_owned(),
        region: None,
        period,
        ago: None,
        pms: Some(price),
        dpk: None,
        lpg: None,
    }
}

/// A record with all four prices.
pub fn full(
    state: &str,
    region: &str,
    period: OffsetDateTime,
    [pms, ago, dpk, lpg]: [f64; 4],
) -> NewPriceRecord {
    NewPriceRecord {
        state: state.to_owned(),
        region: Some(region.to_owned()),
        period,
        ago: Some(ago),
        pms: Some(pms),
        dpk: Some(dpk),
        lpg: Some(lpg),
    }
}
