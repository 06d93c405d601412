use fpa_core::{analytics::PriceAnalytics, models::NewPriceRecord, ports::IngestRepository as _};
use fpa_sqlite::Db;
use serde::Serialize;
use std::io::Read;

/// What an import wrote.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ImportSummary {
    pub inserted: usize,
}

/// Decode a JSON array of price records.
pub fn read_records(input: impl Read) -> anyhow::Result<Vec<NewPriceRecord>> {
    Ok(serde_json::from_reader(input)?)
}

pub(super) async fn import(
    analytics: &PriceAnalytics<Db>,
    records: Vec<NewPriceRecord>,
) -> anyhow::Result<ImportSummary> {
    tracing::debug!(records = records.len(), "importing price records");
    let inserted = analytics.repository().insert_prices(records).await?;
    Ok(ImportSummary { inserted })
}
