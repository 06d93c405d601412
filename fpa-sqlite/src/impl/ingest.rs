use crate::{Db, types::DateTime};
use fpa_core::{models::NewPriceRecord, ports::IngestRepository};
use time::OffsetDateTime;

// SQLite caps the number of bound parameters per statement; 9 per row keeps
// each chunk well below the limit.
const ROWS_PER_INSERT: usize = 1000;

impl IngestRepository for Db {
    async fn insert_prices(&self, records: Vec<NewPriceRecord>) -> Result<usize, Self::Error> {
        if records.is_empty() {
            return Ok(0);
        }

        let now = DateTime::from(OffsetDateTime::now_utc());
        let mut written = 0;
        let mut tx = self.writer.begin().await?;

        for chunk in records.chunks(ROWS_PER_INSERT) {
            let mut query_builder = sqlx::QueryBuilder::new(
                "insert into price (state, region, period, ago, pms, dpk, lpg, created_at, updated_at) ",
            );
            query_builder.push_values(chunk, |mut b, record| {
                b.push_bind(record.state.trim().to_owned())
                    .push_bind(record.region.as_deref().map(str::trim).map(ToOwned::to_owned))
                    .push_bind(DateTime::from(record.period))
                    .push_bind(record.ago)
                    .push_bind(record.pms)
                    .push_bind(record.dpk)
                    .push_bind(record.lpg)
                    .push_bind(now)
                    .push_bind(now);
            });

            let result = query_builder.build().execute(&mut *tx).await?;
            written += result.rows_affected() as usize;
        }

        tx.commit().await?;
        tracing::info!(written, "inserted price records");

        Ok(written)
    }
}
