use super::{AnalyticsError, AnalyticsResult, PriceAnalytics};
use crate::{
    models::{PriceFilter, PriceRecord},
    ports::PriceRepository,
};

impl<R: PriceRepository> PriceAnalytics<R> {
    /// The current prices, optionally narrowed to a region or state.
    ///
    /// With either filter present, this is the single newest matching
    /// record (or nothing). Without filters, it is the newest record of
    /// every state in the store.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn current_price(
        &self,
        region: Option<&str>,
        state: Option<&str>,
    ) -> AnalyticsResult<Vec<PriceRecord>, R> {
        let filter = PriceFilter::new().with_state(state).with_region(region);

        let records = if filter.has_text_criteria() {
            self.repository.scan_ordered(&filter, Some(1)).await
        } else {
            self.repository.scan_latest_per_state(&filter).await
        }
        .map_err(AnalyticsError::Repository)?;

        tracing::debug!(count = records.len(), "resolved current prices");
        Ok(records)
    }

    /// A single record by id.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn price_by_id(&self, id: i64) -> AnalyticsResult<PriceRecord, R> {
        self.repository
            .get_price(id)
            .await
            .map_err(AnalyticsError::Repository)?
            .ok_or(AnalyticsError::NotFound(id))
    }
}
