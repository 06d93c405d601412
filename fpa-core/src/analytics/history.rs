use super::{AnalyticsError, AnalyticsResult, PriceAnalytics};
use crate::{
    models::{PriceFilter, ProductHistoryRow, ProductType, end_of_day},
    ports::PriceRepository,
};
use time::Date;

impl<R: PriceRepository> PriceAnalytics<R> {
    /// The price history of one product up to and including `period`.
    ///
    /// When `duration` is given only the newest `duration` records are kept;
    /// a zero duration means no bound. The rows are returned oldest first.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn history(
        &self,
        product: &str,
        period: Date,
        duration: Option<usize>,
        state: Option<&str>,
    ) -> AnalyticsResult<Vec<ProductHistoryRow>, R> {
        let product = product.parse::<ProductType>()?;
        let filter = PriceFilter::new()
            .with_state(state)
            .on_or_before(end_of_day(period));

        let mut records = self
            .repository
            .scan_ordered(&filter, duration.filter(|&duration| duration > 0))
            .await
            .map_err(AnalyticsError::Repository)?;

        // stores hand back newest first, but callers read oldest first
        records.reverse();

        Ok(records
            .into_iter()
            .map(|record| ProductHistoryRow {
                period: record.period,
                product,
                price: record.price(product),
                state: record.state,
            })
            .collect())
    }
}
