use super::{AnalyticsError, AnalyticsResult, PriceAnalytics};
use crate::{
    models::{Pagination, PriceFilter, PriceRecord},
    ports::PriceRepository,
};

impl<R: PriceRepository> PriceAnalytics<R> {
    /// A page of records, optionally restricted to a state and/or region.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn list_prices(
        &self,
        state: Option<&str>,
        region: Option<&str>,
        page: Pagination,
    ) -> AnalyticsResult<Vec<PriceRecord>, R> {
        let filter = PriceFilter::new().with_state(state).with_region(region);
        self.repository
            .scan_paged(&filter, page)
            .await
            .map_err(AnalyticsError::Repository)
    }

    /// A page of the records whose state is exactly `query`, ignoring case.
    ///
    /// The match is anchored: "Lag" does not find "Lagos". A blank query is
    /// rejected rather than treated as "everything".
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn search(
        &self,
        query: &str,
        page: Pagination,
    ) -> AnalyticsResult<Vec<PriceRecord>, R> {
        let filter = PriceFilter::new().with_state(Some(query));
        if filter.state.is_none() {
            return Err(AnalyticsError::InvalidArgument(
                "search query must not be empty".to_owned(),
            ));
        }
        self.repository
            .scan_paged(&filter, page)
            .await
            .map_err(AnalyticsError::Repository)
    }

    /// The number of records a [`list_prices`](Self::list_prices) call with
    /// the same filters pages over.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn count_prices(
        &self,
        state: Option<&str>,
        region: Option<&str>,
    ) -> AnalyticsResult<u64, R> {
        let filter = PriceFilter::new().with_state(state).with_region(region);
        self.repository
            .count_prices(&filter)
            .await
            .map_err(AnalyticsError::Repository)
    }
}
