use crate::models::{Pagination, PriceFilter, PriceRecord, ProductType, StateSeries};

/// Repository interface for read-only scans over price records.
///
/// Every scan honors a [`PriceFilter`]. "Newest first" always means ordered
/// by `period` descending, with the highest record id winning among records
/// that share a period.
pub trait PriceRepository: super::Repository {
    /// For every distinct state (compared case-insensitively), the newest
    /// record matching `filter`.
    ///
    /// # Returns
    ///
    /// One record per state, newest state first.
    fn scan_latest_per_state(
        &self,
        filter: &PriceFilter,
    ) -> impl Future<Output = Result<Vec<PriceRecord>, Self::Error>> + Send;

    /// The records matching `filter`, newest first, truncated to `limit` if given.
    fn scan_ordered(
        &self,
        filter: &PriceFilter,
        limit: Option<usize>,
    ) -> impl Future<Output = Result<Vec<PriceRecord>, Self::Error>> + Send;

    /// For every state, the newest `limit` records matching `filter`,
    /// projected to the price of `product`.
    ///
    /// # Returns
    ///
    /// One series per state, ordered by state name. Each series is newest
    /// first and holds at most `limit` entries.
    fn scan_grouped_history(
        &self,
        filter: &PriceFilter,
        product: ProductType,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<StateSeries>, Self::Error>> + Send;

    /// A page of the records matching `filter`, in insertion order.
    fn scan_paged(
        &self,
        filter: &PriceFilter,
        page: Pagination,
    ) -> impl Future<Output = Result<Vec<PriceRecord>, Self::Error>> + Send;

    /// The number of records matching `filter`.
    fn count_prices(
        &self,
        filter: &PriceFilter,
    ) -> impl Future<Output = Result<u64, Self::Error>> + Send;

    /// Retrieve a single record by its identifier.
    ///
    /// # Returns
    ///
    /// The record if it exists, None otherwise.
    fn get_price(
        &self,
        id: i64,
    ) -> impl Future<Output = Result<Option<PriceRecord>, Self::Error>> + Send;
}
