use crate::models::NewPriceRecord;

/// Repository interface for bulk ingestion of price records.
///
/// Records are only ever appended. The store assigns identifiers in
/// insertion order, which is also how ties between records of the same state
/// and period are broken.
pub trait IngestRepository: super::Repository {
    /// Append `records` to the store.
    ///
    /// # Returns
    ///
    /// The number of records written.
    fn insert_prices(
        &self,
        records: Vec<NewPriceRecord>,
    ) -> impl Future<Output = Result<usize, Self::Error>> + Send;
}
