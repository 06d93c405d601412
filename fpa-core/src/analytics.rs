use crate::{
    models::{PaginationError, ProductTypeError},
    ports::PriceRepository,
    week::WeekError,
};

mod history;
mod listing;
pub mod metrics;
mod performance;
mod snapshot;
mod weekly;

/// The query engine behind every price report.
///
/// The engine is stateless apart from the store it is given. Every
/// operation is an independent read; two calls observe whatever the store
/// holds at the time each of them runs.
///
/// # Example
///
/// ```ignore
/// let analytics = PriceAnalytics::new(db);
/// let snapshot = analytics.current_price(None, Some("Lagos")).await?;
/// ```
#[derive(Clone, Debug)]
pub struct PriceAnalytics<R> {
    repository: R,
}

impl<R: PriceRepository> PriceAnalytics<R> {
    /// Build an engine over `repository`.
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// The store the engine reads from.
    pub fn repository(&self) -> &R {
        &self.repository
    }
}

/// Failures of an analytics operation.
///
/// Validation failures are reported before the store is consulted. A query
/// that simply finds nothing is not an error: it yields an empty collection
/// or zeroed metrics.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError<E: std::error::Error + 'static> {
    /// The product tag is not one of the four known products
    #[error(transparent)]
    InvalidProduct(#[from] ProductTypeError),

    /// A week, year or pagination parameter is out of range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A lookup by id found no record
    #[error("no price record with id {0}")]
    NotFound(i64),

    /// The store failed to execute a query
    #[error("price store failure: {0}")]
    Repository(#[source] E),
}

impl<E: std::error::Error + 'static> From<WeekError> for AnalyticsError<E> {
    fn from(value: WeekError) -> Self {
        Self::InvalidArgument(value.to_string())
    }
}

impl<E: std::error::Error + 'static> From<PaginationError> for AnalyticsError<E> {
    fn from(value: PaginationError) -> Self {
        Self::InvalidArgument(value.to_string())
    }
}

/// The result of an analytics operation over the store `R`.
pub type AnalyticsResult<T, R> = Result<T, AnalyticsError<<R as crate::ports::Repository>::Error>>;

