mod ingest;
mod price;

pub use ingest::IngestRepository;
pub use price::PriceRepository;

/// The base trait every price store implements.
///
/// It fixes the error type the store surfaces. The analytics engine never
/// retries or reinterprets these errors; it hands them back to the caller
/// unmodified.
pub trait Repository: Send + Sync {
    /// The store's failure type
    type Error: std::error::Error + Send + Sync + 'static;
}
