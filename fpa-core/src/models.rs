mod datetime;
mod filter;
mod pagination;
mod price;
mod product;
mod report;

pub use datetime::{end_of_day, start_of_day};
pub use filter::PriceFilter;
pub use pagination::{DEFAULT_PAGE_SIZE, Pagination, PaginationError};
pub use price::{NewPriceRecord, PriceRecord};
pub use product::{ProductType, ProductTypeError};
pub use report::{PricePoint, ProductHistoryRow, ProductPerformance, StateSeries, WeeklyReport};
