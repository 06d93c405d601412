/// The number of records returned per page when the caller does not choose.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A skip/limit window over an ordered result set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pagination {
    /// How many matching records to pass over
    pub skip: usize,
    /// The maximum number of records to return
    pub limit: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// The window for a 1-based page of [`DEFAULT_PAGE_SIZE`] records.
    pub fn from_page(page: u32) -> Result<Self, PaginationError> {
        if page == 0 {
            return Err(PaginationError::Page);
        }
        Ok(Self {
            skip: (page as usize - 1) * DEFAULT_PAGE_SIZE,
            limit: DEFAULT_PAGE_SIZE,
        })
    }

    /// A window from raw, possibly signed, parameters.
    pub fn try_new(skip: i64, limit: i64) -> Result<Self, PaginationError> {
        let skip = usize::try_from(skip).map_err(|_| PaginationError::Skip(skip))?;
        let limit = usize::try_from(limit).map_err(|_| PaginationError::Limit(limit))?;
        Ok(Self { skip, limit })
    }
}

/// Rejected pagination parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    /// Pages are numbered from 1
    #[error("page numbers start at 1")]
    Page,
    /// Negative skip
    #[error("skip must not be negative, got {0}")]
    Skip(i64),
    /// Negative limit
    #[error("limit must not be negative, got {0}")]
    Limit(i64),
}
