//! DateTime type for temporal columns.
//!
//! SQLite has no native timestamp type. Storing instants as integer unix
//! milliseconds keeps ordering and range comparisons exact in SQL, which
//! text encodings with variable-width fractional seconds do not.

use time::OffsetDateTime;

/// A UTC instant with millisecond precision, as stored in SQLite.
///
/// Every timestamp read from or written to the database goes through this
/// wrapper.
///
/// # Examples
///
/// ```
/// # use fpa_sqlite::types::DateTime;
/// # use time::OffsetDateTime;
/// let now = OffsetDateTime::now_utc();
/// let stored = DateTime::from(now);
/// let restored: OffsetDateTime = stored.try_into().unwrap();
/// assert_eq!(restored.unix_timestamp(), now.unix_timestamp());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, sqlx::Type)]
#[sqlx(transparent)]
pub struct DateTime(i64);

impl DateTime {
    /// Milliseconds since the unix epoch.
    pub fn unix_millis(&self) -> i64 {
        self.0
    }
}

impl From<OffsetDateTime> for DateTime {
    fn from(value: OffsetDateTime) -> Self {
        let millis = value.unix_timestamp_nanos().div_euclid(1_000_000);
        Self(millis as i64)
    }
}

impl TryFrom<DateTime> for OffsetDateTime {
    type Error = sqlx::Error;

    fn try_from(value: DateTime) -> Result<Self, Self::Error> {
        OffsetDateTime::from_unix_timestamp_nanos(i128::from(value.0) * 1_000_000)
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))
    }
}
