use time::{Date, OffsetDateTime, macros::time};

/// The first instant of `date`, in UTC.
pub fn start_of_day(date: Date) -> OffsetDateTime {
    date.midnight().assume_utc()
}

/// The last millisecond of `date`, in UTC.
///
/// A calendar date used as an inclusive upper bound covers every record
/// stamped at any time on that day.
pub fn end_of_day(date: Date) -> OffsetDateTime {
    date.with_time(time!(23:59:59.999)).assume_utc()
}
