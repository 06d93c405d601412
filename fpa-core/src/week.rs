//! Weeks are counted from January 1st: week `n` is the Monday-first week
//! containing the day `(n - 1) * 7` days after January 1st of the year. This
//! is not ISO-8601 week numbering, and the two disagree by a few days near
//! year boundaries (week 1 may start in the previous December).

use std::ops::RangeInclusive;
use time::{Date, Duration, Month};

/// The years a week may be resolved in.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1900..=9999;

/// The week numbers a year may be asked about.
pub const SUPPORTED_WEEKS: RangeInclusive<u32> = 1..=53;

/// Rejected (week, year) pairs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WeekError {
    /// The week number is outside [`SUPPORTED_WEEKS`]
    #[error("week must be between 1 and 53, got {0}")]
    Week(i64),
    /// The year is outside [`SUPPORTED_YEARS`]
    #[error("year must be between 1900 and 9999, got {0}")]
    Year(i64),
}

/// Resolve a (week, year) pair into its seven calendar days, Monday first.
pub fn resolve_week(week: i64, year: i64) -> Result<[Date; 7], WeekError> {
    let week = u32::try_from(week)
        .ok()
        .filter(|week| SUPPORTED_WEEKS.contains(week))
        .ok_or(WeekError::Week(week))?;
    let year = i32::try_from(year)
        .ok()
        .filter(|year| SUPPORTED_YEARS.contains(year))
        .ok_or(WeekError::Year(year))?;

    let out_of_range = || WeekError::Year(year.into());
    let jan1 = Date::from_calendar_date(year, Month::January, 1).map_err(|_| out_of_range())?;
    let anchor = jan1
        .checked_add(Duration::days(i64::from(week - 1) * 7))
        .ok_or_else(out_of_range)?;
    let monday = anchor
        .checked_sub(Duration::days(i64::from(
            anchor.weekday().number_days_from_monday(),
        )))
        .ok_or_else(out_of_range)?;

    let mut days = [monday; 7];
    for (offset, day) in days.iter_mut().enumerate().skip(1) {
        *day = monday
            .checked_add(Duration::days(offset as i64))
            .ok_or_else(out_of_range)?;
    }
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use time::{Weekday, macros::date};

    #[rstest]
    #[case(1, 2024, date!(2024 - 01 - 01))] // Jan 1st is a Monday
    #[case(1, 2025, date!(2024 - 12 - 30))] // Jan 1st is a Wednesday
    #[case(1, 2023, date!(2022 - 12 - 26))] // Jan 1st is a Sunday
    #[case(45, 2024, date!(2024 - 11 - 04))]
    #[case(53, 2024, date!(2024 - 12 - 30))]
    fn resolves_monday(#[case] week: i64, #[case] year: i64, #[case] monday: Date) {
        let days = resolve_week(week, year).unwrap();
        assert_eq!(days[0], monday);
    }

    #[rstest]
    fn days_are_consecutive(
        #[values(1, 2, 26, 52, 53)] week: i64,
        #[values(1900, 1999, 2020, 2024, 2025, 9998)] year: i64,
    ) {
        let days = resolve_week(week, year).unwrap();
        assert_eq!(days[0].weekday(), Weekday::Monday);
        for pair in days.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[rstest]
    #[case(0, 2024, WeekError::Week(0))]
    #[case(-3, 2024, WeekError::Week(-3))]
    #[case(54, 2024, WeekError::Week(54))]
    #[case(10, 1899, WeekError::Year(1899))]
    #[case(10, 10_000, WeekError::Year(10_000))]
    #[case(10, -2024, WeekError::Year(-2024))]
    fn rejects_nonsense(#[case] week: i64, #[case] year: i64, #[case] error: WeekError) {
        assert_eq!(resolve_week(week, year), Err(error));
    }
}
