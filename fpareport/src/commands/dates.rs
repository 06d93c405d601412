use crate::CliError;
use time::{Date, macros::format_description};

/// Parse a `YYYY-MM-DD` calendar date.
pub fn parse_date(value: &str) -> Result<Date, CliError> {
    Date::parse(value.trim(), format_description!("[year]-[month]-[day]"))
        .map_err(|_| CliError::InvalidDate(value.to_owned()))
}
