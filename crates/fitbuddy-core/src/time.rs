use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimeParseError {
    #[error("date cannot be empty")]
    Empty,
    #[error("invalid date format: expected YYYY-MM-DD")]
    InvalidDateFormat,
    #[error("invalid month format: expected YYYY-MM")]
    InvalidMonthFormat,
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(input: &str) -> Result<NaiveDate, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }
    if trimmed.eq_ignore_ascii_case("today") {
        return Ok(today());
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| TimeParseError::InvalidDateFormat)
}

pub fn parse_month(input: &str) -> Result<(i32, u32), TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }
    let first = NaiveDate::parse_from_str(&format!("{trimmed}-01"), DATE_FORMAT)
        .map_err(|_| TimeParseError::InvalidMonthFormat)?;
    Ok((first.year(), first.month()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
