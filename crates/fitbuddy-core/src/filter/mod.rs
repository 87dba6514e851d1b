mod ast;
mod parser;

use thiserror::Error;

pub use ast::DayFilter;
pub use parser::parse_day_filter;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterParseError {
    #[error("empty filter value for {0}")]
    EmptyValue(String),
    #[error("invalid date in filter: {0}")]
    InvalidDate(String),
    #[error("invalid month in filter: {0}")]
    InvalidMonth(String),
    #[error("invalid weight in filter: {0}")]
    InvalidWeight(String),
    #[error("unknown filter term: {0}")]
    UnknownTerm(String),
}
