pub mod commands;
pub mod domain;
pub mod dto;
pub mod error;
pub mod filter;
pub mod model;
pub mod time;

pub use commands::{Command, CommandError, CommandResult};
pub use domain::*;
pub use dto::*;
pub use error::CoreError;
pub use filter::{parse_day_filter, DayFilter, FilterParseError};
pub use model::{ListOrder, ModelManager, ProfileModel, UserPrefs};
