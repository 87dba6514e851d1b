use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    #[error(
        "Names should only contain alphanumeric characters and spaces, and it should not be blank"
    )]
    InvalidName,
    #[error("ID should only contain numbers, and it should be exactly 4 digits long")]
    InvalidProfileId,
    #[error(
        "Height should only contain numbers, and it should be at least 2 digits long and maximum 3 digits long"
    )]
    InvalidHeight,
    #[error(
        "Weight should only contain numbers, and it should be at least 2 digits long and maximum 3 digits long"
    )]
    InvalidWeight,
    #[error("Calories should only contain numbers, and it should be 1 to 5 digits long")]
    InvalidCalorie,
    #[error("calorie label is required")]
    EmptyCalorieLabel,
    #[error("a record for {0} already exists")]
    DuplicateDay(NaiveDate),
    #[error("no record found for {0}")]
    DayNotFound(NaiveDate),
    #[error("no calorie entry at position {index} for {date}")]
    CalorieNotFound { date: NaiveDate, index: usize },
}

impl CoreError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidName
                | CoreError::InvalidProfileId
                | CoreError::InvalidHeight
                | CoreError::InvalidWeight
                | CoreError::InvalidCalorie
                | CoreError::EmptyCalorieLabel
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CoreError::DayNotFound(_) | CoreError::CalorieNotFound { .. }
        )
    }
}
