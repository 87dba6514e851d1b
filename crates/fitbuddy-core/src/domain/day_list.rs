use crate::domain::day::Day;
use crate::error::CoreError;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Insertion-ordered days with at most one entry per date.
///
/// Entries are located by date: a `Day` passed as a target only needs to
/// carry the date of the stored entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UniqueDayList {
    days: Vec<Day>,
}

impl UniqueDayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_days(days: Vec<Day>) -> Result<Self, CoreError> {
        let mut list = Self::new();
        list.reset(days)?;
        Ok(list)
    }

    pub fn contains(&self, day: &Day) -> bool {
        self.contains_date(day.date)
    }

    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.position(date).is_some()
    }

    pub fn get_by_date(&self, date: NaiveDate) -> Result<&Day, CoreError> {
        self.position(date)
            .map(|index| &self.days[index])
            .ok_or(CoreError::DayNotFound(date))
    }

    pub fn add(&mut self, day: Day) -> Result<(), CoreError> {
        if self.contains(&day) {
            return Err(CoreError::DuplicateDay(day.date));
        }
        self.days.push(day);
        Ok(())
    }

    pub fn replace(&mut self, target: &Day, edited: Day) -> Result<(), CoreError> {
        let index = self
            .position(target.date)
            .ok_or(CoreError::DayNotFound(target.date))?;
        if !target.is_same_day(&edited) && self.contains(&edited) {
            return Err(CoreError::DuplicateDay(edited.date));
        }
        self.days[index] = edited;
        Ok(())
    }

    pub fn remove(&mut self, day: &Day) -> Result<Day, CoreError> {
        let index = self
            .position(day.date)
            .ok_or(CoreError::DayNotFound(day.date))?;
        Ok(self.days.remove(index))
    }

    pub fn reset(&mut self, days: Vec<Day>) -> Result<(), CoreError> {
        let mut seen = HashSet::with_capacity(days.len());
        for day in &days {
            if !seen.insert(day.date) {
                return Err(CoreError::DuplicateDay(day.date));
            }
        }
        self.days = days;
        Ok(())
    }

    pub fn as_slice(&self) -> &[Day] {
        &self.days
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Day> {
        self.days.iter()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    fn position(&self, date: NaiveDate) -> Option<usize> {
        self.days.iter().position(|day| day.date == date)
    }
}

impl<'a> IntoIterator for &'a UniqueDayList {
    type Item = &'a Day;
    type IntoIter = std::slice::Iter<'a, Day>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter()
    }
}
