use crate::domain::day::Day;
use crate::domain::day_list::UniqueDayList;
use crate::domain::profile::{Profile, ProfileState};
use crate::error::CoreError;
use chrono::NaiveDate;
use std::fmt;

/// Aggregate root: the user's profile and every recorded day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Person {
    profile: ProfileState,
    days: UniqueDayList,
}

impl Person {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: Profile) -> Self {
        Self {
            profile: ProfileState::Set(profile),
            days: UniqueDayList::new(),
        }
    }

    pub fn from_parts(profile: ProfileState, days: UniqueDayList) -> Self {
        Self { profile, days }
    }

    pub fn profile_state(&self) -> &ProfileState {
        &self.profile
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.profile.profile()
    }

    pub fn has_profile(&self) -> bool {
        self.profile.is_set()
    }

    pub fn is_default_profile(&self) -> bool {
        !self.has_profile()
    }

    pub fn set_profile(&mut self, profile: Profile) {
        self.profile = ProfileState::Set(profile);
    }

    pub fn day_list(&self) -> &UniqueDayList {
        &self.days
    }

    pub fn reset_data(&mut self, other: &Person) {
        self.profile = other.profile.clone();
        self.days = other.days.clone();
    }

    pub fn has_day(&self, day: &Day) -> bool {
        self.days.contains(day)
    }

    pub fn has_day_on(&self, date: NaiveDate) -> bool {
        self.days.contains_date(date)
    }

    pub fn get_day(&self, date: NaiveDate) -> Result<&Day, CoreError> {
        self.days.get_by_date(date)
    }

    pub fn add_day(&mut self, day: Day) -> Result<(), CoreError> {
        self.days.add(day)
    }

    pub fn set_day(&mut self, target: &Day, edited: Day) -> Result<(), CoreError> {
        self.days.replace(target, edited)
    }

    pub fn remove_day(&mut self, day: &Day) -> Result<Day, CoreError> {
        self.days.remove(day)
    }

    /// Weaker equality: same profile id and name, ignoring everything else.
    pub fn is_same_person(&self, other: &Person) -> bool {
        match (self.profile(), other.profile()) {
            (Some(mine), Some(theirs)) => mine.is_same_identity(theirs),
            (None, None) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.profile() {
            Some(profile) => write!(f, "Profile: {}", profile)?,
            None => write!(f, "Profile: <unset>")?,
        }
        write!(f, " Days: {}", self.days.len())
    }
}

#[cfg(test)]
mod tests {
    use super::Person;
    use crate::domain::day::tests::{date, day};
    use crate::domain::profile::tests::profile;
    use crate::error::CoreError;

    #[test]
    fn new_person_starts_unset() {
        let person = Person::new();
        assert!(!person.has_profile());
        assert!(person.is_default_profile());
        assert!(person.day_list().is_empty());
    }

    #[test]
    fn setting_profile_moves_to_set() {
        let mut person = Person::new();
        person.set_profile(profile("Ada", "1234", "170", "60"));
        assert!(person.has_profile());
        person.set_profile(profile("Ada", "1234", "171", "60"));
        assert_eq!(person.profile().unwrap().height.as_str(), "171");
    }

    #[test]
    fn day_operations_surface_list_failures() {
        let mut person = Person::with_profile(profile("Ada", "1234", "170", "60"));
        person.add_day(day(2024, 1, 1, "70")).unwrap();
        assert!(person.has_day_on(date(2024, 1, 1)));
        assert_eq!(
            person.add_day(day(2024, 1, 1, "71")).unwrap_err(),
            CoreError::DuplicateDay(date(2024, 1, 1))
        );
        assert_eq!(
            person.get_day(date(2024, 1, 9)).unwrap_err(),
            CoreError::DayNotFound(date(2024, 1, 9))
        );
        person.remove_day(&day(2024, 1, 1, "70")).unwrap();
        assert!(!person.has_day(&day(2024, 1, 1, "70")));
    }

    #[test]
    fn reset_data_replaces_everything() {
        let mut person = Person::with_profile(profile("Ada", "1234", "170", "60"));
        person.add_day(day(2024, 1, 1, "70")).unwrap();

        let mut other = Person::with_profile(profile("Bea", "2222", "160", "55"));
        other.add_day(day(2024, 2, 1, "56")).unwrap();
        other.add_day(day(2024, 2, 2, "55")).unwrap();

        person.reset_data(&other);
        assert_eq!(person, other);
        assert!(!person.has_day_on(date(2024, 1, 1)));
    }

    #[test]
    fn same_person_is_reflexive_and_symmetric() {
        let a = Person::with_profile(profile("Ada", "1234", "170", "60"));
        let mut b = Person::with_profile(profile("Ada", "1234", "180", "70"));
        b.add_day(day(2024, 1, 1, "70")).unwrap();

        assert!(a.is_same_person(&a));
        assert!(a.is_same_person(&b));
        assert!(b.is_same_person(&a));
        assert_ne!(a, b);
    }

    #[test]
    fn equality_covers_profile_and_days() {
        let mut a = Person::with_profile(profile("Ada", "1234", "170", "60"));
        let mut b = a.clone();
        let mut c = a.clone();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a, c);

        a.add_day(day(2024, 1, 1, "70")).unwrap();
        assert_ne!(a, b);
        b.add_day(day(2024, 1, 1, "70")).unwrap();
        assert_eq!(a, b);

        c.set_profile(profile("Ada", "1234", "170", "61"));
        c.add_day(day(2024, 1, 1, "70")).unwrap();
        assert_ne!(a, c);
    }
}
