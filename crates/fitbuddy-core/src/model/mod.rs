mod prefs;

pub use prefs::{ListOrder, UserPrefs, DEFAULT_DATA_FILE};

use crate::domain::{Day, Person, Profile, ProfileState};
use crate::error::CoreError;
use crate::filter::DayFilter;
use crate::time::today;
use chrono::NaiveDate;
use tracing::debug;

/// The slice of the model that profile updates need.
pub trait ProfileModel {
    fn profile_state(&self) -> &ProfileState;

    /// Every record whose profile id takes part in uniqueness checks.
    fn records(&self) -> Vec<&Person>;

    fn set_profile(&mut self, profile: Profile);

    fn is_default_profile(&self) -> bool {
        !self.profile_state().is_set()
    }
}

/// In-memory model: the aggregate, user preferences and the filtered day view.
///
/// The view is held as positions into the day list and recomputed after
/// every mutation or filter change, so readers always see current data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModelManager {
    person: Person,
    prefs: UserPrefs,
    filter: DayFilter,
    visible: Vec<usize>,
}

impl ModelManager {
    pub fn new(person: Person, prefs: UserPrefs) -> Self {
        debug!(%person, data_file = %prefs.data_file.display(), "initializing model");
        let mut model = Self {
            person,
            prefs,
            filter: DayFilter::All,
            visible: Vec::new(),
        };
        model.refresh();
        model
    }

    pub fn prefs(&self) -> &UserPrefs {
        &self.prefs
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn reset_data(&mut self, person: &Person) {
        self.person.reset_data(person);
        self.refresh();
    }

    pub fn profile(&self) -> Option<&Profile> {
        self.person.profile()
    }

    pub fn has_profile(&self) -> bool {
        self.person.has_profile()
    }

    pub fn has_day(&self, day: &Day) -> bool {
        self.person.has_day(day)
    }

    pub fn has_day_on(&self, date: NaiveDate) -> bool {
        self.person.has_day_on(date)
    }

    /// The record for the current local date.
    pub fn get_day(&self) -> Result<&Day, CoreError> {
        self.day_for(today())
    }

    pub fn day_for(&self, date: NaiveDate) -> Result<&Day, CoreError> {
        self.person.get_day(date)
    }

    pub fn add_day(&mut self, day: Day) -> Result<(), CoreError> {
        let date = day.date;
        self.person.add_day(day)?;
        debug!(%date, "day added");
        self.update_filtered_day_list(DayFilter::All);
        Ok(())
    }

    pub fn set_day(&mut self, target: &Day, edited: Day) -> Result<(), CoreError> {
        let date = edited.date;
        self.person.set_day(target, edited)?;
        debug!(from = %target.date, to = %date, "day replaced");
        self.refresh();
        Ok(())
    }

    pub fn delete_day(&mut self, target: &Day) -> Result<Day, CoreError> {
        let removed = self.person.remove_day(target)?;
        debug!(date = %removed.date, "day deleted");
        self.refresh();
        Ok(removed)
    }

    pub fn filter(&self) -> &DayFilter {
        &self.filter
    }

    pub fn update_filtered_day_list(&mut self, filter: DayFilter) {
        self.filter = filter;
        self.refresh();
    }

    pub fn filtered_days(&self) -> impl Iterator<Item = &Day> + '_ {
        let days = self.person.day_list().as_slice();
        self.visible.iter().map(move |&index| &days[index])
    }

    pub fn filtered_len(&self) -> usize {
        self.visible.len()
    }

    fn refresh(&mut self) {
        let filter = &self.filter;
        self.visible = self
            .person
            .day_list()
            .iter()
            .enumerate()
            .filter(|(_, day)| filter.matches(day))
            .map(|(index, _)| index)
            .collect();
    }
}

impl ProfileModel for ModelManager {
    fn profile_state(&self) -> &ProfileState {
        self.person.profile_state()
    }

    fn records(&self) -> Vec<&Person> {
        vec![&self.person]
    }

    fn set_profile(&mut self, profile: Profile) {
        debug!(%profile, "profile replaced");
        self.person.set_profile(profile);
    }
}

#[cfg(test)]
mod tests {
    use super::{ModelManager, ProfileModel, UserPrefs};
    use crate::domain::day::tests::{date, day};
    use crate::domain::profile::tests::profile;
    use crate::domain::Person;
    use crate::error::CoreError;
    use crate::filter::DayFilter;
    use crate::time::today;
    use chrono::Datelike;

    fn model_with_days() -> ModelManager {
        let mut person = Person::with_profile(profile("Ada", "1234", "170", "60"));
        person.add_day(day(2024, 1, 1, "72")).unwrap();
        person.add_day(day(2024, 1, 2, "71")).unwrap();
        person.add_day(day(2024, 1, 3, "70")).unwrap();
        ModelManager::new(person, UserPrefs::default())
    }

    fn visible_dates(model: &ModelManager) -> Vec<String> {
        model.filtered_days().map(|d| d.date.to_string()).collect()
    }

    #[test]
    fn view_starts_with_every_day() {
        let model = model_with_days();
        assert_eq!(model.filtered_len(), 3);
        assert_eq!(
            visible_dates(&model),
            ["2024-01-01", "2024-01-02", "2024-01-03"]
        );
    }

    #[test]
    fn view_follows_filter_and_mutations() {
        let mut model = model_with_days();
        model.update_filtered_day_list(DayFilter::WeightAtMost(71));
        assert_eq!(visible_dates(&model), ["2024-01-02", "2024-01-03"]);

        let target = model.day_for(date(2024, 1, 1)).unwrap().clone();
        model
            .set_day(&target, target.clone().with_weight("65".parse().unwrap()))
            .unwrap();
        assert_eq!(
            visible_dates(&model),
            ["2024-01-01", "2024-01-02", "2024-01-03"]
        );

        let target = model.day_for(date(2024, 1, 2)).unwrap().clone();
        model.delete_day(&target).unwrap();
        assert_eq!(visible_dates(&model), ["2024-01-01", "2024-01-03"]);
    }

    #[test]
    fn add_day_resets_filter() {
        let mut model = model_with_days();
        model.update_filtered_day_list(DayFilter::On(date(2024, 1, 1)));
        assert_eq!(model.filtered_len(), 1);
        model.add_day(day(2024, 1, 4, "69")).unwrap();
        assert_eq!(model.filter(), &DayFilter::All);
        assert_eq!(model.filtered_len(), 4);
    }

    #[test]
    fn failed_mutation_surfaces_error() {
        let mut model = model_with_days();
        let err = model.add_day(day(2024, 1, 1, "60")).unwrap_err();
        assert_eq!(err, CoreError::DuplicateDay(date(2024, 1, 1)));
        assert_eq!(model.filtered_len(), 3);
        assert!(model.delete_day(&day(2024, 5, 5, "60")).is_err());
    }

    #[test]
    fn get_day_uses_today() {
        let mut model = model_with_days();
        assert!(model.get_day().is_err());
        let now = today();
        model
            .add_day(day(now.year(), now.month(), now.day(), "68"))
            .unwrap();
        assert_eq!(model.get_day().unwrap().weight.as_str(), "68");
        assert!(model.has_day_on(now));
    }

    #[test]
    fn reset_data_refreshes_view() {
        let mut model = model_with_days();
        model.update_filtered_day_list(DayFilter::WeightAtMost(70));
        model.reset_data(&Person::new());
        assert!(model.is_default_profile());
        assert_eq!(model.filtered_len(), 0);
    }

    #[test]
    fn equality_includes_filter() {
        let a = model_with_days();
        let mut b = model_with_days();
        assert_eq!(a, b);
        b.update_filtered_day_list(DayFilter::WeightAtMost(70));
        assert_ne!(a, b);
        b.update_filtered_day_list(DayFilter::All);
        assert_eq!(a, b);
    }

    #[test]
    fn set_profile_through_trait() {
        let mut model = ModelManager::default();
        assert!(model.is_default_profile());
        model.set_profile(profile("Ada", "1234", "170", "60"));
        assert!(model.has_profile());
        assert_eq!(model.records().len(), 1);
    }
}
