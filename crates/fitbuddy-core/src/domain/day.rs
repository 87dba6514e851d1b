use crate::domain::values::{Calorie, Weight};
use crate::error::CoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalorieKind {
    Intake,
    Burn,
}

impl CalorieKind {
    pub fn as_str(self) -> &'static str {
        match self {
            CalorieKind::Intake => "intake",
            CalorieKind::Burn => "burn",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCalorieEntry")]
pub struct CalorieEntry {
    pub kind: CalorieKind,
    pub label: String,
    pub amount: Calorie,
}

#[derive(Deserialize)]
struct RawCalorieEntry {
    kind: CalorieKind,
    label: String,
    amount: Calorie,
}

impl TryFrom<RawCalorieEntry> for CalorieEntry {
    type Error = CoreError;

    fn try_from(raw: RawCalorieEntry) -> Result<Self, Self::Error> {
        Self::new(raw.kind, &raw.label, raw.amount)
    }
}

impl CalorieEntry {
    pub fn new(kind: CalorieKind, label: &str, amount: Calorie) -> Result<Self, CoreError> {
        let label = label.trim();
        if label.is_empty() {
            return Err(CoreError::EmptyCalorieLabel);
        }
        Ok(Self {
            kind,
            label: label.to_string(),
            amount,
        })
    }
}

/// A daily fitness record, identified by its date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Day {
    pub date: NaiveDate,
    pub weight: Weight,
    #[serde(default)]
    pub calories: Vec<CalorieEntry>,
}

impl Day {
    pub fn new(date: NaiveDate, weight: Weight) -> Self {
        Self {
            date,
            weight,
            calories: Vec::new(),
        }
    }

    pub fn is_same_day(&self, other: &Day) -> bool {
        self.date == other.date
    }

    pub fn total_intake(&self) -> u64 {
        self.total(CalorieKind::Intake)
    }

    pub fn total_burn(&self) -> u64 {
        self.total(CalorieKind::Burn)
    }

    pub fn net_calories(&self) -> i64 {
        let intake = i64::try_from(self.total_intake()).unwrap_or(i64::MAX);
        let burn = i64::try_from(self.total_burn()).unwrap_or(i64::MAX);
        intake.saturating_sub(burn)
    }

    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = date;
        self
    }

    pub fn add_calorie(mut self, entry: CalorieEntry) -> Self {
        self.calories.push(entry);
        self
    }

    pub fn remove_calorie(mut self, index: usize) -> Result<Self, CoreError> {
        if index >= self.calories.len() {
            return Err(CoreError::CalorieNotFound {
                date: self.date,
                index,
            });
        }
        self.calories.remove(index);
        Ok(self)
    }

    fn total(&self, kind: CalorieKind) -> u64 {
        self.calories
            .iter()
            .filter(|entry| entry.kind == kind)
            .map(|entry| u64::from(entry.amount.kcal()))
            .sum()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} weight {}kg intake {}kcal burn {}kcal",
            self.date,
            self.weight,
            self.total_intake(),
            self.total_burn()
        )
    }
}

/// Fields a user asked to change on an existing day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDayDescriptor {
    pub date: Option<NaiveDate>,
    pub weight: Option<Weight>,
}

impl EditDayDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.date.is_some() || self.weight.is_some()
    }

    pub fn apply(&self, day: &Day) -> Day {
        let mut edited = day.clone();
        if let Some(date) = self.date {
            edited = edited.with_date(date);
        }
        if let Some(weight) = &self.weight {
            edited = edited.with_weight(weight.clone());
        }
        edited
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::{CalorieEntry, CalorieKind, Day, EditDayDescriptor};
    use crate::domain::values::{Calorie, Weight};
    use crate::error::CoreError;
    use chrono::NaiveDate;

    pub(crate) fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    pub(crate) fn day(y: i32, m: u32, d: u32, weight: &str) -> Day {
        Day::new(date(y, m, d), Weight::new(weight).unwrap())
    }

    fn entry(kind: CalorieKind, label: &str, amount: &str) -> CalorieEntry {
        CalorieEntry::new(kind, label, Calorie::new(amount).unwrap()).unwrap()
    }

    #[test]
    fn calorie_totals() {
        let day = day(2024, 3, 1, "70")
            .add_calorie(entry(CalorieKind::Intake, "breakfast", "450"))
            .add_calorie(entry(CalorieKind::Intake, "dinner", "800"))
            .add_calorie(entry(CalorieKind::Burn, "run", "1500"));
        assert_eq!(day.total_intake(), 1250);
        assert_eq!(day.total_burn(), 1500);
        assert_eq!(day.net_calories(), -250);
    }

    #[test]
    fn totals_do_not_overflow_u32() {
        let mut day = day(2024, 3, 1, "70");
        day.calories = vec![entry(CalorieKind::Intake, "feast", "99999"); 50_000];
        assert_eq!(day.total_intake(), 4_999_950_000);
        assert_eq!(day.net_calories(), 4_999_950_000);
    }

    #[test]
    fn calorie_entry_requires_label() {
        let err = CalorieEntry::new(CalorieKind::Burn, "  ", Calorie::new("10").unwrap())
            .unwrap_err();
        assert_eq!(err, CoreError::EmptyCalorieLabel);
    }

    #[test]
    fn remove_calorie_out_of_range() {
        let err = day(2024, 3, 1, "70").remove_calorie(0).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn same_day_is_by_date() {
        assert!(day(2024, 3, 1, "70").is_same_day(&day(2024, 3, 1, "71")));
        assert!(!day(2024, 3, 1, "70").is_same_day(&day(2024, 3, 2, "70")));
    }

    #[test]
    fn descriptor_only_touches_supplied_fields() {
        let original = day(2024, 3, 1, "70").add_calorie(entry(CalorieKind::Burn, "swim", "300"));
        let descriptor = EditDayDescriptor {
            weight: Some(Weight::new("69").unwrap()),
            ..Default::default()
        };
        assert!(descriptor.is_any_field_edited());
        let edited = descriptor.apply(&original);
        assert_eq!(edited.date, original.date);
        assert_eq!(edited.weight.as_str(), "69");
        assert_eq!(edited.calories, original.calories);
        assert!(!EditDayDescriptor::default().is_any_field_edited());
    }
}
