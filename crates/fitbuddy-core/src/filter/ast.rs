use crate::domain::Day;
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DayFilter {
    #[default]
    All,
    On(NaiveDate),
    From(NaiveDate),
    To(NaiveDate),
    Month { year: i32, month: u32 },
    WeightAtMost(u32),
    WeightAtLeast(u32),
    And(Vec<DayFilter>),
}

impl DayFilter {
    pub fn matches(&self, day: &Day) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::On(date) => day.date == *date,
            DayFilter::From(date) => day.date >= *date,
            DayFilter::To(date) => day.date <= *date,
            DayFilter::Month { year, month } => {
                day.date.year() == *year && day.date.month() == *month
            }
            DayFilter::WeightAtMost(limit) => day.weight.kilograms() <= *limit,
            DayFilter::WeightAtLeast(limit) => day.weight.kilograms() >= *limit,
            DayFilter::And(terms) => terms.iter().all(|term| term.matches(day)),
        }
    }

    pub fn is_all(&self) -> bool {
        match self {
            DayFilter::All => true,
            DayFilter::And(terms) => terms.iter().all(DayFilter::is_all),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::DayFilter;
    use crate::domain::day::tests::{date, day};

    #[test]
    fn range_terms_are_inclusive() {
        let filter = DayFilter::And(vec![
            DayFilter::From(date(2024, 1, 2)),
            DayFilter::To(date(2024, 1, 4)),
        ]);
        assert!(!filter.matches(&day(2024, 1, 1, "70")));
        assert!(filter.matches(&day(2024, 1, 2, "70")));
        assert!(filter.matches(&day(2024, 1, 4, "70")));
        assert!(!filter.matches(&day(2024, 1, 5, "70")));
    }

    #[test]
    fn month_and_weight_terms() {
        let filter = DayFilter::And(vec![
            DayFilter::Month {
                year: 2024,
                month: 2,
            },
            DayFilter::WeightAtMost(70),
        ]);
        assert!(filter.matches(&day(2024, 2, 10, "70")));
        assert!(!filter.matches(&day(2024, 2, 10, "71")));
        assert!(!filter.matches(&day(2024, 3, 10, "60")));
        assert!(DayFilter::WeightAtLeast(100).matches(&day(2024, 3, 10, "100")));
    }

    #[test]
    fn empty_conjunction_is_all() {
        assert!(DayFilter::And(Vec::new()).is_all());
        assert!(DayFilter::And(Vec::new()).matches(&day(2024, 1, 1, "70")));
        assert!(!DayFilter::On(date(2024, 1, 1)).is_all());
    }
}
