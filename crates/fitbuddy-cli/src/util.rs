use anyhow::Result;
use chrono::NaiveDate;
use fitbuddy_core::dto::DayDto;
use fitbuddy_core::time::{format_date, parse_date, today};
use fitbuddy_core::{Day, ListOrder};

pub fn parse_date_arg(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(value) => Ok(parse_date(value)?),
        None => Ok(today()),
    }
}

pub fn ordered<'a>(days: impl Iterator<Item = &'a Day>, order: ListOrder) -> Vec<&'a Day> {
    let mut days: Vec<&Day> = days.collect();
    match order {
        ListOrder::Insertion => {}
        ListOrder::Ascending => days.sort_by_key(|day| day.date),
        ListOrder::Descending => days.sort_by(|a, b| b.date.cmp(&a.date)),
    }
    days
}

pub fn day_line(day: &DayDto) -> String {
    format!(
        "{}  {}kg  in {}kcal  out {}kcal  net {}kcal",
        format_date(day.date),
        day.weight_kg,
        day.intake_kcal,
        day.burn_kcal,
        day.net_kcal
    )
}
