use crate::domain::{Day, Profile};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDto {
    pub configured: bool,
    pub name: String,
    pub id: String,
    pub height_cm: String,
    pub target_weight_kg: String,
    pub start_date: Option<NaiveDate>,
}

impl ProfileDto {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            configured: true,
            name: profile.name.to_string(),
            id: profile.id.to_string(),
            height_cm: profile.height.to_string(),
            target_weight_kg: profile.target_weight.to_string(),
            start_date: Some(profile.start_date),
        }
    }

    pub fn placeholder() -> Self {
        Self {
            configured: false,
            start_date: None,
            ..Self::from_profile(&Profile::default_profile())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalorieDto {
    pub kind: String,
    pub label: String,
    pub kcal: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayDto {
    pub date: NaiveDate,
    pub weight_kg: String,
    pub intake_kcal: u64,
    pub burn_kcal: u64,
    pub net_kcal: i64,
    pub calories: Vec<CalorieDto>,
}

impl From<&Day> for DayDto {
    fn from(day: &Day) -> Self {
        Self {
            date: day.date,
            weight_kg: day.weight.to_string(),
            intake_kcal: day.total_intake(),
            burn_kcal: day.total_burn(),
            net_kcal: day.net_calories(),
            calories: day
                .calories
                .iter()
                .map(|entry| CalorieDto {
                    kind: entry.kind.as_str().to_string(),
                    label: entry.label.clone(),
                    kcal: entry.amount.kcal(),
                })
                .collect(),
        }
    }
}
