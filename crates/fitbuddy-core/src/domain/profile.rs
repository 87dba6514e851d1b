use crate::domain::values::{Height, Name, ProfileId, Weight};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_NAME: &str = "Default";
pub const DEFAULT_ID: &str = "1111";
pub const DEFAULT_HEIGHT: &str = "170";
pub const DEFAULT_TARGET_WEIGHT: &str = "50";

/// Identity record for the single user of the application.
///
/// Equality compares name, id, height and target weight. The start date is
/// carried along but never takes part in comparisons.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: Name,
    pub id: ProfileId,
    pub height: Height,
    pub target_weight: Weight,
    pub start_date: NaiveDate,
}

impl Profile {
    pub fn new(
        name: Name,
        id: ProfileId,
        height: Height,
        target_weight: Weight,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            name,
            id,
            height,
            target_weight,
            start_date,
        }
    }

    /// The well-known placeholder shown while no profile is configured.
    pub fn default_profile() -> Self {
        Self {
            name: Name::from_static(DEFAULT_NAME),
            id: ProfileId::from_static(DEFAULT_ID),
            height: Height::from_static(DEFAULT_HEIGHT),
            target_weight: Weight::from_static(DEFAULT_TARGET_WEIGHT),
            start_date: NaiveDate::MIN,
        }
    }

    pub fn is_same_identity(&self, other: &Profile) -> bool {
        self.id == other.id && self.name == other.name
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }
}

impl PartialEq for Profile {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.id == other.id
            && self.height == other.height
            && self.target_weight == other.target_weight
    }
}

impl Eq for Profile {}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {} ID: {} Height: {}cm Target Weight: {}kg",
            self.name, self.id, self.height, self.target_weight
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ProfileState {
    #[default]
    Unset,
    Set(Profile),
}

impl ProfileState {
    pub fn is_set(&self) -> bool {
        matches!(self, ProfileState::Set(_))
    }

    pub fn profile(&self) -> Option<&Profile> {
        match self {
            ProfileState::Unset => None,
            ProfileState::Set(profile) => Some(profile),
        }
    }

    pub fn profile_or_default(&self) -> Profile {
        self.profile()
            .cloned()
            .unwrap_or_else(Profile::default_profile)
    }
}

impl From<Option<Profile>> for ProfileState {
    fn from(value: Option<Profile>) -> Self {
        match value {
            Some(profile) => ProfileState::Set(profile),
            None => ProfileState::Unset,
        }
    }
}
