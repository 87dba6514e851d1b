use crate::domain::ProfileId;
use crate::error::CoreError;
use crate::model::ModelManager;
use serde::Serialize;
use thiserror::Error;

pub mod calories;
pub mod days;
pub mod profile;
pub mod view;

pub use calories::{AddCalorieCommand, RemoveCalorieCommand};
pub use days::{AddDayCommand, DeleteDayCommand, EditDayCommand};
pub use profile::{CreateProfileCommand, EditProfileDescriptor, UpdateCommand};
pub use view::{ClearCommand, FindDaysCommand, ListDaysCommand};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("No profile found. Create a profile first.")]
    NoProfile,
    #[error("At least one valid field to edit must be provided.")]
    NoOp,
    #[error("The ID {0} you intend to change to belongs to someone else")]
    DuplicateId(ProfileId),
    #[error("A profile already exists. Use update to change it.")]
    ProfileAlreadySet,
    #[error(transparent)]
    Core(#[from] CoreError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    pub feedback: String,
    pub profile_changed: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            profile_changed: false,
        }
    }

    pub fn profile_changed(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            profile_changed: true,
        }
    }
}

pub trait Command {
    fn execute(&self, model: &mut ModelManager) -> Result<CommandResult, CommandError>;
}

fn require_profile(model: &ModelManager) -> Result<(), CommandError> {
    if model.has_profile() {
        Ok(())
    } else {
        Err(CommandError::NoProfile)
    }
}
