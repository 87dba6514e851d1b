use crate::commands::{Command, CommandError, CommandResult};
use crate::domain::{Height, Name, Person, Profile, ProfileId, Weight};
use crate::model::{ModelManager, ProfileModel};
use tracing::info;

pub struct CreateProfileCommand {
    profile: Profile,
}

impl CreateProfileCommand {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }
}

impl Command for CreateProfileCommand {
    fn execute(&self, model: &mut ModelManager) -> Result<CommandResult, CommandError> {
        if !model.is_default_profile() {
            return Err(CommandError::ProfileAlreadySet);
        }
        model.set_profile(self.profile.clone());
        info!(id = %self.profile.id, "profile created");
        Ok(CommandResult::profile_changed(format!(
            "Profile created! {}",
            self.profile
        )))
    }
}

/// Fields supplied to `update`; absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditProfileDescriptor {
    pub name: Option<Name>,
    pub id: Option<ProfileId>,
    pub height: Option<Height>,
    pub weight: Option<Weight>,
}

impl EditProfileDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some() || self.id.is_some() || self.height.is_some() || self.weight.is_some()
    }

    pub fn apply(&self, current: &Profile) -> Profile {
        Profile::new(
            self.name.clone().unwrap_or_else(|| current.name.clone()),
            self.id.clone().unwrap_or_else(|| current.id.clone()),
            self.height.clone().unwrap_or_else(|| current.height.clone()),
            self.weight
                .clone()
                .unwrap_or_else(|| current.target_weight.clone()),
            current.start_date,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCommand {
    descriptor: EditProfileDescriptor,
}

impl UpdateCommand {
    pub fn new(descriptor: EditProfileDescriptor) -> Result<Self, CommandError> {
        if !descriptor.is_any_field_edited() {
            return Err(CommandError::NoOp);
        }
        Ok(Self { descriptor })
    }

    pub fn descriptor(&self) -> &EditProfileDescriptor {
        &self.descriptor
    }

    pub fn execute_on<M>(&self, model: &mut M) -> Result<CommandResult, CommandError>
    where
        M: ProfileModel + ?Sized,
    {
        let current = model
            .profile_state()
            .profile()
            .cloned()
            .ok_or(CommandError::NoProfile)?;

        if let Some(id) = &self.descriptor.id {
            if !is_unique(id, &current, &model.records()) {
                return Err(CommandError::DuplicateId(id.clone()));
            }
        }

        let edited = self.descriptor.apply(&current);
        model.set_profile(edited.clone());
        info!(id = %edited.id, "profile updated");
        Ok(CommandResult::profile_changed(format!(
            "Profile updated! {}",
            edited
        )))
    }
}

impl Command for UpdateCommand {
    fn execute(&self, model: &mut ModelManager) -> Result<CommandResult, CommandError> {
        self.execute_on(model)
    }
}

// True when no record other than the current owner already carries `id`.
fn is_unique(id: &ProfileId, owner: &Profile, records: &[&Person]) -> bool {
    records
        .iter()
        .filter_map(|record| record.profile())
        .filter(|profile| !profile.is_same_identity(owner))
        .all(|profile| &profile.id != id)
}
