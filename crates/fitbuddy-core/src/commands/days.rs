use crate::commands::{require_profile, Command, CommandError, CommandResult};
use crate::domain::{Day, EditDayDescriptor};
use crate::model::ModelManager;
use chrono::NaiveDate;

pub struct AddDayCommand {
    day: Day,
}

impl AddDayCommand {
    pub fn new(day: Day) -> Self {
        Self { day }
    }
}

impl Command for AddDayCommand {
    fn execute(&self, model: &mut ModelManager) -> Result<CommandResult, CommandError> {
        require_profile(model)?;
        model.add_day(self.day.clone())?;
        Ok(CommandResult::new(format!("New day added: {}", self.day)))
    }
}

pub struct EditDayCommand {
    date: NaiveDate,
    descriptor: EditDayDescriptor,
}

impl EditDayCommand {
    pub fn new(date: NaiveDate, descriptor: EditDayDescriptor) -> Result<Self, CommandError> {
        if !descriptor.is_any_field_edited() {
            return Err(CommandError::NoOp);
        }
        Ok(Self { date, descriptor })
    }
}

impl Command for EditDayCommand {
    fn execute(&self, model: &mut ModelManager) -> Result<CommandResult, CommandError> {
        require_profile(model)?;
        let target = model.day_for(self.date)?.clone();
        let edited = self.descriptor.apply(&target);
        model.set_day(&target, edited.clone())?;
        Ok(CommandResult::new(format!("Edited day: {}", edited)))
    }
}

pub struct DeleteDayCommand {
    date: NaiveDate,
}

impl DeleteDayCommand {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Command for DeleteDayCommand {
    fn execute(&self, model: &mut ModelManager) -> Result<CommandResult, CommandError> {
        let target = model.day_for(self.date)?.clone();
        let removed = model.delete_day(&target)?;
        Ok(CommandResult::new(format!("Deleted day: {}", removed)))
    }
}
