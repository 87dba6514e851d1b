use crate::commands::{require_profile, Command, CommandError, CommandResult};
use crate::domain::CalorieEntry;
use crate::model::ModelManager;
use chrono::NaiveDate;

pub struct AddCalorieCommand {
    date: NaiveDate,
    entry: CalorieEntry,
}

impl AddCalorieCommand {
    pub fn new(date: NaiveDate, entry: CalorieEntry) -> Self {
        Self { date, entry }
    }
}

impl Command for AddCalorieCommand {
    fn execute(&self, model: &mut ModelManager) -> Result<CommandResult, CommandError> {
        require_profile(model)?;
        let target = model.day_for(self.date)?.clone();
        let edited = target.clone().add_calorie(self.entry.clone());
        model.set_day(&target, edited)?;
        Ok(CommandResult::new(format!(
            "Added {} {} ({}kcal) on {}",
            self.entry.kind.as_str(),
            self.entry.label,
            self.entry.amount,
            self.date
        )))
    }
}

pub struct RemoveCalorieCommand {
    date: NaiveDate,
    index: usize,
}

impl RemoveCalorieCommand {
    /// `index` is zero-based.
    pub fn new(date: NaiveDate, index: usize) -> Self {
        Self { date, index }
    }
}

impl Command for RemoveCalorieCommand {
    fn execute(&self, model: &mut ModelManager) -> Result<CommandResult, CommandError> {
        let target = model.day_for(self.date)?.clone();
        let edited = target.clone().remove_calorie(self.index)?;
        model.set_day(&target, edited)?;
        Ok(CommandResult::new(format!(
            "Removed calorie entry {} on {}",
            self.index + 1,
            self.date
        )))
    }
}
