use crate::commands::{Command, CommandError, CommandResult};
use crate::domain::Person;
use crate::filter::DayFilter;
use crate::model::ModelManager;
use tracing::info;

pub struct ListDaysCommand;

impl Command for ListDaysCommand {
    fn execute(&self, model: &mut ModelManager) -> Result<CommandResult, CommandError> {
        model.update_filtered_day_list(DayFilter::All);
        Ok(CommandResult::new(format!(
            "Listed all {} days",
            model.filtered_len()
        )))
    }
}

pub struct FindDaysCommand {
    filter: DayFilter,
}

impl FindDaysCommand {
    pub fn new(filter: DayFilter) -> Self {
        Self { filter }
    }
}

impl Command for FindDaysCommand {
    fn execute(&self, model: &mut ModelManager) -> Result<CommandResult, CommandError> {
        model.update_filtered_day_list(self.filter.clone());
        Ok(CommandResult::new(format!(
            "{} days listed!",
            model.filtered_len()
        )))
    }
}

pub struct ClearCommand;

impl Command for ClearCommand {
    fn execute(&self, model: &mut ModelManager) -> Result<CommandResult, CommandError> {
        model.reset_data(&Person::new());
        info!("records cleared");
        Ok(CommandResult::profile_changed("All records have been cleared!"))
    }
}
