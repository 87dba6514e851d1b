use anyhow::{Context as _, Result};
use fitbuddy_core::{Command, CommandResult, ModelManager};
use fitbuddy_store::Store;
use serde::Serialize;
use std::io::{self, Write};

pub mod backup;
pub mod calories;
pub mod completions;
pub mod days;
pub mod profile;
pub mod view;

pub struct Context<'a> {
    pub store: &'a Store,
    pub model: &'a mut ModelManager,
    pub json: bool,
}

impl Context<'_> {
    /// Runs `command` against the model and persists the result.
    pub fn apply(&mut self, command: &dyn Command) -> Result<CommandResult> {
        let result = command.execute(self.model)?;
        self.save()?;
        Ok(result)
    }

    pub fn save(&self) -> Result<()> {
        self.store
            .save(self.model.person())
            .with_context(|| format!("save data file {}", self.store.path().display()))
    }
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub fn print_feedback(ctx: &Context<'_>, result: &CommandResult) -> Result<()> {
    if ctx.json {
        print_json(result)
    } else {
        println!("{}", result.feedback);
        Ok(())
    }
}
