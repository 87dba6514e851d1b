use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use crate::util::{day_line, ordered};
use anyhow::Result;
use clap::{ArgAction, Args};
use fitbuddy_core::commands::{ClearCommand, FindDaysCommand, ListDaysCommand};
use fitbuddy_core::dto::DayDto;
use fitbuddy_core::{parse_day_filter, Command};

#[derive(Debug, Args)]
pub struct FindArgs {
    #[arg(required = true, num_args = 1..)]
    pub filter: Vec<String>,
}

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Confirm deleting the profile and every day
    #[arg(long, action = ArgAction::SetTrue)]
    pub yes: bool,
}

pub fn list_days(ctx: &mut Context<'_>) -> Result<()> {
    let result = ListDaysCommand.execute(ctx.model)?;
    render(ctx, &result.feedback)
}

pub fn find_days(ctx: &mut Context<'_>, args: FindArgs) -> Result<()> {
    let filter = parse_day_filter(&args.filter.join(" "))?;
    let result = FindDaysCommand::new(filter).execute(ctx.model)?;
    render(ctx, &result.feedback)
}

pub fn clear(ctx: &mut Context<'_>, args: ClearArgs) -> Result<()> {
    if !args.yes {
        return Err(invalid_input("refusing to clear records without --yes"));
    }
    let result = ctx.apply(&ClearCommand)?;
    crate::commands::print_feedback(ctx, &result)
}

fn render(ctx: &Context<'_>, feedback: &str) -> Result<()> {
    let days: Vec<DayDto> = ordered(ctx.model.filtered_days(), ctx.model.prefs().list_order)
        .into_iter()
        .map(DayDto::from)
        .collect();

    if ctx.json {
        return print_json(&days);
    }

    for day in &days {
        println!("{}", day_line(day));
    }
    println!("{}", feedback);
    Ok(())
}
