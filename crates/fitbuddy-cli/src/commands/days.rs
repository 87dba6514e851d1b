use crate::commands::{print_feedback, print_json, Context};
use crate::error::invalid_input;
use crate::util::{day_line, parse_date_arg};
use anyhow::Result;
use clap::{Args, Subcommand};
use fitbuddy_core::commands::{AddDayCommand, DeleteDayCommand, EditDayCommand};
use fitbuddy_core::dto::DayDto;
use fitbuddy_core::time::parse_date;
use fitbuddy_core::{CommandError, Day, EditDayDescriptor, Weight};

#[derive(Debug, Subcommand)]
pub enum DayCommand {
    Add(AddDayArgs),
    Edit(EditDayArgs),
    Delete(DeleteDayArgs),
    Show(ShowDayArgs),
}

#[derive(Debug, Args)]
pub struct AddDayArgs {
    #[arg(long, value_name = "KG")]
    pub weight: String,
    /// Defaults to today
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Debug, Args)]
pub struct EditDayArgs {
    pub date: String,
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub new_date: Option<String>,
    #[arg(long, value_name = "KG")]
    pub weight: Option<String>,
}

#[derive(Debug, Args)]
pub struct DeleteDayArgs {
    pub date: String,
}

#[derive(Debug, Args)]
pub struct ShowDayArgs {
    /// Defaults to today
    pub date: Option<String>,
}

pub fn add_day(ctx: &mut Context<'_>, args: AddDayArgs) -> Result<()> {
    let date = parse_date_arg(args.date.as_deref())?;
    let day = Day::new(date, Weight::new(&args.weight)?);
    let result = ctx.apply(&AddDayCommand::new(day))?;
    print_feedback(ctx, &result)
}

pub fn edit_day(ctx: &mut Context<'_>, args: EditDayArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let descriptor = EditDayDescriptor {
        date: args.new_date.as_deref().map(parse_date).transpose()?,
        weight: args.weight.as_deref().map(Weight::new).transpose()?,
    };
    let command = match EditDayCommand::new(date, descriptor) {
        Ok(command) => command,
        Err(CommandError::NoOp) => return Err(invalid_input("no updates provided")),
        Err(err) => return Err(err.into()),
    };
    let result = ctx.apply(&command)?;
    print_feedback(ctx, &result)
}

pub fn delete_day(ctx: &mut Context<'_>, args: DeleteDayArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let result = ctx.apply(&DeleteDayCommand::new(date))?;
    print_feedback(ctx, &result)
}

pub fn show_day(ctx: &Context<'_>, args: ShowDayArgs) -> Result<()> {
    let date = parse_date_arg(args.date.as_deref())?;
    let day = ctx.model.day_for(date)?;
    let dto = DayDto::from(day);

    if ctx.json {
        return print_json(&dto);
    }

    println!("{}", day_line(&dto));
    for (index, entry) in dto.calories.iter().enumerate() {
        println!(
            "  {}. {} {} {}kcal",
            index + 1,
            entry.kind,
            entry.label,
            entry.kcal
        );
    }
    Ok(())
}
