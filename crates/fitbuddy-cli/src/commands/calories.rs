use crate::commands::{print_feedback, Context};
use crate::error::invalid_input;
use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use fitbuddy_core::commands::{AddCalorieCommand, RemoveCalorieCommand};
use fitbuddy_core::time::parse_date;
use fitbuddy_core::{Calorie, CalorieEntry, CalorieKind};

#[derive(Debug, Subcommand)]
pub enum CalorieCommand {
    Add(AddCalorieArgs),
    Rm(RemoveCalorieArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum KindArg {
    Intake,
    Burn,
}

impl From<KindArg> for CalorieKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Intake => CalorieKind::Intake,
            KindArg::Burn => CalorieKind::Burn,
        }
    }
}

#[derive(Debug, Args)]
pub struct AddCalorieArgs {
    pub date: String,
    #[arg(long, value_enum)]
    pub kind: KindArg,
    #[arg(long)]
    pub label: String,
    #[arg(long)]
    pub kcal: String,
}

#[derive(Debug, Args)]
pub struct RemoveCalorieArgs {
    pub date: String,
    /// 1-based position as printed by `day show`
    pub position: usize,
}

pub fn add_calorie(ctx: &mut Context<'_>, args: AddCalorieArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let entry = CalorieEntry::new(args.kind.into(), &args.label, Calorie::new(&args.kcal)?)?;
    let result = ctx.apply(&AddCalorieCommand::new(date, entry))?;
    print_feedback(ctx, &result)
}

pub fn remove_calorie(ctx: &mut Context<'_>, args: RemoveCalorieArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    if args.position == 0 {
        return Err(invalid_input("position starts at 1"));
    }
    let result = ctx.apply(&RemoveCalorieCommand::new(date, args.position - 1))?;
    print_feedback(ctx, &result)
}
