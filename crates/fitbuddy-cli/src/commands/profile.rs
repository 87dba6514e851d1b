use crate::commands::{print_feedback, print_json, Context};
use crate::error::invalid_input;
use crate::util::parse_date_arg;
use anyhow::Result;
use clap::{Args, Subcommand};
use fitbuddy_core::commands::{CreateProfileCommand, EditProfileDescriptor, UpdateCommand};
use fitbuddy_core::dto::ProfileDto;
use fitbuddy_core::{CommandError, Height, Name, Profile, ProfileId, Weight};

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    Create(CreateProfileArgs),
    Update(UpdateProfileArgs),
    Show,
}

#[derive(Debug, Args)]
pub struct CreateProfileArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub id: String,
    #[arg(long, value_name = "CM")]
    pub height: String,
    #[arg(long, value_name = "KG")]
    pub target_weight: String,
    /// Programme start date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub start_date: Option<String>,
}

#[derive(Debug, Args)]
pub struct UpdateProfileArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub id: Option<String>,
    #[arg(long, value_name = "CM")]
    pub height: Option<String>,
    #[arg(long, value_name = "KG")]
    pub target_weight: Option<String>,
}

pub fn create_profile(ctx: &mut Context<'_>, args: CreateProfileArgs) -> Result<()> {
    let profile = Profile::new(
        Name::new(&args.name)?,
        ProfileId::new(&args.id)?,
        Height::new(&args.height)?,
        Weight::new(&args.target_weight)?,
        parse_date_arg(args.start_date.as_deref())?,
    );
    let result = ctx.apply(&CreateProfileCommand::new(profile))?;
    print_feedback(ctx, &result)
}

pub fn update_profile(ctx: &mut Context<'_>, args: UpdateProfileArgs) -> Result<()> {
    let descriptor = EditProfileDescriptor {
        name: args.name.as_deref().map(Name::new).transpose()?,
        id: args.id.as_deref().map(ProfileId::new).transpose()?,
        height: args.height.as_deref().map(Height::new).transpose()?,
        weight: args.target_weight.as_deref().map(Weight::new).transpose()?,
    };
    let command = match UpdateCommand::new(descriptor) {
        Ok(command) => command,
        Err(CommandError::NoOp) => return Err(invalid_input("no updates provided")),
        Err(err) => return Err(err.into()),
    };
    let result = ctx.apply(&command)?;
    print_feedback(ctx, &result)
}

pub fn show_profile(ctx: &Context<'_>) -> Result<()> {
    let dto = match ctx.model.profile() {
        Some(profile) => ProfileDto::from_profile(profile),
        None => ProfileDto::placeholder(),
    };

    if ctx.json {
        return print_json(&dto);
    }

    if !dto.configured {
        println!("no profile configured (showing defaults)");
    }
    println!("name: {}", dto.name);
    println!("id: {}", dto.id);
    println!("height: {}cm", dto.height_cm);
    println!("target_weight: {}kg", dto.target_weight_kg);
    if let Some(start) = dto.start_date {
        println!("start_date: {}", start);
    }
    Ok(())
}
