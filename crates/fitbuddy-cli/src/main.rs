mod commands;
mod error;
mod util;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{backup, calories, completions, days, profile, view, Context};
use crate::error::{exit_code_for, report_error};
use fitbuddy_config as config;
use fitbuddy_core::ModelManager;
use fitbuddy_store::{paths, Store};

#[derive(Debug, Parser)]
#[command(name = "fitbuddy", version, about = "fitbuddy CLI")]
struct Cli {
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(subcommand)]
    Profile(profile::ProfileCommand),
    #[command(subcommand)]
    Day(days::DayCommand),
    #[command(subcommand)]
    Calorie(calories::CalorieCommand),
    /// List every recorded day
    List,
    /// Show days matching a filter, e.g. `from:2024-01-01 weight<=70`
    Find(view::FindArgs),
    Clear(view::ClearArgs),
    Backup(backup::BackupArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        data_file,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    if let Command::Completions(args) = command {
        return completions::emit(args);
    }

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let data_path = paths::resolve_data_file(data_file.or_else(|| app_config.data_file.clone()))
        .with_context(|| "resolve data file path")?;
    debug!(path = %data_path.display(), "data file resolved");

    let store = Store::open(&data_path)
        .with_context(|| format!("open data file {}", data_path.display()))?;
    let person = store
        .load()
        .with_context(|| format!("load data file {}", data_path.display()))?;
    let mut model = ModelManager::new(person, app_config.user_prefs(data_path));

    let mut ctx = Context {
        store: &store,
        model: &mut model,
        json,
    };

    match command {
        Command::Profile(cmd) => match cmd {
            profile::ProfileCommand::Create(args) => profile::create_profile(&mut ctx, args),
            profile::ProfileCommand::Update(args) => profile::update_profile(&mut ctx, args),
            profile::ProfileCommand::Show => profile::show_profile(&ctx),
        },
        Command::Day(cmd) => match cmd {
            days::DayCommand::Add(args) => days::add_day(&mut ctx, args),
            days::DayCommand::Edit(args) => days::edit_day(&mut ctx, args),
            days::DayCommand::Delete(args) => days::delete_day(&mut ctx, args),
            days::DayCommand::Show(args) => days::show_day(&ctx, args),
        },
        Command::Calorie(cmd) => match cmd {
            calories::CalorieCommand::Add(args) => calories::add_calorie(&mut ctx, args),
            calories::CalorieCommand::Rm(args) => calories::remove_calorie(&mut ctx, args),
        },
        Command::List => view::list_days(&mut ctx),
        Command::Find(args) => view::find_days(&mut ctx, args),
        Command::Clear(args) => view::clear(&mut ctx, args),
        Command::Backup(args) => backup::backup(&ctx, args),
        Command::Completions(_) => {
            unreachable!("completions command handled before loading data")
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
