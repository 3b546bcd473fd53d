//! FitPulse CLI Application
//!
//! Command-line interface for the FitPulse program schedule.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use fitpulse_core::SchedulerBuilder;
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        catalogue_file,
        no_color,
        command,
    } = Args::parse();

    let scheduler = SchedulerBuilder::new()
        .with_database_path(database_file)
        .with_catalogue_file(catalogue_file)
        .build()
        .await
        .context("Failed to initialize scheduler")?;

    let cli = Cli::new(scheduler, TerminalRenderer::new(!no_color));

    info!("FitPulse started");

    match command {
        Some(Schedule { command }) => cli.handle_schedule_command(command).await,
        Some(Day { command }) => cli.handle_day_command(command).await,
        Some(Exercise { command }) => cli.handle_exercise_command(command).await,
        Some(Coach { command }) => cli.handle_coach_command(command).await,
        Some(Language(args)) => cli.set_language(args.into()).await,
        None => cli.show_schedule().await,
    }
}
