use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    CoachCommands, DayCommands, ExerciseCommands, LanguageArgs, ScheduleCommands,
};

/// Command-line companion for the FitPulse training program
///
/// Shows and edits the day-by-day program schedule: which workout falls on
/// each day, which exercises each day holds, and the user's own exercises.
/// Running `fp` with no command shows the current schedule.
#[derive(Parser)]
#[command(version, about, name = "fp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/fitpulse/fitpulse.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Path to a JSON plan and exercise catalogue replacing the built-in one
    #[arg(long, global = true)]
    pub catalogue_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the FitPulse CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Show and change the program schedule
    #[command(alias = "s")]
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommands,
    },
    /// Show and edit one day's exercises
    #[command(alias = "d")]
    Day {
        #[command(subcommand)]
        command: DayCommands,
    },
    /// Browse and manage the exercise library
    #[command(alias = "e")]
    Exercise {
        #[command(subcommand)]
        command: ExerciseCommands,
    },
    /// Talk to the AI coach (requires GROQ_API_KEY)
    #[command(alias = "c")]
    Coach {
        #[command(subcommand)]
        command: CoachCommands,
    },
    /// Set the language the coach answers in
    Language(LanguageArgs),
}
