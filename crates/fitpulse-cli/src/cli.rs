//! Command definitions and handlers.
//!
//! Argument structures carry the clap derives and convert into the core
//! parameter types, so the core stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Scheduler
//! ```
//!
//! [`Cli`] runs each command against a [`Scheduler`] and renders the markdown
//! produced by the core display types.

use std::{fs, io::Read, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use fitpulse_core::{
    display::{CreateResult, DeleteResult, ExerciseList, OperationStatus, Transcript, UpdateResult},
    params::*,
    Coach, ExerciseCategory, Language, Scheduler,
};
use log::debug;

use crate::renderer::TerminalRenderer;

// ============================================================================
// Schedule
// ============================================================================

/// Choose a program length and regenerate the schedule
#[derive(Args)]
pub struct DurationArgs {
    /// Program length in days (7 to 90; common choices are 15, 21 and 30)
    pub days: u32,
}

impl From<DurationArgs> for ProgramLength {
    fn from(val: DurationArgs) -> Self {
        ProgramLength { days: val.days }
    }
}

/// Generate a schedule of any length
#[derive(Args)]
pub struct GenerateArgs {
    /// Number of days; values outside 7 to 120 are clamped
    pub days: u32,
}

impl From<GenerateArgs> for ProgramLength {
    fn from(val: GenerateArgs) -> Self {
        ProgramLength { days: val.days }
    }
}

/// Apply a schedule suggestion from text containing a JSON object
///
/// The text may contain anything around the object. The object needs a
/// `schedule` list of day-type codes (0 rest, 1 rope, 2 circuit, 3 rope
/// intervals, 4 walk, 5 HIIT, 6 strength), and may carry `duration` and a
/// `customDays` map such as `{"d1": ["rope", "burpees"]}`.
#[derive(Args)]
pub struct ApplyArgs {
    /// Read the text from this file instead of standard input
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum ScheduleCommands {
    /// Show the resolved schedule
    #[command(aliases = ["s", "ls"])]
    Show,
    /// Choose a program length and regenerate the schedule
    #[command(alias = "d")]
    Duration(DurationArgs),
    /// Generate a schedule of any length
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Clear the schedule and all day exercise edits
    Reset,
    /// Apply a schedule suggestion from text containing a JSON object
    #[command(alias = "a")]
    Apply(ApplyArgs),
}

// ============================================================================
// Day
// ============================================================================

/// Show one day's workout and exercises
#[derive(Args)]
pub struct ShowDayArgs {
    /// Day number, starting at 1
    pub day: u32,
}

impl From<ShowDayArgs> for Day {
    fn from(val: ShowDayArgs) -> Self {
        Day { day: val.day }
    }
}

/// Replace a day's exercise list
///
/// Giving no exercise IDs stores an empty list, which is different from
/// having no edit: the day then has no exercises at all.
#[derive(Args)]
pub struct SetDayArgs {
    /// Day number, starting at 1
    pub day: u32,
    /// Exercise IDs in order
    pub exercises: Vec<String>,
}

impl From<SetDayArgs> for SetDayExercises {
    fn from(val: SetDayArgs) -> Self {
        SetDayExercises {
            day: val.day,
            exercises: val.exercises,
        }
    }
}

/// Append an exercise to a day
#[derive(Args)]
pub struct AddDayArgs {
    /// Day number, starting at 1
    pub day: u32,
    /// Exercise ID to append
    pub exercise_id: String,
}

impl From<AddDayArgs> for AddDayExercise {
    fn from(val: AddDayArgs) -> Self {
        AddDayExercise {
            day: val.day,
            exercise_id: val.exercise_id,
        }
    }
}

/// Remove an exercise from a day
#[derive(Args)]
pub struct RemoveDayArgs {
    /// Day number, starting at 1
    pub day: u32,
    /// Position of the exercise as listed by `fp day show`, starting at 1
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub position: u32,
}

impl From<RemoveDayArgs> for RemoveDayExercise {
    fn from(val: RemoveDayArgs) -> Self {
        RemoveDayExercise {
            day: val.day,
            index: val.position.saturating_sub(1) as usize,
        }
    }
}

#[derive(Subcommand)]
pub enum DayCommands {
    /// Show one day's workout and exercises
    #[command(alias = "s")]
    Show(ShowDayArgs),
    /// Replace a day's exercise list
    Set(SetDayArgs),
    /// Append an exercise to a day
    #[command(alias = "a")]
    Add(AddDayArgs),
    /// Remove an exercise from a day
    #[command(aliases = ["r", "rm"])]
    Remove(RemoveDayArgs),
}

// ============================================================================
// Exercise
// ============================================================================

/// Exercise library categories
#[derive(Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Cardio,
    Strength,
    Core,
    /// Your own exercises
    Custom,
}

impl From<CategoryArg> for ExerciseCategory {
    fn from(val: CategoryArg) -> Self {
        match val {
            CategoryArg::Cardio => ExerciseCategory::Cardio,
            CategoryArg::Strength => ExerciseCategory::Strength,
            CategoryArg::Core => ExerciseCategory::Core,
            CategoryArg::Custom => ExerciseCategory::Custom,
        }
    }
}

/// List and search the exercise library
#[derive(Args)]
pub struct ListExercisesArgs {
    /// Only exercises whose name contains this text
    #[arg(short, long)]
    pub search: Option<String>,
    /// Only exercises in this category
    #[arg(short, long)]
    pub category: Option<CategoryArg>,
}

impl From<ListExercisesArgs> for SearchExercises {
    fn from(val: ListExercisesArgs) -> Self {
        SearchExercises {
            query: val.search.unwrap_or_default(),
            category: val.category.map(Into::into),
        }
    }
}

/// Add your own exercise to the library
#[derive(Args)]
pub struct CreateExerciseArgs {
    /// Exercise name
    pub name: String,
    /// English name, if different
    #[arg(long)]
    pub name_en: Option<String>,
    /// How to perform the exercise
    #[arg(short, long)]
    pub description: Option<String>,
    /// Category (defaults to custom)
    #[arg(short, long)]
    pub category: Option<CategoryArg>,
    /// Image URL or data URL
    #[arg(long)]
    pub image: Option<String>,
}

impl From<CreateExerciseArgs> for NewExercise {
    fn from(val: CreateExerciseArgs) -> Self {
        NewExercise {
            name: val.name,
            name_en: val.name_en,
            description: val.description,
            category: val.category.map(Into::into),
            image: val.image,
        }
    }
}

/// Delete one of your own exercises
#[derive(Args)]
pub struct DeleteExerciseArgs {
    /// ID of the exercise (starts with `c_`)
    pub id: String,
}

impl From<DeleteExerciseArgs> for ExerciseId {
    fn from(val: DeleteExerciseArgs) -> Self {
        ExerciseId { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum ExerciseCommands {
    /// List and search the exercise library
    #[command(aliases = ["l", "ls"])]
    List(ListExercisesArgs),
    /// Add your own exercise to the library
    #[command(alias = "c")]
    Create(CreateExerciseArgs),
    /// Delete one of your own exercises
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteExerciseArgs),
}

// ============================================================================
// Coach and language
// ============================================================================

/// A message for the coach
#[derive(Args)]
pub struct MessageArgs {
    /// Message text
    #[arg(trailing_var_arg = true)]
    pub message: Vec<String>,
}

impl MessageArgs {
    fn text(&self) -> String {
        self.message.join(" ")
    }
}

#[derive(Subcommand)]
pub enum CoachCommands {
    /// Ask the coach a question; the conversation is kept
    #[command(alias = "a")]
    Ask(MessageArgs),
    /// Let the coach build a schedule; a schedule in its reply is applied
    #[command(alias = "b")]
    Build(MessageArgs),
    /// Show the kept conversation
    History,
    /// Forget the kept conversation
    New,
    /// Turn the coach on
    Enable,
    /// Turn the coach off
    Disable,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LanguageArg {
    /// Arabic
    Ar,
    /// French
    Fr,
    /// English
    En,
}

/// Set the language the coach answers in
#[derive(Args)]
pub struct LanguageArgs {
    pub language: LanguageArg,
}

impl From<LanguageArgs> for SetLanguage {
    fn from(val: LanguageArgs) -> Self {
        let language = match val.language {
            LanguageArg::Ar => Language::Ar,
            LanguageArg::Fr => Language::Fr,
            LanguageArg::En => Language::En,
        };
        SetLanguage { language }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs commands against a scheduler and renders the results.
pub struct Cli {
    scheduler: Scheduler,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(scheduler: Scheduler, renderer: TerminalRenderer) -> Self {
        Self {
            scheduler,
            renderer,
        }
    }

    pub async fn show_schedule(&self) -> Result<()> {
        let overview = self
            .scheduler
            .schedule_overview()
            .await
            .context("Failed to resolve schedule")?;
        self.renderer.render(&overview.to_string())
    }

    pub async fn handle_schedule_command(&self, command: ScheduleCommands) -> Result<()> {
        match command {
            ScheduleCommands::Show => self.show_schedule().await,
            ScheduleCommands::Duration(args) => {
                self.scheduler
                    .select_duration(&args.into())
                    .await
                    .context("Failed to set program length")?;
                self.show_schedule().await
            }
            ScheduleCommands::Generate(args) => {
                self.scheduler
                    .generate(&args.into())
                    .await
                    .context("Failed to generate schedule")?;
                self.show_schedule().await
            }
            ScheduleCommands::Reset => {
                self.scheduler
                    .reset_all()
                    .await
                    .context("Failed to reset schedule")?;
                self.renderer.render(
                    &OperationStatus::success("Schedule and day exercise edits cleared")
                        .to_string(),
                )
            }
            ScheduleCommands::Apply(args) => {
                let text = read_input(args.file.as_ref())?;
                let outcome = self
                    .scheduler
                    .apply_external_schedule(&text)
                    .await
                    .context("Failed to apply schedule")?;
                self.renderer.render(&outcome.to_string())?;
                if outcome.is_applied() {
                    self.show_schedule().await?;
                }
                Ok(())
            }
        }
    }

    pub async fn handle_day_command(&self, command: DayCommands) -> Result<()> {
        match command {
            DayCommands::Show(args) => {
                let view = self
                    .scheduler
                    .day_view(&args.into())
                    .await
                    .context("Failed to load day")?;
                self.renderer.render(&view.to_string())
            }
            DayCommands::Set(args) => {
                let day = Day { day: args.day };
                let count = args.exercises.len();
                self.scheduler
                    .set_day_override(&args.into())
                    .await
                    .context("Failed to set day exercises")?;
                let plan = self.scheduler.day_plan(&day).await?;
                let change = format!("Set {count} exercises");
                self.renderer
                    .render(&UpdateResult::with_changes(plan, vec![change]).to_string())
            }
            DayCommands::Add(args) => {
                let change = format!("Added {}", args.exercise_id);
                let plan = self
                    .scheduler
                    .add_exercise_to_day(&args.into())
                    .await
                    .context("Failed to add exercise")?;
                self.renderer
                    .render(&UpdateResult::with_changes(plan, vec![change]).to_string())
            }
            DayCommands::Remove(args) => {
                let change = format!("Removed exercise {}", args.position);
                let plan = self
                    .scheduler
                    .remove_exercise_from_day(&args.into())
                    .await
                    .context("Failed to remove exercise")?;
                self.renderer
                    .render(&UpdateResult::with_changes(plan, vec![change]).to_string())
            }
        }
    }

    pub async fn handle_exercise_command(&self, command: ExerciseCommands) -> Result<()> {
        match command {
            ExerciseCommands::List(args) => {
                let entries = self
                    .scheduler
                    .search_exercises(&args.into())
                    .await
                    .context("Failed to search exercises")?;
                self.renderer.render(&ExerciseList(entries).to_string())
            }
            ExerciseCommands::Create(args) => {
                let exercise = self
                    .scheduler
                    .create_custom_exercise(&args.into())
                    .await
                    .context("Failed to create exercise")?;
                self.renderer
                    .render(&CreateResult::new(exercise).to_string())
            }
            ExerciseCommands::Delete(args) => {
                let params = ExerciseId::from(args);
                let removed = self
                    .scheduler
                    .delete_custom_exercise(&params)
                    .await
                    .context("Failed to delete exercise")?;
                match removed {
                    Some(exercise) => self
                        .renderer
                        .render(&DeleteResult::new(exercise).to_string()),
                    None => bail!("No custom exercise with ID '{}'", params.id),
                }
            }
        }
    }

    pub async fn handle_coach_command(&self, command: CoachCommands) -> Result<()> {
        match command {
            CoachCommands::Ask(args) => {
                let reply = self.coach()?.ask(&args.text()).await?;
                self.renderer.render(&format!("**Coach:** {reply}\n"))
            }
            CoachCommands::Build(args) => {
                let reply = self.coach()?.build_schedule(&args.text()).await?;
                self.renderer.render(&format!("**Coach:** {}\n\n", reply.reply))?;
                self.renderer.render(&reply.outcome.to_string())?;
                if reply.outcome.is_applied() {
                    self.show_schedule().await?;
                }
                Ok(())
            }
            CoachCommands::History => {
                let history = self.scheduler.chat_history().await?;
                self.renderer.render(&Transcript(&history).to_string())
            }
            CoachCommands::New => {
                self.scheduler.clear_chat_history().await?;
                self.renderer
                    .render(&OperationStatus::success("Conversation cleared").to_string())
            }
            CoachCommands::Enable => self.set_coach_enabled(true).await,
            CoachCommands::Disable => self.set_coach_enabled(false).await,
        }
    }

    pub async fn set_language(&self, params: SetLanguage) -> Result<()> {
        let language = self
            .scheduler
            .set_language(&params)
            .await
            .context("Failed to set language")?;
        self.renderer.render(
            &OperationStatus::success(format!("Coach language set to {}", language.english_name()))
                .to_string(),
        )
    }

    async fn set_coach_enabled(&self, enabled: bool) -> Result<()> {
        self.scheduler.set_coach_enabled(enabled).await?;
        let message = if enabled { "Coach enabled" } else { "Coach disabled" };
        self.renderer
            .render(&OperationStatus::success(message).to_string())
    }

    fn coach(&self) -> Result<Coach> {
        Coach::from_env(self.scheduler.clone()).context("Failed to configure the coach")
    }
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(path) => {
            debug!("Reading schedule text from {}", path.display());
            fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read standard input")?;
            Ok(text)
        }
    }
}
