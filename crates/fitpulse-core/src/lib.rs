//! Core library for the FitPulse program schedule.
//!
//! This crate decides which workout type falls on each day of a training
//! program, which exercises each day holds, and how user and AI coach edits
//! override those defaults. State is persisted to SQLite as one JSON object.
//!
//! # Layers
//!
//! - **Models** ([`models`]): the program and the surrounding state object,
//!   with their wire format
//! - **Schedule** ([`schedule`]): pure generation, resolution, suggestion
//!   parsing and per-day editing
//! - **Catalogues** ([`catalogue`]): the injected plan and exercise
//!   catalogues
//! - **Scheduler** ([`scheduler`]): the async facade that loads, mutates and
//!   saves state under a single-writer lock
//! - **Coach** ([`coach`]): prompts and the completion client feeding
//!   schedule suggestions back into the scheduler
//! - **Display** ([`display`]): markdown output for the terminal renderer
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use fitpulse_core::{
//!     params::{Day, ProgramLength, SetDayExercises},
//!     SchedulerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scheduler = SchedulerBuilder::new()
//!     .with_database_path(Some("fitpulse.db"))
//!     .build()
//!     .await?;
//!
//! scheduler.select_duration(&ProgramLength { days: 21 }).await?;
//! scheduler
//!     .set_day_override(&SetDayExercises {
//!         day: 3,
//!         exercises: vec![],
//!     })
//!     .await?;
//!
//! assert!(scheduler.effective_exercises(&Day { day: 3 }).await?.is_empty());
//! println!("{}", scheduler.schedule_overview().await?);
//! # Ok(())
//! # }
//! ```

pub mod catalogue;
pub mod coach;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod schedule;
pub mod scheduler;

// Re-export commonly used types
pub use catalogue::{ExerciseCatalogue, PlanCatalogue, StaticCatalogue};
pub use coach::{ChatMode, Coach, CoachReply, CompletionClient, CompletionConfig, GroqClient};
pub use db::Database;
pub use display::{
    CreateResult, DayView, DeleteResult, ExerciseList, OperationStatus, ScheduleOverview,
    Transcript, UpdateResult,
};
pub use error::{Result, ScheduleError};
pub use models::{AppState, CustomExercise, DayType, ExerciseCategory, Language, Program};
pub use schedule::{ApplyOutcome, DayPlan, ResolvedSchedule, ScheduleSource};
pub use scheduler::{
    program_ops::{DURATION_PRESETS, MAX_SELECTABLE_DAYS, MIN_SELECTABLE_DAYS},
    Scheduler, SchedulerBuilder,
};
