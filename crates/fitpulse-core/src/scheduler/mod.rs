//! High-level scheduler API over the persisted program.
//!
//! The [`Scheduler`] is the single entry point for reading and changing the
//! program. It owns the injected catalogues and the database path, and routes
//! every mutation through one load-modify-save cycle guarded by a writer lock.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Scheduler    │    │    schedule/    │    │    Database     │
//! │ (program_ops,   │───▶│ (generator,     │    │   (via db/)     │
//! │  day_ops, ...)  │    │  resolver, ...) │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   Locking + I/O          Pure transforms        Data Persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Scheduler`] instances
//! - [`program_ops`]: resolution, generation, duration, suggestions, reset
//! - [`day_ops`]: per-day exercise lists and override edits
//! - [`exercise_ops`]: the user-authored exercise library
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use fitpulse_core::{params::Day, SchedulerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scheduler = SchedulerBuilder::new()
//!     .with_database_path(Some("/tmp/fitpulse.db"))
//!     .build()
//!     .await?;
//!
//! let schedule = scheduler.resolve_schedule().await?;
//! println!("{} days ({})", schedule.len(), schedule.source.as_str());
//!
//! let exercises = scheduler.effective_exercises(&Day { day: 1 }).await?;
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use tokio::{sync::Mutex, task};

use crate::{
    catalogue::{ExerciseCatalogue, PlanCatalogue},
    db::Database,
    error::{Result, ScheduleError},
    models::AppState,
};

pub mod builder;
pub mod day_ops;
pub mod exercise_ops;
pub mod program_ops;


pub use builder::SchedulerBuilder;

/// Main interface for the program schedule.
///
/// Cloning is cheap; clones share the catalogues and the writer lock.
#[derive(Clone)]
pub struct Scheduler {
    pub(crate) db_path: PathBuf,
    pub(crate) plans: Arc<dyn PlanCatalogue>,
    pub(crate) exercises: Arc<dyn ExerciseCatalogue>,
    writer: Arc<Mutex<()>>,
}

impl Scheduler {
    pub(crate) fn new(
        db_path: PathBuf,
        plans: Arc<dyn PlanCatalogue>,
        exercises: Arc<dyn ExerciseCatalogue>,
    ) -> Self {
        Self {
            db_path,
            plans,
            exercises,
            writer: Arc::new(Mutex::new(())),
        }
    }

    /// The injected plan catalogue.
    pub fn plan_catalogue(&self) -> &dyn PlanCatalogue {
        self.plans.as_ref()
    }

    /// The injected static exercise catalogue.
    pub fn exercise_catalogue(&self) -> &dyn ExerciseCatalogue {
        self.exercises.as_ref()
    }

    /// Loads the current state object without modifying it.
    pub async fn load_state(&self) -> Result<AppState> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.load_state()
        })
        .await
        .map_err(ScheduleError::join)?
    }

    /// Runs `f` against the stored state while holding the writer lock.
    ///
    /// `f` returns its result and whether the state changed; changed state is
    /// saved before the lock is released. An error from `f` leaves storage
    /// untouched. The in-process lock orders this instance's operations; the
    /// database write transaction orders them against other instances and
    /// processes using the same file.
    pub(crate) async fn mutate<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut AppState, &dyn PlanCatalogue) -> Result<(T, bool)> + Send + 'static,
        T: Send + 'static,
    {
        let _guard = self.writer.lock().await;
        let db_path = self.db_path.clone();
        let plans = Arc::clone(&self.plans);

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_state(|state| f(state, plans.as_ref()))
        })
        .await
        .map_err(ScheduleError::join)?
    }
}
