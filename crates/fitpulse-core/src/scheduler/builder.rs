//! Builder for creating and configuring Scheduler instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;
use tokio::task;

use super::Scheduler;
use crate::{
    catalogue::{ExerciseCatalogue, PlanCatalogue, StaticCatalogue},
    db::Database,
    error::{Result, ScheduleError},
};

type Catalogues = (Arc<dyn PlanCatalogue>, Arc<dyn ExerciseCatalogue>);

/// Builder for creating and configuring Scheduler instances.
#[derive(Clone, Default)]
pub struct SchedulerBuilder {
    database_path: Option<PathBuf>,
    catalogue_file: Option<PathBuf>,
    plans: Option<Arc<dyn PlanCatalogue>>,
    exercises: Option<Arc<dyn ExerciseCatalogue>>,
}

impl SchedulerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/fitpulse/fitpulse.db` or
    /// `~/.local/share/fitpulse/fitpulse.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Loads both catalogues from a JSON file instead of the built-in one.
    pub fn with_catalogue_file<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalogue_file = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Injects a plan catalogue. Takes precedence over a catalogue file.
    pub fn with_plan_catalogue(mut self, plans: Arc<dyn PlanCatalogue>) -> Self {
        self.plans = Some(plans);
        self
    }

    /// Injects an exercise catalogue. Takes precedence over a catalogue file.
    pub fn with_exercise_catalogue(mut self, exercises: Arc<dyn ExerciseCatalogue>) -> Self {
        self.exercises = Some(exercises);
        self
    }

    /// Builds the configured scheduler instance.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::Configuration` or `ScheduleError::FileSystem`
    /// if a catalogue file cannot be loaded.
    /// Returns `ScheduleError::FileSystem` if the database path is invalid.
    /// Returns `ScheduleError::Database` if database initialization fails.
    pub async fn build(self) -> Result<Scheduler> {
        let (plans, exercises) = self.resolve_catalogues()?;

        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ScheduleError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), ScheduleError>(())
        })
        .await
        .map_err(ScheduleError::join)??;

        debug!("Scheduler ready at {}", db_path.display());
        Ok(Scheduler::new(db_path, plans, exercises))
    }

    fn resolve_catalogues(&self) -> Result<Catalogues> {
        let mut fallback = None;

        let plans: Arc<dyn PlanCatalogue> = match &self.plans {
            Some(plans) => Arc::clone(plans),
            None => self.fallback_catalogue(&mut fallback)?,
        };
        let exercises: Arc<dyn ExerciseCatalogue> = match &self.exercises {
            Some(exercises) => Arc::clone(exercises),
            None => self.fallback_catalogue(&mut fallback)?,
        };

        Ok((plans, exercises))
    }

    /// Loads the file or built-in catalogue once and shares it between the
    /// plan and exercise roles.
    fn fallback_catalogue(
        &self,
        loaded: &mut Option<Arc<StaticCatalogue>>,
    ) -> Result<Arc<StaticCatalogue>> {
        if let Some(catalogue) = loaded {
            return Ok(Arc::clone(catalogue));
        }

        let catalogue = Arc::new(match &self.catalogue_file {
            Some(path) => StaticCatalogue::from_file(path)?,
            None => StaticCatalogue::builtin()?,
        });
        *loaded = Some(Arc::clone(&catalogue));
        Ok(catalogue)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("fitpulse")
            .place_data_file("fitpulse.db")
            .map_err(|e| ScheduleError::XdgDirectory(e.to_string()))
    }
}
