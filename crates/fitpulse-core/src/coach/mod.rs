//! The AI coach.
//!
//! The coach sends the conversation, prefixed with a system prompt built from
//! the catalogues and the program, to a [`CompletionClient`]. General chat is
//! persisted in the state's `chatHistory`; schedule building is not, and its
//! reply is offered to [`Scheduler::apply_external_schedule`].
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use fitpulse_core::{
//!     coach::{Coach, GroqClient},
//!     SchedulerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scheduler = SchedulerBuilder::new().build().await?;
//! let coach = Coach::new(scheduler, Arc::new(GroqClient::from_env()?));
//!
//! let reply = coach.build_schedule("Four weeks, no equipment").await?;
//! println!("{}\n{}", reply.reply, reply.outcome);
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;

use log::{debug, info};

use crate::{
    catalogue::{ExerciseCatalogue, ExerciseLibrary, PlanCatalogue},
    error::{Result, ScheduleError},
    models::{AppState, ChatMessage},
    schedule::ApplyOutcome,
    Scheduler,
};

pub mod client;
pub mod prompt;

pub use client::{CompletionClient, CompletionConfig, GroqClient};
pub use prompt::build_system_prompt;

/// Conversation purpose, which selects the system prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatMode {
    /// Open questions; history is kept
    #[default]
    General,
    /// Guided interview ending in a JSON schedule; history is not kept
    ScheduleBuilding,
}

/// A schedule-building reply and what happened when it was applied.
#[derive(Debug, Clone, PartialEq)]
pub struct CoachReply {
    pub reply: String,
    pub outcome: ApplyOutcome,
}

/// Chat front end over a [`Scheduler`] and a completion client.
#[derive(Clone)]
pub struct Coach {
    scheduler: Scheduler,
    client: Arc<dyn CompletionClient>,
}

impl Coach {
    pub fn new(scheduler: Scheduler, client: Arc<dyn CompletionClient>) -> Self {
        Self { scheduler, client }
    }

    /// Creates a coach backed by a [`GroqClient`] configured from the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::Configuration` if `GROQ_API_KEY` is not set.
    pub fn from_env(scheduler: Scheduler) -> Result<Self> {
        Ok(Self::new(scheduler, Arc::new(GroqClient::from_env()?)))
    }

    /// The persisted general conversation.
    pub async fn history(&self) -> Result<Vec<ChatMessage>> {
        self.scheduler.chat_history().await
    }

    /// Asks a general question and records both sides of the exchange.
    ///
    /// The question is recorded before the request is sent, so it stays in
    /// the history even if the request fails.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::InvalidInput` for a blank message,
    /// `ScheduleError::Configuration` if the coach is disabled, and
    /// `ScheduleError::Completion` if the request fails.
    pub async fn ask(&self, message: &str) -> Result<String> {
        let message = message.trim().to_string();
        if message.is_empty() {
            return Err(ScheduleError::invalid_input("message").with_reason("message must not be empty"));
        }

        let exercises = Arc::clone(&self.scheduler.exercises);
        let conversation = self
            .scheduler
            .mutate(move |state, plans| {
                ensure_enabled(state)?;
                state.chat_history.push(ChatMessage::user(message));
                let conversation = conversation(
                    ChatMode::General,
                    state,
                    &state.chat_history,
                    plans,
                    exercises.as_ref(),
                );
                Ok((conversation, true))
            })
            .await?;

        let reply = self.client.complete(&conversation).await?;

        let recorded = reply.clone();
        self.scheduler
            .mutate(move |state, _| {
                state.chat_history.push(ChatMessage::assistant(recorded));
                Ok(((), true))
            })
            .await?;

        debug!("Coach replied with {} characters", reply.len());
        Ok(reply)
    }

    /// Runs one schedule-building turn and applies any schedule in the reply.
    ///
    /// The general history is sent as context but nothing is recorded. An
    /// empty message asks the coach to continue from the history alone.
    ///
    /// # Errors
    ///
    /// Returns `ScheduleError::Configuration` if the coach is disabled and
    /// `ScheduleError::Completion` if the request fails. A reply without a
    /// usable schedule is not an error; see [`CoachReply::outcome`].
    pub async fn build_schedule(&self, message: &str) -> Result<CoachReply> {
        let state = self.scheduler.load_state().await?;
        ensure_enabled(&state)?;

        let mut history = state.chat_history.clone();
        let message = message.trim();
        if !message.is_empty() {
            history.push(ChatMessage::user(message));
        }
        let conversation = conversation(
            ChatMode::ScheduleBuilding,
            &state,
            &history,
            self.scheduler.plan_catalogue(),
            self.scheduler.exercise_catalogue(),
        );

        let reply = self.client.complete(&conversation).await?;
        let outcome = self.scheduler.apply_external_schedule(&reply).await?;
        if outcome.is_applied() {
            info!("Coach schedule applied");
        }

        Ok(CoachReply { reply, outcome })
    }

    /// Starts over with an empty conversation.
    pub async fn new_chat(&self) -> Result<()> {
        self.scheduler.clear_chat_history().await
    }
}

fn ensure_enabled(state: &AppState) -> Result<()> {
    if state.ai_coach_enabled {
        Ok(())
    } else {
        Err(ScheduleError::configuration("The AI coach is disabled"))
    }
}

fn conversation(
    mode: ChatMode,
    state: &AppState,
    history: &[ChatMessage],
    plans: &dyn PlanCatalogue,
    exercises: &dyn ExerciseCatalogue,
) -> Vec<ChatMessage> {
    let library = ExerciseLibrary::new(exercises, &state.program.custom_exercises);
    let system = build_system_prompt(mode, state, plans, &library);

    std::iter::once(ChatMessage::system(system))
        .chain(history.iter().cloned())
        .collect()
}
