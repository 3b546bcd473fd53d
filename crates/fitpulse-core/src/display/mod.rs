//! Display formatting and result types.
//!
//! Domain models implement `Display` directly; collections and operation
//! results get newtype wrappers. All output is markdown, rendered by the CLI.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Views, Wrappers │    │   Formatted     │
//! │ (DayPlan, ...)  │───▶│ & Result Types  │───▶│    Output       │
//! │                 │    │                 │    │   (Terminal)    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`schedule`]: the week-grid overview and the per-day view
//! - [`collections`]: exercise lists and chat transcripts
//! - [`results`]: operation result types (CreateResult, UpdateResult,
//!   DeleteResult)
//! - [`status`]: confirmation messages (OperationStatus)
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use fitpulse_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Schedule reset");
//! assert_eq!(status.to_string(), "Done: Schedule reset\n");
//! ```

pub mod collections;
pub mod models;
pub mod results;
pub mod schedule;
pub mod status;

pub use collections::{ExerciseList, Transcript};
pub use results::{CreateResult, DeleteResult, UpdateResult};
pub use schedule::{DayView, ExerciseLine, OverviewDay, ScheduleOverview, OVERRIDE_MARKER};
pub use status::OperationStatus;
