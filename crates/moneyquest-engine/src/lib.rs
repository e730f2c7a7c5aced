//! MoneyQuest — Session State Manager.
//!
//! Owns the single process-wide game session, enforces the round-by-round
//! state machine, and sequences the content generator and actuator calls
//! for each operation. All operations are serialized behind one lock; see
//! [`AdventureEngine`].

pub mod application;
pub mod domain;
mod engine;

pub use crate::application::command_handlers::{ChoiceOutcome, ResetOutcome, StartOutcome};
pub use crate::application::query_handlers::StatusReport;
pub use crate::engine::AdventureEngine;
