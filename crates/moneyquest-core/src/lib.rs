//! MoneyQuest Core — shared domain model and abstractions.
//!
//! This crate defines the game's data model, the error taxonomy, and the
//! traits behind which time, randomness, and the two external collaborators
//! (content generator, actuator gateway) are injected. It contains no
//! infrastructure code.

pub mod actuator;
pub mod choice;
pub mod clock;
pub mod error;
pub mod generator;
pub mod model;
pub mod rng;
