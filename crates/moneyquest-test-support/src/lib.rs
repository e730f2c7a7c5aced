//! Shared test doubles for the MoneyQuest engine.

mod actuator;
mod clock;
mod generator;
mod rng;

pub use actuator::{RecordingActuator, UnreachableActuator};
pub use clock::FixedClock;
pub use generator::{CannedBackend, FailingBackend};
pub use rng::{MockRng, SequenceRng};
