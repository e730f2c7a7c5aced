//! MoneyQuest — Actuator Command Dispatcher.
//!
//! Maps choices to physical zones and delivers movement/speech commands to
//! the actuator gateway over HTTP. The gateway is frequently absent during
//! development, so every failure is a typed, loggable value rather than a
//! propagated error.

pub mod gateway;
pub mod zone;

pub use gateway::HttpActuator;
pub use zone::zone_for_choice;
