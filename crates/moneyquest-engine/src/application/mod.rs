//! Application-level handlers that orchestrate the session domain logic
//! against the content service and the actuator.

pub mod command_handlers;
pub mod query_handlers;
