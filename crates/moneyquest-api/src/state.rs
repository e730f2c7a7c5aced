//! Shared application state.

use std::sync::Arc;

use moneyquest_core::actuator::Actuator;
use moneyquest_engine::AdventureEngine;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The session orchestration engine.
    pub engine: Arc<AdventureEngine>,
    /// Direct actuator access for the diagnostics routes.
    pub actuator: Arc<dyn Actuator>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(engine: Arc<AdventureEngine>, actuator: Arc<dyn Actuator>) -> Self {
        Self { engine, actuator }
    }
}
