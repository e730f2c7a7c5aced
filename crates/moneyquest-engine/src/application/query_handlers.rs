//! Query handlers for the adventure session.

use serde::Serialize;

use moneyquest_core::model::{Consequence, HistoryEntry, Scenario};

use crate::domain::session::Session;

/// Snapshot of the session for status display. Pure read; building one
/// has no side effects on the session.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    /// Current funds.
    pub balance: f64,
    /// Player age for content tailoring.
    pub age: u8,
    /// 0 while idle; otherwise the current round.
    pub round: u32,
    /// The scenario awaiting a choice, if any.
    pub current_scenario: Option<Scenario>,
    /// Outcome of the most recent choice, if any.
    pub last_consequence: Option<Consequence>,
    /// The full decision log, oldest first.
    pub history: Vec<HistoryEntry>,
    /// Convenience count of completed decisions.
    pub total_decisions: usize,
}

/// Builds a status snapshot of the current session.
#[must_use]
pub fn current_status(session: &Session) -> StatusReport {
    StatusReport {
        balance: session.balance,
        age: session.age,
        round: session.round,
        current_scenario: session.current_scenario.clone(),
        last_consequence: session.last_consequence.clone(),
        history: session.history.clone(),
        total_decisions: session.history.len(),
    }
}
