//! The session state machine.
//!
//! States: `Idle` (round 0, no scenario) and `AwaitingChoice` (a scenario
//! is pending). `begin` always lands in `AwaitingChoice` once a scenario
//! is presented; each committed choice advances to the next
//! `AwaitingChoice`; only `reset` returns to `Idle`. There is no terminal
//! state.

use chrono::{DateTime, Utc};

use moneyquest_core::choice::Choice;
use moneyquest_core::error::EngineError;
use moneyquest_core::model::{Consequence, HistoryEntry, Scenario};

/// Balance every session starts with.
pub const STARTING_BALANCE: f64 = 10.0;

/// Age used when the caller does not provide one and after a reset.
pub const DEFAULT_AGE: u8 = 10;

/// The single active game session. Owned exclusively by the engine; never
/// handed out by reference.
#[derive(Debug)]
pub struct Session {
    pub(crate) balance: f64,
    pub(crate) age: u8,
    pub(crate) round: u32,
    pub(crate) current_scenario: Option<Scenario>,
    pub(crate) last_consequence: Option<Consequence>,
    pub(crate) history: Vec<HistoryEntry>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            balance: STARTING_BALANCE,
            age: DEFAULT_AGE,
            round: 0,
            current_scenario: None,
            last_consequence: None,
            history: Vec::new(),
        }
    }
}

impl Session {
    /// Creates a fresh idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts round 1 for a player of the given age: balance back to the
    /// starting value, history and last consequence cleared, no scenario
    /// yet. Valid from any prior state.
    pub fn begin(&mut self, age: u8) {
        self.balance = STARTING_BALANCE;
        self.age = age;
        self.round = 1;
        self.current_scenario = None;
        self.last_consequence = None;
        self.history.clear();
    }

    /// Presents a scenario for the player to decide on.
    pub fn present(&mut self, scenario: Scenario) {
        self.current_scenario = Some(scenario);
    }

    /// Returns the pending scenario's description for the given choice.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::NoActiveScenario` when the session is idle —
    /// the one error a caller can ever see.
    pub fn pending_option(&self, choice: Choice) -> Result<String, EngineError> {
        self.current_scenario
            .as_ref()
            .map(|scenario| scenario.options.description(choice).to_owned())
            .ok_or(EngineError::NoActiveScenario)
    }

    /// Commits a consequence: applies the new balance, remembers the
    /// consequence, and appends the decision to the history log. Must run
    /// after consequence generation and before the next scenario is
    /// generated, so an observer never sees a balance without its
    /// consequence in the log.
    pub fn commit(&mut self, choice_description: String, consequence: &Consequence, at: DateTime<Utc>) {
        self.balance = consequence.new_balance;
        self.last_consequence = Some(consequence.clone());
        self.history.push(HistoryEntry {
            choice_description,
            balance_change: consequence.balance_change,
            timestamp: at,
        });
    }

    /// Installs the next round's scenario and advances the round counter.
    pub fn advance(&mut self, next_scenario: Scenario) {
        self.current_scenario = Some(next_scenario);
        self.round += 1;
    }

    /// Restores the idle defaults. Always succeeds.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
