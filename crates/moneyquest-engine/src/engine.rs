//! The serializing engine facade.

use std::sync::Arc;

use tokio::sync::Mutex;

use moneyquest_core::actuator::Actuator;
use moneyquest_core::choice::Choice;
use moneyquest_core::clock::Clock;
use moneyquest_core::error::EngineError;
use moneyquest_generator::ContentService;

use crate::application::command_handlers::{
    ChoiceOutcome, ResetOutcome, StartOutcome, handle_make_choice, handle_reset_adventure,
    handle_start_adventure,
};
use crate::application::query_handlers::{StatusReport, current_status};
use crate::domain::session::Session;

/// The session orchestration engine.
///
/// Exactly one session exists per engine, and every operation locks it for
/// the operation's full duration — including the awaits on the generator
/// and actuator — so two overlapping `choose` calls can never interleave
/// their read-modify-write of the session. The lock is a `tokio` mutex
/// precisely because it must be held across await points.
pub struct AdventureEngine {
    session: Mutex<Session>,
    content: ContentService,
    actuator: Arc<dyn Actuator>,
    clock: Arc<dyn Clock>,
}

impl AdventureEngine {
    /// Creates an engine with a fresh idle session.
    #[must_use]
    pub fn new(content: ContentService, actuator: Arc<dyn Actuator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            session: Mutex::new(Session::new()),
            content,
            actuator,
            clock,
        }
    }

    /// Starts a new adventure for a player of the given age. Valid from
    /// any state; any session in progress is discarded.
    pub async fn start(&self, age: u8) -> StartOutcome {
        let mut session = self.session.lock().await;
        handle_start_adventure(&mut session, age, &self.content, self.actuator.as_ref()).await
    }

    /// Processes a choice against the pending scenario.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::NoActiveScenario` when no adventure has been
    /// started (or the session was reset).
    pub async fn choose(&self, choice: Choice) -> Result<ChoiceOutcome, EngineError> {
        let mut session = self.session.lock().await;
        handle_make_choice(
            &mut session,
            choice,
            &self.content,
            self.actuator.as_ref(),
            self.clock.as_ref(),
        )
        .await
    }

    /// Returns a snapshot of the session. No side effects.
    pub async fn status(&self) -> StatusReport {
        let session = self.session.lock().await;
        current_status(&session)
    }

    /// Restores the session to its idle defaults. Always succeeds.
    pub async fn reset(&self) -> ResetOutcome {
        let mut session = self.session.lock().await;
        handle_reset_adventure(&mut session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use moneyquest_core::choice::Zone;
    use moneyquest_core::model::Mood;
    use moneyquest_test_support::{
        FailingBackend, FixedClock, MockRng, RecordingActuator, UnreachableActuator,
    };

    /// Engine wired to a failing generator backend (forcing deterministic
    /// fallback content via `MockRng`) and the given actuator.
    fn offline_engine(actuator: Arc<dyn Actuator>) -> AdventureEngine {
        let content = ContentService::new(Some(Arc::new(FailingBackend)), Box::new(MockRng));
        let clock = Arc::new(FixedClock(
            Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap(),
        ));
        AdventureEngine::new(content, actuator, clock)
    }

    #[tokio::test]
    async fn test_start_begins_round_one_with_starting_balance() {
        // Arrange
        let engine = offline_engine(Arc::new(RecordingActuator::new()));

        // Act
        let outcome = engine.start(12).await;

        // Assert
        assert_eq!(outcome.round, 1);
        assert_eq!(outcome.balance, 10.0);
        assert!(!outcome.scenario.narrative.is_empty());

        let status = engine.status().await;
        assert_eq!(status.age, 12);
        assert!(status.history.is_empty());
        assert!(status.current_scenario.is_some());
    }

    #[tokio::test]
    async fn test_start_dispatches_centering_greeting() {
        // Arrange
        let actuator = Arc::new(RecordingActuator::new());
        let engine = offline_engine(actuator.clone());

        // Act
        let _ = engine.start(10).await;

        // Assert
        let commands = actuator.commands();
        assert_eq!(commands.len(), 1);
        assert_eq!(commands[0].zone, Zone::Center);
        assert_eq!(commands[0].mood, Mood::Excited);
    }

    #[tokio::test]
    async fn test_choose_before_start_fails_with_no_active_scenario() {
        // Arrange
        let engine = offline_engine(Arc::new(RecordingActuator::new()));

        // Act
        let result = engine.choose(Choice::Save).await;

        // Assert
        assert_eq!(result.unwrap_err(), EngineError::NoActiveScenario);
    }

    #[tokio::test]
    async fn test_choose_save_keeps_balance_and_logs_history() {
        // Arrange
        let engine = offline_engine(Arc::new(RecordingActuator::new()));
        let start = engine.start(10).await;
        let save_description = start.scenario.options.save.clone();

        // Act
        let outcome = engine.choose(Choice::Save).await.unwrap();

        // Assert — fallback save template: zero change.
        assert_eq!(outcome.consequence.balance_change, 0.0);
        assert_eq!(outcome.balance, 10.0);
        assert_eq!(outcome.round, 2);
        assert_eq!(outcome.history.len(), 1);
        assert_eq!(outcome.history[0].choice_description, save_description);
    }

    #[tokio::test]
    async fn test_choose_commits_with_clock_timestamp() {
        // Arrange
        let fixed_now = Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap();
        let engine = offline_engine(Arc::new(RecordingActuator::new()));
        let _ = engine.start(10).await;

        // Act
        let outcome = engine.choose(Choice::Spend).await.unwrap();

        // Assert
        assert_eq!(outcome.history[0].timestamp, fixed_now);
    }

    #[tokio::test]
    async fn test_choose_dispatches_move_narration_and_centering() {
        // Arrange
        let actuator = Arc::new(RecordingActuator::new());
        let engine = offline_engine(actuator.clone());
        let _ = engine.start(10).await;

        // Act
        let outcome = engine.choose(Choice::Invest).await.unwrap();

        // Assert — greeting plus the three choice commands, in order.
        let commands = actuator.commands();
        assert_eq!(commands.len(), 4);
        assert_eq!(commands[1].zone, Zone::Yellow);
        assert!(commands[1].text.contains("invest"));
        assert_eq!(commands[2].zone, Zone::Yellow);
        assert_eq!(commands[2].text, outcome.consequence.narrative_result);
        assert_eq!(commands[2].mood, outcome.consequence.mood);
        assert_eq!(commands[3].zone, Zone::Center);
    }

    #[tokio::test]
    async fn test_choose_pre_populates_next_scenario_from_new_balance() {
        // Arrange
        let engine = offline_engine(Arc::new(RecordingActuator::new()));
        let _ = engine.start(10).await;

        // Act — fallback spend costs 10.
        let outcome = engine.choose(Choice::Spend).await.unwrap();

        // Assert
        assert_eq!(outcome.balance, 0.0);
        assert_eq!(outcome.next_scenario.balance_at_generation, 0.0);

        let status = engine.status().await;
        assert_eq!(status.current_scenario, Some(outcome.next_scenario));
    }

    #[tokio::test]
    async fn test_choose_survives_unreachable_actuator() {
        // Arrange
        let engine = offline_engine(Arc::new(UnreachableActuator));
        let _ = engine.start(10).await;

        // Act
        let outcome = engine.choose(Choice::Save).await.unwrap();

        // Assert — gameplay unaffected by the offline device.
        assert_eq!(outcome.round, 2);
        assert_eq!(outcome.history.len(), 1);
    }

    #[tokio::test]
    async fn test_rounds_accumulate_indefinitely() {
        // Arrange
        let engine = offline_engine(Arc::new(RecordingActuator::new()));
        let _ = engine.start(10).await;

        // Act
        for _ in 0..5 {
            engine.choose(Choice::Save).await.unwrap();
        }

        // Assert — no terminal state; the cycle repeats.
        let status = engine.status().await;
        assert_eq!(status.round, 6);
        assert_eq!(status.total_decisions, 5);
    }

    #[tokio::test]
    async fn test_reset_returns_to_idle_and_blocks_choices() {
        // Arrange
        let engine = offline_engine(Arc::new(RecordingActuator::new()));
        let _ = engine.start(12).await;
        let _ = engine.choose(Choice::Invest).await.unwrap();

        // Act
        let outcome = engine.reset().await;

        // Assert
        assert_eq!(outcome.message, "Adventure reset successfully");
        let status = engine.status().await;
        assert_eq!(status.balance, 10.0);
        assert_eq!(status.age, 10);
        assert_eq!(status.round, 0);
        assert!(status.current_scenario.is_none());
        assert!(status.history.is_empty());

        let result = engine.choose(Choice::Save).await;
        assert_eq!(result.unwrap_err(), EngineError::NoActiveScenario);
    }

    #[tokio::test]
    async fn test_start_after_reset_works_again() {
        // Arrange
        let engine = offline_engine(Arc::new(RecordingActuator::new()));
        let _ = engine.start(10).await;
        let _ = engine.reset().await;

        // Act
        let outcome = engine.start(9).await;

        // Assert
        assert_eq!(outcome.round, 1);
        assert!(engine.choose(Choice::Spend).await.is_ok());
    }

    #[tokio::test]
    async fn test_concurrent_chooses_are_serialized() {
        // Arrange
        let engine = Arc::new(offline_engine(Arc::new(RecordingActuator::new())));
        let _ = engine.start(10).await;

        // Act — submit two choices at once; the session lock must prevent
        // a lost update.
        let first = tokio::spawn({
            let engine = engine.clone();
            async move { engine.choose(Choice::Spend).await }
        });
        let second = tokio::spawn({
            let engine = engine.clone();
            async move { engine.choose(Choice::Save).await }
        });
        let first = first.await.unwrap().unwrap();
        let second = second.await.unwrap().unwrap();

        // Assert — both committed, in some order.
        assert_eq!(
            [first.round, second.round].iter().sum::<u32>(),
            2 + 3,
            "rounds must be 2 and 3 in some order"
        );
        let status = engine.status().await;
        assert_eq!(status.total_decisions, 2);
        assert_eq!(status.round, 3);
    }
}
