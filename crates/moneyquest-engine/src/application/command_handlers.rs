//! Command handlers for the adventure session.
//!
//! Each handler mutates the session and sequences the external calls.
//! Ordering inside `handle_make_choice` is binding: the commit (balance,
//! history, last consequence) happens strictly after consequence
//! generation and strictly before the next-scenario generation, so no
//! observer ever sees a balance update without its consequence, or a
//! narrated consequence that was not committed.

use serde::Serialize;
use tracing::{info, warn};

use moneyquest_actuator::zone_for_choice;
use moneyquest_core::actuator::{Actuator, ActuatorCommand};
use moneyquest_core::choice::{Choice, Zone};
use moneyquest_core::clock::Clock;
use moneyquest_core::error::EngineError;
use moneyquest_core::model::{Consequence, HistoryEntry, Mood, Scenario};
use moneyquest_generator::ContentService;

use crate::domain::session::Session;

/// Result of a successfully started adventure.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartOutcome {
    /// The opening scenario awaiting the first choice.
    pub scenario: Scenario,
    /// The starting balance.
    pub balance: f64,
    /// Always 1 after a start.
    pub round: u32,
}

/// Result of a successfully processed choice.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChoiceOutcome {
    /// The narrated outcome of the choice.
    pub consequence: Consequence,
    /// The scenario for the next round.
    pub next_scenario: Scenario,
    /// Balance after the consequence.
    pub balance: f64,
    /// Round counter after advancing.
    pub round: u32,
    /// The full decision log, oldest first.
    pub history: Vec<HistoryEntry>,
}

/// Result of a reset.
#[derive(Debug, Clone, Serialize)]
pub struct ResetOutcome {
    /// Confirmation text for the caller.
    pub message: String,
}

/// Handles a start: resets the session for the given age, generates the
/// opening scenario, and sends the actuator to its greeting position.
pub async fn handle_start_adventure(
    session: &mut Session,
    age: u8,
    content: &ContentService,
    actuator: &dyn Actuator,
) -> StartOutcome {
    info!(age, "starting new adventure");

    session.begin(age);

    let scenario = content.scenario(age, session.balance).await;
    session.present(scenario.clone());

    dispatch_advisory(
        actuator,
        ActuatorCommand {
            text: "Let's start your money adventure!".to_owned(),
            zone: Zone::Center,
            mood: Mood::Excited,
        },
    )
    .await;

    StartOutcome {
        scenario,
        balance: session.balance,
        round: session.round,
    }
}

/// Handles a choice: announces the move, generates and commits the
/// consequence, narrates it, and pre-populates the next round's scenario.
///
/// # Errors
///
/// Returns `EngineError::NoActiveScenario` when the session is idle. All
/// generator and actuator failures are absorbed internally.
pub async fn handle_make_choice(
    session: &mut Session,
    choice: Choice,
    content: &ContentService,
    actuator: &dyn Actuator,
    clock: &dyn Clock,
) -> Result<ChoiceOutcome, EngineError> {
    let choice_description = session.pending_option(choice)?;

    info!(%choice, "processing choice");

    let zone = zone_for_choice(choice);
    dispatch_advisory(
        actuator,
        ActuatorCommand {
            text: format!("Moving to {choice} zone..."),
            zone,
            mood: Mood::Neutral,
        },
    )
    .await;

    let consequence = content
        .consequence(choice, &choice_description, session.balance, session.age)
        .await;

    session.commit(choice_description, &consequence, clock.now());

    dispatch_advisory(
        actuator,
        ActuatorCommand {
            text: consequence.narrative_result.clone(),
            zone,
            mood: consequence.mood,
        },
    )
    .await;

    let next_scenario = content.scenario(session.age, session.balance).await;
    session.advance(next_scenario.clone());

    dispatch_advisory(
        actuator,
        ActuatorCommand {
            text: "Ready for your next decision!".to_owned(),
            zone: Zone::Center,
            mood: Mood::Neutral,
        },
    )
    .await;

    Ok(ChoiceOutcome {
        consequence,
        next_scenario,
        balance: session.balance,
        round: session.round,
        history: session.history.clone(),
    })
}

/// Handles a reset: unconditionally restores the idle defaults.
pub fn handle_reset_adventure(session: &mut Session) -> ResetOutcome {
    info!("resetting adventure");
    session.reset();
    ResetOutcome {
        message: "Adventure reset successfully".to_owned(),
    }
}

/// Sends a command and logs the failure branch instead of propagating it.
/// The device is advisory: gameplay proceeds whether or not it is there.
async fn dispatch_advisory(actuator: &dyn Actuator, command: ActuatorCommand) {
    if let Err(err) = actuator.dispatch(&command).await {
        warn!(error = %err, zone = %command.zone, "actuator command dropped; continuing without device");
    }
}
