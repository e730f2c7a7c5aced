//! The content service: generator calls with strict parsing and an
//! unconditional offline fallback.
//!
//! The engine calls [`ContentService::scenario`] and
//! [`ContentService::consequence`] and always gets content back. Every
//! failure mode — unconfigured backend, transport error, malformed or
//! off-schema response — is logged at warn level and answered from the
//! fallback library instead.

use std::sync::{Arc, Mutex, PoisonError};

use serde::Deserialize;
use tracing::warn;

use moneyquest_core::choice::Choice;
use moneyquest_core::error::GeneratorError;
use moneyquest_core::generator::GeneratorBackend;
use moneyquest_core::model::{Consequence, Mood, Scenario, ScenarioOptions};
use moneyquest_core::rng::DeterministicRng;

use crate::prompt;

/// Scenario/consequence source with built-in fallback. Never fails.
pub struct ContentService {
    backend: Option<Arc<dyn GeneratorBackend>>,
    rng: Mutex<Box<dyn DeterministicRng>>,
}

impl ContentService {
    /// Creates a service. `backend == None` means fallback-only operation
    /// (e.g. no API key configured).
    #[must_use]
    pub fn new(backend: Option<Arc<dyn GeneratorBackend>>, rng: Box<dyn DeterministicRng>) -> Self {
        Self {
            backend,
            rng: Mutex::new(rng),
        }
    }

    /// Returns a scenario for the player's age and balance.
    ///
    /// `balance_at_generation` is always the input balance; a generator
    /// echo of the balance is never trusted.
    pub async fn scenario(&self, age: u8, balance: f64) -> Scenario {
        match self.generate_scenario(age, balance).await {
            Ok(scenario) => scenario,
            Err(err) => {
                warn!(error = %err, "scenario generation failed; using fallback content");
                moneyquest_content::pick_scenario(balance, self.rng().as_mut())
            }
        }
    }

    /// Returns the consequence of the chosen option.
    pub async fn consequence(
        &self,
        choice: Choice,
        choice_description: &str,
        balance: f64,
        age: u8,
    ) -> Consequence {
        match self
            .generate_consequence(choice, choice_description, balance, age)
            .await
        {
            Ok(consequence) => consequence,
            Err(err) => {
                warn!(error = %err, %choice, "consequence generation failed; using fallback content");
                moneyquest_content::pick_consequence(choice, balance, self.rng().as_mut())
            }
        }
    }

    async fn generate_scenario(&self, age: u8, balance: f64) -> Result<Scenario, GeneratorError> {
        let backend = self.backend.as_ref().ok_or(GeneratorError::Unconfigured)?;
        let raw = backend
            .complete(prompt::SYSTEM_INSTRUCTION, &prompt::scenario_prompt(age, balance))
            .await?;
        parse_scenario(&raw, balance)
    }

    async fn generate_consequence(
        &self,
        choice: Choice,
        choice_description: &str,
        balance: f64,
        age: u8,
    ) -> Result<Consequence, GeneratorError> {
        let backend = self.backend.as_ref().ok_or(GeneratorError::Unconfigured)?;
        let raw = backend
            .complete(
                prompt::SYSTEM_INSTRUCTION,
                &prompt::consequence_prompt(choice, choice_description, balance, age),
            )
            .await?;
        parse_consequence(&raw)
    }

    fn rng(&self) -> std::sync::MutexGuard<'_, Box<dyn DeterministicRng>> {
        // Fallback selection must never fail; recover the inner value if a
        // previous panic poisoned the lock.
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Raw scenario shape expected from the generator. Extra fields (such as a
/// balance echo) are ignored.
#[derive(Deserialize)]
struct GeneratedScenario {
    scenario: String,
    options: ScenarioOptions,
}

/// Raw consequence shape expected from the generator. A `mood` outside the
/// recognized set fails deserialization and routes to fallback.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeneratedConsequence {
    result: String,
    balance_change: f64,
    new_balance: f64,
    lesson: String,
    emotion: Mood,
}

fn parse_scenario(raw: &str, balance: f64) -> Result<Scenario, GeneratorError> {
    let parsed: GeneratedScenario = serde_json::from_str(strip_fences(raw))
        .map_err(|err| GeneratorError::MalformedResponse(err.to_string()))?;

    Ok(Scenario {
        narrative: parsed.scenario,
        balance_at_generation: balance,
        options: parsed.options,
    })
}

fn parse_consequence(raw: &str) -> Result<Consequence, GeneratorError> {
    let parsed: GeneratedConsequence = serde_json::from_str(strip_fences(raw))
        .map_err(|err| GeneratorError::MalformedResponse(err.to_string()))?;

    // The generator's arithmetic is trusted verbatim: new_balance is NOT
    // recomputed from balance_change here. Only fallback content carries
    // the arithmetic invariant by construction.
    Ok(Consequence {
        narrative_result: parsed.result,
        balance_change: parsed.balance_change,
        new_balance: parsed.new_balance,
        lesson: parsed.lesson,
        mood: parsed.emotion,
    })
}

/// Tolerates models that wrap the JSON object in markdown fences despite
/// the instruction not to.
fn strip_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}
