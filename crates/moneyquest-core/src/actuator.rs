//! Actuator gateway abstraction.
//!
//! The physical device is advisory: commands carry narration text and a
//! target zone, and a gateway that is offline must never block gameplay.
//! Callers are expected to log the error branch of [`Actuator::dispatch`]
//! and continue.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::choice::Zone;
use crate::error::ActuatorError;
use crate::model::Mood;

/// A movement/speech command for the actuator gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActuatorCommand {
    /// Narration text for the device to speak.
    pub text: String,
    /// Physical zone the device should move to.
    pub zone: Zone,
    /// Emotional register for expression and voice.
    pub mood: Mood,
}

/// Result of the connectivity probe. Display-only; never gates gameplay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectivityReport {
    /// Whether the gateway answered the health probe.
    pub connected: bool,
    /// The configured gateway endpoint.
    pub endpoint: String,
    /// Human-readable outcome description.
    pub message: String,
}

/// Outbound port to the actuator gateway.
#[async_trait]
pub trait Actuator: Send + Sync {
    /// Sends one command to the gateway.
    ///
    /// # Errors
    ///
    /// Returns `ActuatorError` on timeout, connection failure, or a
    /// non-success gateway response.
    async fn dispatch(&self, command: &ActuatorCommand) -> Result<(), ActuatorError>;

    /// Probes the gateway's health endpoint.
    async fn check_connectivity(&self) -> ConnectivityReport;
}
