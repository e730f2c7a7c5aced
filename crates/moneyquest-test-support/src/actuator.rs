//! Test actuators — recording and unreachable `Actuator` implementations
//! for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use moneyquest_core::actuator::{Actuator, ActuatorCommand, ConnectivityReport};
use moneyquest_core::error::ActuatorError;

/// An actuator that acknowledges every command and records it in order.
#[derive(Debug, Default)]
pub struct RecordingActuator {
    commands: Mutex<Vec<ActuatorCommand>>,
}

impl RecordingActuator {
    /// Create a new recording actuator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all dispatched commands.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn commands(&self) -> Vec<ActuatorCommand> {
        self.commands.lock().unwrap().clone()
    }
}

#[async_trait]
impl Actuator for RecordingActuator {
    async fn dispatch(&self, command: &ActuatorCommand) -> Result<(), ActuatorError> {
        self.commands.lock().unwrap().push(command.clone());
        Ok(())
    }

    async fn check_connectivity(&self) -> ConnectivityReport {
        ConnectivityReport {
            connected: true,
            endpoint: "recording://".to_owned(),
            message: "recording actuator".to_owned(),
        }
    }
}

/// An actuator whose gateway is always offline. Every dispatch returns a
/// transport error; the probe reports disconnected.
#[derive(Debug, Clone, Copy)]
pub struct UnreachableActuator;

#[async_trait]
impl Actuator for UnreachableActuator {
    async fn dispatch(&self, _command: &ActuatorCommand) -> Result<(), ActuatorError> {
        Err(ActuatorError::Transport("connection refused".into()))
    }

    async fn check_connectivity(&self) -> ConnectivityReport {
        ConnectivityReport {
            connected: false,
            endpoint: "unreachable://".to_owned(),
            message: "connection refused".to_owned(),
        }
    }
}
