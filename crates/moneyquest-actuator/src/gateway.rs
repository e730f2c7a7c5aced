//! HTTP client for the actuator gateway.
//!
//! Wire contract: `POST {endpoint}/command` with `{text, zone, mood}`;
//! `GET {endpoint}/health` as the probe. Commands get a 5 s timeout, the
//! probe a shorter 3 s one — the probe only feeds status display and must
//! stay snappy.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use moneyquest_core::actuator::{Actuator, ActuatorCommand, ConnectivityReport};
use moneyquest_core::error::ActuatorError;

const COMMAND_TIMEOUT: Duration = Duration::from_secs(5);
const HEALTH_TIMEOUT: Duration = Duration::from_secs(3);

/// Dispatcher backed by the gateway's HTTP endpoint.
#[derive(Debug, Clone)]
pub struct HttpActuator {
    client: Client,
    endpoint: String,
}

impl HttpActuator {
    /// Creates a dispatcher for the gateway at `endpoint`
    /// (e.g. `http://192.168.1.50:5000`).
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// The configured gateway endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Actuator for HttpActuator {
    async fn dispatch(&self, command: &ActuatorCommand) -> Result<(), ActuatorError> {
        debug!(zone = %command.zone, "sending actuator command");

        let response = self
            .client
            .post(format!("{}/command", self.endpoint))
            .timeout(COMMAND_TIMEOUT)
            .json(command)
            .send()
            .await
            .map_err(|err| ActuatorError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ActuatorError::Status(status.as_u16()))
        }
    }

    async fn check_connectivity(&self) -> ConnectivityReport {
        let probe = self
            .client
            .get(format!("{}/health", self.endpoint))
            .timeout(HEALTH_TIMEOUT)
            .send()
            .await;

        match probe {
            Ok(response) if response.status().is_success() => ConnectivityReport {
                connected: true,
                endpoint: self.endpoint.clone(),
                message: "actuator gateway reachable".to_owned(),
            },
            Ok(response) => ConnectivityReport {
                connected: false,
                endpoint: self.endpoint.clone(),
                message: format!("gateway health probe returned {}", response.status()),
            },
            Err(err) => ConnectivityReport {
                connected: false,
                endpoint: self.endpoint.clone(),
                message: format!(
                    "cannot reach actuator gateway at {}: {err}. Make sure it is running and on the same network.",
                    self.endpoint
                ),
            },
        }
    }
}
