//! Error taxonomy.
//!
//! Only `EngineError` ever crosses the engine boundary to a caller.
//! Generator failures are absorbed by falling back to offline content;
//! actuator failures are logged and ignored so gameplay is never blocked
//! by an offline device.

use thiserror::Error;

/// User-visible session errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// `choose` was called while no scenario is awaiting a decision.
    #[error("no active scenario")]
    NoActiveScenario,
}

/// Content generator failures. Never surfaced to callers; the adapter
/// routes every variant to the fallback content library.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// No backend was configured (e.g. the API key is absent).
    #[error("no generator backend configured")]
    Unconfigured,

    /// The backend request failed: transport error, timeout, or a
    /// non-success HTTP status.
    #[error("generator backend error: {0}")]
    Backend(String),

    /// The backend responded, but the payload did not parse into the
    /// expected scenario/consequence shape.
    #[error("malformed generator response: {0}")]
    MalformedResponse(String),
}

/// Actuator gateway failures. Never surfaced to callers; the engine logs
/// the error branch and proceeds as if the device is merely advisory.
#[derive(Debug, Error)]
pub enum ActuatorError {
    /// The gateway could not be reached: connection refused, DNS failure,
    /// or timeout.
    #[error("actuator unreachable: {0}")]
    Transport(String),

    /// The gateway answered with a non-success HTTP status.
    #[error("actuator rejected command with status {0}")]
    Status(u16),
}
