//! Diagnostics routes for the actuator gateway.
//!
//! Display-only: the connectivity probe and the movement test never gate
//! gameplay.

use axum::extract::State;
use axum::{Json, Router, routing::{get, post}};
use serde::{Deserialize, Serialize};
use tracing::warn;

use moneyquest_core::actuator::{ActuatorCommand, ConnectivityReport};
use moneyquest_core::choice::Zone;
use moneyquest_core::model::Mood;

use crate::state::AppState;

/// Request body for POST /test-movement.
#[derive(Debug, Deserialize)]
pub struct TestMovementRequest {
    /// The zone to drive the actuator to.
    pub zone: Zone,
}

/// Response body for POST /test-movement.
#[derive(Debug, Serialize)]
pub struct TestMovementResponse {
    /// Whether the gateway acknowledged the command.
    pub success: bool,
    /// Human-readable outcome description.
    pub message: String,
}

/// GET /test
async fn test_connection(State(state): State<AppState>) -> Json<ConnectivityReport> {
    Json(state.actuator.check_connectivity().await)
}

/// POST /test-movement
async fn test_movement(
    State(state): State<AppState>,
    Json(request): Json<TestMovementRequest>,
) -> Json<TestMovementResponse> {
    let command = ActuatorCommand {
        text: format!("Testing movement to {} zone", request.zone),
        zone: request.zone,
        mood: Mood::Neutral,
    };

    match state.actuator.dispatch(&command).await {
        Ok(()) => Json(TestMovementResponse {
            success: true,
            message: "Command sent successfully".to_owned(),
        }),
        Err(err) => {
            warn!(error = %err, zone = %request.zone, "movement test failed");
            Json(TestMovementResponse {
                success: false,
                message: "Failed to send command (actuator might be offline)".to_owned(),
            })
        }
    }
}

/// Returns the router for the actuator diagnostics.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/test", get(test_connection))
        .route("/test-movement", post(test_movement))
}
