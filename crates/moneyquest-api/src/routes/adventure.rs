//! Routes for the adventure session operations.

use axum::extract::State;
use axum::{Json, Router, routing::{get, post}};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

use moneyquest_core::choice::Choice;
use moneyquest_engine::{ChoiceOutcome, StartOutcome, StatusReport};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for POST /start.
#[derive(Debug, Deserialize)]
pub struct StartRequest {
    /// Player age; defaults to 10 when omitted.
    #[serde(default = "default_age")]
    pub age: u8,
}

fn default_age() -> u8 {
    10
}

/// Request body for POST /choice.
#[derive(Debug, Deserialize)]
pub struct ChoiceRequest {
    /// The decision for the pending scenario.
    pub choice: Choice,
}

/// Response body for POST /start.
#[derive(Debug, Serialize)]
pub struct StartResponse {
    /// Always true; errors use the error envelope instead.
    pub success: bool,
    /// The start outcome fields, flattened into the envelope.
    #[serde(flatten)]
    pub outcome: StartOutcome,
}

/// Response body for POST /choice.
#[derive(Debug, Serialize)]
pub struct ChoiceResponse {
    /// Always true; errors use the error envelope instead.
    pub success: bool,
    /// The choice outcome fields, flattened into the envelope.
    #[serde(flatten)]
    pub outcome: ChoiceOutcome,
}

/// Response body for POST /reset.
#[derive(Debug, Serialize)]
pub struct ResetResponse {
    /// Always true; reset cannot fail.
    pub success: bool,
    /// Confirmation text.
    pub message: String,
}

/// POST /start
#[instrument(skip(state, request), fields(age = request.age))]
async fn start_adventure(
    State(state): State<AppState>,
    Json(request): Json<StartRequest>,
) -> Json<StartResponse> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "handling start command");

    let outcome = state.engine.start(request.age).await;
    Json(StartResponse {
        success: true,
        outcome,
    })
}

/// POST /choice
#[instrument(skip(state, request), fields(choice = %request.choice))]
async fn make_choice(
    State(state): State<AppState>,
    Json(request): Json<ChoiceRequest>,
) -> Result<Json<ChoiceResponse>, ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "handling choice command");

    let outcome = state.engine.choose(request.choice).await?;
    Ok(Json(ChoiceResponse {
        success: true,
        outcome,
    }))
}

/// GET /status
async fn get_status(State(state): State<AppState>) -> Json<StatusReport> {
    Json(state.engine.status().await)
}

/// POST /reset
#[instrument(skip(state))]
async fn reset_adventure(State(state): State<AppState>) -> Json<ResetResponse> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "handling reset command");

    let outcome = state.engine.reset().await;
    Json(ResetResponse {
        success: true,
        message: outcome.message,
    })
}

/// Returns the router for the adventure session operations.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/start", post(start_adventure))
        .route("/choice", post(make_choice))
        .route("/status", get(get_status))
        .route("/reset", post(reset_adventure))
}
