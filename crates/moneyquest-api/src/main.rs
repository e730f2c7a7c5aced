//! MoneyQuest API server entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use moneyquest_actuator::HttpActuator;
use moneyquest_api::error::AppError;
use moneyquest_api::state::AppState;
use moneyquest_core::actuator::Actuator;
use moneyquest_core::clock::SystemClock;
use moneyquest_core::generator::GeneratorBackend;
use moneyquest_core::rng::SystemRng;
use moneyquest_engine::AdventureEngine;
use moneyquest_generator::openai::DEFAULT_MODEL;
use moneyquest_generator::{ContentService, OpenAiBackend};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting MoneyQuest API server");

    // Read configuration from environment.
    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3001".to_string())
        .parse()
        .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?;
    let actuator_url =
        std::env::var("ACTUATOR_URL").unwrap_or_else(|_| "http://192.168.1.50:5000".to_string());

    // The generator is optional: without an API key the game runs entirely
    // on fallback content.
    let backend: Option<Arc<dyn GeneratorBackend>> = match std::env::var("OPENAI_API_KEY") {
        Ok(key) if !key.is_empty() => {
            let model =
                std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
            tracing::info!(%model, "content generator configured");
            Some(Arc::new(OpenAiBackend::new(key).with_model(model)))
        }
        _ => {
            tracing::warn!("OPENAI_API_KEY not set; serving fallback content only");
            None
        }
    };

    // Wire the engine.
    let content = ContentService::new(backend, Box::new(SystemRng));
    let actuator: Arc<dyn Actuator> = Arc::new(HttpActuator::new(actuator_url.clone()));
    tracing::info!(%actuator_url, "actuator gateway configured");

    let engine = Arc::new(AdventureEngine::new(
        content,
        actuator.clone(),
        Arc::new(SystemClock),
    ));

    let app = moneyquest_api::app(AppState::new(engine, actuator));

    // Start server.
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| AppError::Config(format!("invalid HOST:PORT combination: {e}")))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
