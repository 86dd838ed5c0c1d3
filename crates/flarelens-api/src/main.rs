use std::env;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod routes;
mod state;

use flarelens_coach::bedrock::BedrockGenerator;
use flarelens_risk::RiskEngine;
use flarelens_service::FlareService;
use flarelens_store::memory::MemoryLogStore;

use state::AppState;

const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-3-5-haiku-20241022-v1:0";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let model_id =
        env::var("FLARELENS_MODEL_ID").unwrap_or_else(|_| DEFAULT_MODEL_ID.to_string());
    let port = env::var("FLARELENS_PORT").unwrap_or_else(|_| "8080".to_string());

    let aws_config = aws_config::load_from_env().await;

    let state = AppState {
        service: Arc::new(FlareService::new(
            MemoryLogStore::new(),
            RiskEngine::default(),
        )),
        generator: Arc::new(BedrockGenerator::new(&aws_config, model_id)),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/samples", post(routes::samples::ingest_sample))
        .route("/patients/{id}/samples", get(routes::samples::get_window))
        .route("/patients/{id}/alert", get(routes::alerts::get_flare_alert))
        .route("/patients/{id}/coach", post(routes::coaching::coach_stress))
        .route(
            "/patients/{id}/summary",
            get(routes::summary::clinician_summary),
        )
        .route("/patients/{id}/rehab", post(routes::rehab::rehab_feedback))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!(%port, "flarelens api listening");
    axum::serve(listener, app).await?;
    Ok(())
}
