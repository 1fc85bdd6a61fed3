pub mod handlers;
mod overlay;
pub mod types;

pub use overlay::render as render_overlay;

use crate::{
    Result,
    config::Config,
    latest::LatestResponse,
    llm::{InferenceClient, OllamaClient},
    relay::Relay,
};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

impl AppState {
    pub fn new(config: &Config, client: Arc<dyn InferenceClient>) -> Self {
        let latest = LatestResponse::new();
        let relay = Relay::new(client, &config.llm, latest.clone());

        Self {
            relay: Arc::new(relay),
            latest,
            overlay: render_overlay(&config.overlay).into(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/query", post(handlers::query))
        .route("/overlay", get(handlers::overlay))
        .route("/latest_response", get(handlers::latest_response))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let client = OllamaClient::new(&config.llm);
    info!("Using Ollama at {}", client.base_url());

    let app = router(AppState::new(&config, Arc::new(client)));

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);
    info!("Overlay available at http://{}/overlay", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
