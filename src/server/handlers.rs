use super::types::{ErrorResponse, QueryRequest, TextResponse};
use crate::{latest::LatestResponse, relay::Relay};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, Json},
};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
    pub latest: LatestResponse,
    pub overlay: Arc<str>,
}

pub async fn query(
    State(state): State<AppState>,
    Json(request): Json<QueryRequest>,
) -> Result<Json<TextResponse>, (StatusCode, Json<ErrorResponse>)> {
    let Some(input) = request.input() else {
        warn!("Rejected query without input");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "No input provided".to_string(),
            }),
        ));
    };

    info!("Received query: {}", input);

    let response = state.relay.ask(input).await;
    Ok(Json(TextResponse { response }))
}

pub async fn latest_response(State(state): State<AppState>) -> Json<TextResponse> {
    Json(TextResponse {
        response: state.latest.get(),
    })
}

pub async fn overlay(State(state): State<AppState>) -> Html<String> {
    Html(state.overlay.to_string())
}
