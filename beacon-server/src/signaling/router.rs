use crate::config::ServerConfig;
use crate::error::RelayError;
use crate::signaling::{SignalingService, ws_handler};
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomResponse {
    pub room_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub rooms: usize,
}

/// Routes:
/// - `POST /rooms` creates a room and returns its id
/// - `GET /rooms/{room_id}/ws?role=server|client` joins it over WebSocket
/// - `GET /health`
pub fn router(service: SignalingService) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/rooms", post(create_room))
        .route("/rooms/{room_id}/ws", get(ws_handler))
        .route("/health", get(health))
        .layer(cors)
        .with_state(service)
}

pub async fn create_room(State(service): State<SignalingService>) -> Json<CreateRoomResponse> {
    let room_id = service.registry().create_room();
    Json(CreateRoomResponse {
        room_id: room_id.to_string(),
    })
}

pub async fn health(State(service): State<SignalingService>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        rooms: service.registry().len(),
    })
}

/// Bind `config`'s address and serve until the listener fails.
pub async fn serve(config: &ServerConfig) -> Result<(), RelayError> {
    let listener = tokio::net::TcpListener::bind(config.socket_addr()).await?;
    info!("Signaling relay listening on http://{}", listener.local_addr()?);

    serve_on(listener, SignalingService::from_config(config)).await
}

pub async fn serve_on(
    listener: tokio::net::TcpListener,
    service: SignalingService,
) -> Result<(), RelayError> {
    axum::serve(listener, router(service)).await?;
    Ok(())
}
