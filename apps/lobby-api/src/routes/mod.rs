pub mod health;
pub mod messages;
pub mod sessions;
pub mod status;

use axum::Router;
use utoipa::OpenApi;

use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(crate::gateway::server::router())
        .merge(status::router())
        .merge(sessions::router())
        .merge(messages::router())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        status::server_status,
        sessions::list_sessions,
        messages::list_messages,
    ),
    components(
        schemas(
            // Error types
            crate::error::ApiErrorBody,
            crate::error::ApiErrorDetail,
            // Models
            crate::models::session::GameSession,
            crate::models::session::Participant,
            crate::models::session::SessionStatus,
            crate::models::message::ChatMessage,
            crate::models::user::UserIdentity,
            // Route request/response types
            health::HealthResponse,
            status::ServerStatusResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check"),
        (name = "Status", description = "Game server status probe"),
        (name = "Sessions", description = "Lobby sessions"),
        (name = "Messages", description = "Chat history"),
    )
)]
pub struct ApiDoc;
