//! Read-only lobby session listing.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::models::session::GameSession;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/sessions", get(list_sessions))
}

#[utoipa::path(
    get,
    path = "/api/v1/sessions",
    responses((status = 200, description = "All live sessions", body = [GameSession])),
    tag = "Sessions"
)]
pub async fn list_sessions(State(state): State<AppState>) -> Json<Vec<GameSession>> {
    Json(state.sessions.snapshot_all())
}
