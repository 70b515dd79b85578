//! Chat history read endpoint.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::error::ApiError;
use crate::models::message::ChatMessage;
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/messages", get(list_messages))
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListMessagesParams {
    /// Maximum number of messages to return; the newest ones are kept and
    /// returned in ascending chronological order.
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    50
}

#[utoipa::path(
    get,
    path = "/api/v1/messages",
    params(ListMessagesParams),
    responses((status = 200, description = "Recent chat messages, oldest first", body = [ChatMessage])),
    tag = "Messages"
)]
pub async fn list_messages(
    State(state): State<AppState>,
    Query(params): Query<ListMessagesParams>,
) -> Result<Json<Vec<ChatMessage>>, ApiError> {
    let messages = state.history.recent(params.limit).await?;
    Ok(Json(messages))
}
