//! Game-server status probe endpoint.

use axum::extract::Query;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::query::{self, QueryError};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/v1/server-status", get(server_status))
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ServerStatusParams {
    /// Game server hostname or IP address.
    pub host: String,
    /// Game server query port (1-65535).
    pub port: u16,
}

/// Probe result envelope. Failures come back as a result, not an HTTP error:
/// a server that doesn't answer is `offline`, transport and parse problems
/// are `error`, both with the error text attached.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatusResponse {
    /// "online", "offline", or "error".
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub players: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_players: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gametype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ServerStatusResponse {
    fn failure(status: &str, error: String) -> Self {
        Self {
            status: status.to_string(),
            players: None,
            max_players: None,
            map: None,
            gametype: None,
            error: Some(error),
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/server-status",
    params(ServerStatusParams),
    responses((status = 200, description = "Probe result", body = ServerStatusResponse)),
    tag = "Status"
)]
pub async fn server_status(
    Query(params): Query<ServerStatusParams>,
) -> Result<Json<ServerStatusResponse>, ApiError> {
    if params.host.is_empty() {
        return Err(ApiError::bad_request("host is required"));
    }
    if params.port == 0 {
        return Err(ApiError::bad_request("port must be between 1 and 65535"));
    }

    let response = match query::game_server_status(&params.host, params.port).await {
        Ok(status) => ServerStatusResponse {
            status: "online".to_string(),
            players: Some(status.players),
            max_players: Some(status.max_players),
            map: Some(status.map),
            gametype: Some(status.gametype),
            error: None,
        },
        Err(err @ QueryError::Timeout) => {
            tracing::debug!(host = %params.host, port = params.port, "status probe timed out");
            ServerStatusResponse::failure("offline", err.to_string())
        }
        Err(err) => {
            tracing::warn!(host = %params.host, port = params.port, %err, "status probe failed");
            ServerStatusResponse::failure("error", err.to_string())
        }
    };

    Ok(Json(response))
}
