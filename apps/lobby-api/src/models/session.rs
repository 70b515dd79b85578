use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Lifecycle state of a lobby session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum SessionStatus {
    #[default]
    Open,
    InProgress,
}

/// A user's membership record within a session.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default)]
    pub is_ready: bool,
    /// Any additional display fields the client sent, kept as-is.
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

/// An in-memory lobby session. Created by `createGame` and stored exactly as
/// the client sent it — the flattened `extra` map holds whatever fields the
/// creator attached beyond the ones the server understands.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameSession {
    pub session_id: String,
    #[serde(default)]
    pub status: SessionStatus,
    #[serde(default)]
    pub participants: Vec<Participant>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub extra: Map<String, Value>,
}

impl GameSession {
    /// True when every participant is flagged ready. Vacuously true for an
    /// empty participant list.
    pub fn all_ready(&self) -> bool {
        self.participants.iter().all(|p| p.is_ready)
    }
}
