use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use skirmish_common::id;

/// A relayed chat message, as appended to the history store and broadcast to
/// connected clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub sender: String,
    pub text: String,
    pub server_timestamp: DateTime<Utc>,
}

impl ChatMessage {
    /// Build a message stamped with the server clock.
    pub fn new(sender: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id::prefixed_ulid(id::prefix::MESSAGE),
            sender: sender.into(),
            text: text.into(),
            server_timestamp: Utc::now(),
        }
    }
}
