use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Caller-supplied identity bound to a gateway connection at IDENTIFY time.
///
/// Nothing here is verified; the lobby trusts whatever the client sends.
/// The only hard requirement is a non-empty `userId`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl UserIdentity {
    /// Name shown in chat and log lines; falls back to the user id.
    pub fn display_label(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.user_id)
    }
}
