//! Gateway opcodes, event names, and wire-format messages.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::session::{Participant, SessionStatus};

// ---------------------------------------------------------------------------
// Opcodes
// ---------------------------------------------------------------------------

pub const OP_DISPATCH: u8 = 0;
pub const OP_HEARTBEAT: u8 = 1;
pub const OP_IDENTIFY: u8 = 2;
pub const OP_HEARTBEAT_ACK: u8 = 6;

// ---------------------------------------------------------------------------
// Server → Client message
// ---------------------------------------------------------------------------

/// A message sent from the server to the client over WebSocket.
#[derive(Debug, Clone, Serialize)]
pub struct GatewayMessage {
    pub op: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub t: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s: Option<u64>,
    pub d: Value,
}

impl GatewayMessage {
    /// Build a DISPATCH message (op=0).
    pub fn dispatch(event_name: &str, seq: u64, data: Value) -> Self {
        Self {
            op: OP_DISPATCH,
            t: Some(event_name.to_string()),
            s: Some(seq),
            d: data,
        }
    }

    /// Build a HEARTBEAT_ACK message (op=6).
    pub fn heartbeat_ack(seq: u64) -> Self {
        Self {
            op: OP_HEARTBEAT_ACK,
            t: None,
            s: None,
            d: serde_json::json!({ "ack": seq }),
        }
    }
}

// ---------------------------------------------------------------------------
// Client → Server message
// ---------------------------------------------------------------------------

/// A message received from the client over WebSocket. Lobby commands arrive
/// as op=0 with the command name in `t`.
#[derive(Debug, Deserialize)]
pub struct ClientMessage {
    pub op: u8,
    #[serde(default)]
    pub t: Option<String>,
    #[serde(default)]
    pub d: Value,
}

// ---------------------------------------------------------------------------
// HEARTBEAT payload
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct HeartbeatPayload {
    #[serde(default)]
    pub seq: u64,
}

// ---------------------------------------------------------------------------
// Command payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JoinGamePayload {
    pub session_id: String,
    pub participant: Participant,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveGamePayload {
    pub session_id: String,
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleReadyPayload {
    pub session_id: String,
    pub user_id: String,
    pub is_ready: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateGamePayload {
    pub session_id: String,
    pub status: SessionStatus,
}

#[derive(Debug, Deserialize)]
pub struct SendMessagePayload {
    pub text: String,
}

// ---------------------------------------------------------------------------
// Dispatch event types
// ---------------------------------------------------------------------------

/// Event names dispatched to clients.
pub struct EventName;

impl EventName {
    pub const READY: &'static str = "ready";
    pub const GAME_CREATED: &'static str = "gameCreated";
    pub const PLAYER_JOINED: &'static str = "playerJoined";
    pub const PLAYER_LEFT: &'static str = "playerLeft";
    pub const PLAYER_READY_CHANGED: &'static str = "playerReadyChanged";
    pub const ALL_PLAYERS_READY: &'static str = "allPlayersReady";
    pub const GAME_UPDATED: &'static str = "gameUpdated";
    pub const CHAT_MESSAGE: &'static str = "chatMessage";
}

/// Command names accepted from clients.
pub struct CommandName;

impl CommandName {
    pub const CREATE_GAME: &'static str = "createGame";
    pub const JOIN_GAME: &'static str = "joinGame";
    pub const LEAVE_GAME: &'static str = "leaveGame";
    pub const TOGGLE_READY: &'static str = "toggleReady";
    pub const UPDATE_GAME: &'static str = "updateGame";
    pub const SEND_MESSAGE: &'static str = "sendMessage";
}
