//! Named lobby commands dispatched by connected clients.

use serde_json::Value;

use crate::gateway::events::{
    CommandName, EventName, JoinGamePayload, LeaveGamePayload, SendMessagePayload,
    ToggleReadyPayload, UpdateGamePayload,
};
use crate::gateway::session::ConnectionSession;
use crate::models::message::ChatMessage;
use crate::models::session::GameSession;
use crate::AppState;

/// Process one client command. Failures are logged and swallowed — the sender
/// gets no reply frame; the next broadcast is the only feedback channel.
pub async fn handle_command(
    state: &AppState,
    session: &ConnectionSession,
    name: &str,
    data: Value,
) {
    match name {
        CommandName::CREATE_GAME => match serde_json::from_value::<GameSession>(data) {
            Ok(game) => state.coordinator.create_session(game),
            Err(err) => tracing::warn!(%err, "malformed createGame payload"),
        },
        CommandName::JOIN_GAME => match serde_json::from_value::<JoinGamePayload>(data) {
            Ok(p) => state.coordinator.join_session(&p.session_id, p.participant),
            Err(err) => tracing::warn!(%err, "malformed joinGame payload"),
        },
        CommandName::LEAVE_GAME => match serde_json::from_value::<LeaveGamePayload>(data) {
            Ok(p) => state.coordinator.leave_session(&p.session_id, &p.user_id),
            Err(err) => tracing::warn!(%err, "malformed leaveGame payload"),
        },
        CommandName::TOGGLE_READY => match serde_json::from_value::<ToggleReadyPayload>(data) {
            Ok(p) => state
                .coordinator
                .set_ready(&p.session_id, &p.user_id, p.is_ready),
            Err(err) => tracing::warn!(%err, "malformed toggleReady payload"),
        },
        CommandName::UPDATE_GAME => match serde_json::from_value::<UpdateGamePayload>(data) {
            Ok(p) => state.coordinator.update_status(&p.session_id, p.status),
            Err(err) => tracing::warn!(%err, "malformed updateGame payload"),
        },
        CommandName::SEND_MESSAGE => match serde_json::from_value::<SendMessagePayload>(data) {
            Ok(p) => relay_chat_message(state, session, p.text).await,
            Err(err) => tracing::warn!(%err, "malformed sendMessage payload"),
        },
        other => {
            tracing::warn!(command = other, connection_id = %session.connection_id, "unknown lobby command");
        }
    }
}

/// Append a chat message to the history store and relay it to everyone.
/// The relay still happens when the store write fails; history is best-effort.
async fn relay_chat_message(state: &AppState, session: &ConnectionSession, text: String) {
    let message = ChatMessage::new(session.identity.display_label(), text);
    if let Err(err) = state.history.append(message.clone()).await {
        tracing::error!(%err, "failed to append chat message to history");
    }
    state.broadcast.dispatch(
        EventName::CHAT_MESSAGE,
        serde_json::to_value(&message).unwrap_or_default(),
    );
}
