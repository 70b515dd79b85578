//! Lobby business logic: validates inbound events against the session store
//! and fans the resulting state changes out to every connected client.

use std::sync::Arc;

use serde_json::json;

use crate::gateway::events::EventName;
use crate::gateway::fanout::LobbyBroadcast;
use crate::gateway::registry::ConnectionRegistry;
use crate::lobby::store::SessionStore;
use crate::models::session::{GameSession, Participant, SessionStatus};

/// Coordinates all lobby mutations.
///
/// Operations are deliberately quiet about failure: an unknown session id is
/// logged and dropped, never surfaced to the sender. Clients learn about
/// state exclusively through broadcast dispatches. Each mutation dispatches
/// while still holding the session's entry lock, so fan-out order matches
/// mutation order.
#[derive(Clone)]
pub struct LobbyCoordinator {
    sessions: Arc<SessionStore>,
    registry: Arc<ConnectionRegistry>,
    broadcast: LobbyBroadcast,
}

impl LobbyCoordinator {
    pub fn new(
        sessions: Arc<SessionStore>,
        registry: Arc<ConnectionRegistry>,
        broadcast: LobbyBroadcast,
    ) -> Self {
        Self {
            sessions,
            registry,
            broadcast,
        }
    }

    /// Store the session exactly as the client sent it and announce it.
    /// A duplicate id silently replaces the existing session; callers own id
    /// uniqueness.
    pub fn create_session(&self, session: GameSession) {
        let session_id = session.session_id.clone();
        let payload = serde_json::to_value(&session).unwrap_or_default();
        if self.sessions.insert(session) {
            tracing::warn!(%session_id, "createGame replaced an existing session");
        }
        tracing::info!(%session_id, "session created");
        self.broadcast.dispatch(EventName::GAME_CREATED, payload);
    }

    /// Append a participant. The ready flag always starts false, whatever the
    /// client claimed.
    pub fn join_session(&self, session_id: &str, mut participant: Participant) {
        participant.is_ready = false;
        let found = self.sessions.with_session(session_id, |session| {
            session.participants.push(participant.clone());
            self.broadcast.dispatch(
                EventName::PLAYER_JOINED,
                json!({ "sessionId": session_id, "participant": participant }),
            );
        });
        if found.is_none() {
            tracing::warn!(%session_id, "joinGame for unknown session");
        }
    }

    /// Remove every participant carrying this user id.
    pub fn leave_session(&self, session_id: &str, user_id: &str) {
        let found = self.sessions.with_session(session_id, |session| {
            session.participants.retain(|p| p.uid != user_id);
            self.broadcast.dispatch(
                EventName::PLAYER_LEFT,
                json!({ "sessionId": session_id, "userId": user_id }),
            );
        });
        if found.is_none() {
            tracing::warn!(%session_id, "leaveGame for unknown session");
        }
    }

    /// Flip the ready flag on matching participants and announce the change.
    /// When the whole lobby is ready afterwards, additionally announce
    /// `allPlayersReady` — a notification only, the session status does not
    /// change here.
    pub fn set_ready(&self, session_id: &str, user_id: &str, is_ready: bool) {
        let found = self.sessions.with_session(session_id, |session| {
            for participant in session
                .participants
                .iter_mut()
                .filter(|p| p.uid == user_id)
            {
                participant.is_ready = is_ready;
            }
            self.broadcast.dispatch(
                EventName::PLAYER_READY_CHANGED,
                json!({ "sessionId": session_id, "userId": user_id, "isReady": is_ready }),
            );
            if session.all_ready() {
                self.broadcast
                    .dispatch(EventName::ALL_PLAYERS_READY, json!({ "sessionId": session_id }));
            }
        });
        if found.is_none() {
            tracing::warn!(%session_id, "toggleReady for unknown session");
        }
    }

    /// Change the session status. Starting a match requires a non-empty,
    /// fully ready lobby; a rejected transition leaves the session untouched
    /// and produces no broadcast.
    pub fn update_status(&self, session_id: &str, status: SessionStatus) {
        let found = self.sessions.with_session(session_id, |session| {
            if status == SessionStatus::InProgress
                && (session.participants.is_empty() || !session.all_ready())
            {
                tracing::warn!(%session_id, "rejected start: not every player is ready");
                return;
            }
            session.status = status;
            self.broadcast.dispatch(
                EventName::GAME_UPDATED,
                serde_json::to_value(&*session).unwrap_or_default(),
            );
        });
        if found.is_none() {
            tracing::warn!(%session_id, "updateGame for unknown session");
        }
    }

    /// Handle a connection going away: drop its registry entry and sweep the
    /// user out of every session they were in, announcing each removal.
    pub fn on_disconnect(&self, connection_id: &str) {
        let Some(identity) = self.registry.unregister(connection_id) else {
            return;
        };
        let user_id = identity.user_id;
        // Full scan over all sessions; fine at lobby scale.
        self.sessions.for_each_session(|session| {
            let before = session.participants.len();
            session.participants.retain(|p| p.uid != user_id);
            if session.participants.len() < before {
                self.broadcast.dispatch(
                    EventName::PLAYER_LEFT,
                    json!({ "sessionId": session.session_id, "userId": user_id }),
                );
            }
        });
        tracing::info!(%connection_id, %user_id, "connection removed from lobby");
    }
}
