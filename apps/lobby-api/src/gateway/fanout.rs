//! Broadcast hub for dispatching lobby events to connected clients.
//!
//! Uses a single `tokio::sync::broadcast` channel. Lobby events are not
//! addressed to individual clients, so every connection subscribes and
//! forwards everything. Send order at the hub is the order clients see.

use std::sync::Arc;

use serde_json::Value;
use tokio::sync::broadcast;

/// Capacity of the broadcast channel. Slow receivers that fall behind will
/// skip messages (RecvError::Lagged).
const BROADCAST_CAPACITY: usize = 4096;

/// A payload broadcast to all connected clients.
#[derive(Debug, Clone)]
pub struct BroadcastPayload {
    /// The dispatch event name (e.g. "gameCreated").
    pub event_name: String,
    /// Serialized event data.
    pub data: Value,
}

/// The global broadcast hub. Cloneable — store in AppState.
#[derive(Clone)]
pub struct LobbyBroadcast {
    sender: broadcast::Sender<Arc<BroadcastPayload>>,
}

impl LobbyBroadcast {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self { sender }
    }

    /// Subscribe to the broadcast channel. Each gateway connection should
    /// call this once to get its own receiver.
    pub fn subscribe(&self) -> broadcast::Receiver<Arc<BroadcastPayload>> {
        self.sender.subscribe()
    }

    /// Dispatch an event to all connected clients. Fire-and-forget:
    /// send() returns Err if there are no receivers — that's fine.
    pub fn dispatch(&self, event_name: &str, data: Value) {
        let _ = self.sender.send(Arc::new(BroadcastPayload {
            event_name: event_name.to_string(),
            data,
        }));
    }
}
