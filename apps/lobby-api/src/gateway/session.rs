//! Per-connection gateway state.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::models::user::UserIdentity;

/// State for a single WebSocket connection.
pub struct ConnectionSession {
    /// Unique connection identifier (`conn_` prefixed ULID).
    pub connection_id: String,
    /// The identity the client supplied at IDENTIFY time.
    pub identity: UserIdentity,
    /// Monotonically increasing sequence number for dispatch events.
    seq: AtomicU64,
}

impl ConnectionSession {
    pub fn new(connection_id: String, identity: UserIdentity) -> Self {
        Self {
            connection_id,
            identity,
            seq: AtomicU64::new(0),
        }
    }

    /// Get the next sequence number for a dispatch event.
    pub fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed) + 1
    }
}
