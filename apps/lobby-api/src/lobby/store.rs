//! In-memory session store with per-entry locking.

use dashmap::DashMap;
use parking_lot::Mutex;

use crate::models::session::GameSession;

/// Shared store of all live lobby sessions.
///
/// Uses `DashMap` for shard-level concurrency and `parking_lot::Mutex` per
/// entry so read-modify-write sequences on one session are serialized.
/// Sessions are never removed; their lifetime is the process lifetime.
pub struct SessionStore {
    sessions: DashMap<String, Mutex<GameSession>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self {
            sessions: DashMap::new(),
        }
    }

    /// Insert a session, silently replacing any existing one with the same
    /// id. Returns true when an existing session was replaced.
    pub fn insert(&self, session: GameSession) -> bool {
        self.sessions
            .insert(session.session_id.clone(), Mutex::new(session))
            .is_some()
    }

    /// Run `f` with exclusive access to the session. Returns `None` when the
    /// id is unknown, leaving the store untouched.
    pub fn with_session<R>(
        &self,
        session_id: &str,
        f: impl FnOnce(&mut GameSession) -> R,
    ) -> Option<R> {
        let entry = self.sessions.get(session_id)?;
        let mut session = entry.lock();
        Some(f(&mut session))
    }

    /// Clone the current state of one session.
    pub fn get(&self, session_id: &str) -> Option<GameSession> {
        self.sessions.get(session_id).map(|e| e.lock().clone())
    }

    /// Run `f` against every session, one entry lock at a time.
    pub fn for_each_session(&self, mut f: impl FnMut(&mut GameSession)) {
        for entry in self.sessions.iter() {
            let mut session = entry.lock();
            f(&mut session);
        }
    }

    /// Snapshot every session. Iteration order is unspecified.
    pub fn snapshot_all(&self) -> Vec<GameSession> {
        self.sessions.iter().map(|e| e.lock().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
