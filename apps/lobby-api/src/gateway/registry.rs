//! Connection registry mapping live gateway connections to their identities.

use dashmap::DashMap;

use crate::models::user::UserIdentity;

/// Shared registry of all connected clients.
///
/// Entries are created when a connection completes IDENTIFY and removed when
/// the socket goes away. Identities are never persisted.
pub struct ConnectionRegistry {
    connections: DashMap<String, UserIdentity>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self {
            connections: DashMap::new(),
        }
    }

    /// Bind an identity to a connection. Rejects an empty `userId`; the
    /// caller must terminate the connection on error.
    pub fn register(
        &self,
        connection_id: &str,
        identity: UserIdentity,
    ) -> Result<(), &'static str> {
        if identity.user_id.is_empty() {
            return Err("userId is required");
        }
        self.connections.insert(connection_id.to_string(), identity);
        Ok(())
    }

    /// Remove a connection, returning the identity it carried.
    pub fn unregister(&self, connection_id: &str) -> Option<UserIdentity> {
        self.connections
            .remove(connection_id)
            .map(|(_, identity)| identity)
    }

    /// Read the identity bound to a connection.
    pub fn lookup(&self, connection_id: &str) -> Option<UserIdentity> {
        self.connections.get(connection_id).map(|e| e.value().clone())
    }

    /// Number of currently registered connections.
    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}
