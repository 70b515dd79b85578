pub mod config;
pub mod error;
pub mod gateway;
pub mod history;
pub mod lobby;
pub mod models;
pub mod query;
pub mod routes;

use std::sync::Arc;

use config::Config;
use gateway::fanout::LobbyBroadcast;
use gateway::registry::ConnectionRegistry;
use history::HistoryStore;
use lobby::coordinator::LobbyCoordinator;
use lobby::store::SessionStore;

/// Shared application state available to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub registry: Arc<ConnectionRegistry>,
    pub sessions: Arc<SessionStore>,
    pub history: Arc<dyn HistoryStore>,
    pub broadcast: LobbyBroadcast,
    pub coordinator: LobbyCoordinator,
}

impl AppState {
    pub fn new(config: Config, history: Arc<dyn HistoryStore>) -> Self {
        let registry = Arc::new(ConnectionRegistry::new());
        let sessions = Arc::new(SessionStore::new());
        let broadcast = LobbyBroadcast::new();
        let coordinator =
            LobbyCoordinator::new(sessions.clone(), registry.clone(), broadcast.clone());
        Self {
            config: Arc::new(config),
            registry,
            sessions,
            history,
            broadcast,
            coordinator,
        }
    }
}
