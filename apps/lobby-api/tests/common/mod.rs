use std::net::SocketAddr;
use std::sync::Arc;

use lobby_api::config::Config;
use lobby_api::history::{HistoryStore, MemoryHistory};
use lobby_api::AppState;

/// Build a test AppState with an in-memory history store.
pub fn test_state() -> AppState {
    let config = Config {
        port: 0,
        history_capacity: 100,
    };
    let history: Arc<dyn HistoryStore> = Arc::new(MemoryHistory::new(config.history_capacity));
    AppState::new(config, history)
}

/// Start the full application router on an OS-assigned port. Returns the
/// address and a handle to the shared state; the server runs in the
/// background.
pub async fn start_server() -> (SocketAddr, AppState) {
    let state = test_state();
    let app = lobby_api::routes::router().with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (addr, state)
}
