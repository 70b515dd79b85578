mod common;

use axum_test::TestServer;
use serde_json::Value;
use tokio::net::UdpSocket;

use lobby_api::models::message::ChatMessage;
use lobby_api::models::session::{GameSession, SessionStatus};

fn test_server() -> (TestServer, lobby_api::AppState) {
    let state = common::test_state();
    let app = lobby_api::routes::router().with_state(state.clone());
    let server = TestServer::new(app).expect("test server");
    (server, state)
}

fn session(id: &str) -> GameSession {
    GameSession {
        session_id: id.to_string(),
        status: SessionStatus::Open,
        participants: Vec::new(),
        extra: serde_json::Map::new(),
    }
}

#[tokio::test]
async fn health_returns_ok() {
    let (server, _state) = test_server();

    let resp = server.get("/health").await;
    resp.assert_status_ok();
    assert_eq!(resp.json::<Value>()["status"], "ok");
}

#[tokio::test]
async fn sessions_endpoint_lists_live_sessions() {
    let (server, state) = test_server();

    let resp = server.get("/api/v1/sessions").await;
    resp.assert_status_ok();
    assert!(resp.json::<Value>().as_array().unwrap().is_empty());

    state.coordinator.create_session(session("m1"));

    let resp = server.get("/api/v1/sessions").await;
    let body = resp.json::<Value>();
    let sessions = body.as_array().unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0]["sessionId"], "m1");
    assert_eq!(sessions[0]["status"], "open");
}

#[tokio::test]
async fn messages_endpoint_returns_newest_ascending() {
    let (server, state) = test_server();

    for text in ["one", "two", "three"] {
        state
            .history
            .append(ChatMessage::new("alice", text))
            .await
            .unwrap();
    }

    let resp = server
        .get("/api/v1/messages")
        .add_query_param("limit", 2)
        .await;
    resp.assert_status_ok();
    let body = resp.json::<Value>();
    let messages = body.as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["text"], "two");
    assert_eq!(messages[1]["text"], "three");
}

#[tokio::test]
async fn server_status_rejects_port_zero() {
    let (server, _state) = test_server();

    let resp = server
        .get("/api/v1/server-status")
        .add_query_param("host", "127.0.0.1")
        .add_query_param("port", 0)
        .await;
    resp.assert_status_bad_request();
    assert_eq!(resp.json::<Value>()["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn server_status_reports_online_server() {
    let (server, _state) = test_server();

    // Scripted game server: answer the first probe with a canned status.
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let port = socket.local_addr().unwrap().port();
    tokio::spawn(async move {
        let mut buf = [0u8; 64];
        let (_, src) = socket.recv_from(&mut buf).await.unwrap();
        let response: &[u8] =
            b"\xff\xff\xff\xffstatusResponse\n\\sv_maxclients\\16\\mapname\\dm1\\g_gametype\\0\nplayer1\nplayer2\n";
        socket.send_to(response, src).await.unwrap();
    });

    let resp = server
        .get("/api/v1/server-status")
        .add_query_param("host", "127.0.0.1")
        .add_query_param("port", port)
        .await;
    resp.assert_status_ok();

    let body = resp.json::<Value>();
    assert_eq!(body["status"], "online");
    assert_eq!(body["players"], 1);
    assert_eq!(body["maxPlayers"], 16);
    assert_eq!(body["map"], "dm1");
    assert_eq!(body["gametype"], "0");
    assert!(body.get("error").is_none());
}
