//! Out-of-band game server status probe.
//!
//! Speaks the connectionless query protocol of id Tech 3 derived servers: a
//! single `getstatus` datagram, a single response, no retries. Every call
//! opens its own socket — the protocol carries no transaction id, so in-flight
//! probes must never share a channel.

use std::time::Duration;

use serde::Serialize;
use thiserror::Error;
use tokio::net::UdpSocket;
use tokio::time;

/// The probe datagram: four `0xFF` bytes followed by ASCII `getstatus`,
/// no trailing NUL. Must match the wire protocol bit for bit.
pub const STATUS_PROBE: &[u8] = b"\xff\xff\xff\xffgetstatus";

/// How long to wait for the response datagram.
pub const QUERY_TIMEOUT: Duration = Duration::from_millis(3000);

const DEFAULT_MAX_PLAYERS: i64 = 32;
const RECV_BUFFER_SIZE: usize = 2048;

/// Probe failure. None of these are fatal to the process; the caller reports
/// them and moves on.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("no response within {}ms", QUERY_TIMEOUT.as_millis())]
    Timeout,
    #[error("transport error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed status response: {0}")]
    Parse(&'static str),
}

/// Parsed `statusResponse` fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatus {
    pub players: i64,
    pub max_players: i64,
    pub map: String,
    pub gametype: String,
}

/// Query a remote game server for its live status.
///
/// One attempt per call: send the probe, accept the first datagram that comes
/// back, or give up after [`QUERY_TIMEOUT`]. The socket is dropped on every
/// exit path.
pub async fn game_server_status(host: &str, port: u16) -> Result<ServerStatus, QueryError> {
    let socket = UdpSocket::bind("0.0.0.0:0").await?;
    socket.send_to(STATUS_PROBE, (host, port)).await?;

    let mut buf = [0u8; RECV_BUFFER_SIZE];
    let (len, _addr) = time::timeout(QUERY_TIMEOUT, socket.recv_from(&mut buf))
        .await
        .map_err(|_| QueryError::Timeout)??;

    parse_status_response(&buf[..len])
}

/// Parse a `statusResponse` payload.
///
/// Line layout: a header line, one info line of `\key\value` pairs, the
/// player names, and a trailing empty line. The player count comes out one
/// less than the number of listed names, and `-1` when the player section is
/// missing entirely; kept that way for compatibility with existing consumers.
fn parse_status_response(payload: &[u8]) -> Result<ServerStatus, QueryError> {
    let text = String::from_utf8_lossy(payload);
    let lines: Vec<&str> = text.split('\n').collect();
    if lines.len() < 2 {
        return Err(QueryError::Parse("missing info line"));
    }

    let mut status = ServerStatus {
        players: lines.len() as i64 - 4,
        max_players: DEFAULT_MAX_PLAYERS,
        map: "unknown".to_string(),
        gametype: "unknown".to_string(),
    };

    // The info line starts with a backslash, so the first token is empty and
    // the rest alternate key/value. Unknown keys are ignored.
    let mut tokens = lines[1].split('\\');
    tokens.next();
    while let (Some(key), Some(value)) = (tokens.next(), tokens.next()) {
        match key {
            "sv_maxclients" => {
                if let Ok(parsed) = value.parse() {
                    status.max_players = parsed;
                }
            }
            "mapname" => status.map = value.to_string(),
            "g_gametype" => status.gametype = value.to_string(),
            _ => {}
        }
    }

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_is_bit_exact() {
        assert_eq!(STATUS_PROBE, &[0xff, 0xff, 0xff, 0xff, b'g', b'e', b't', b's', b't', b'a', b't', b'u', b's'][..]);
    }

    #[test]
    fn parses_captured_response() {
        let payload = b"statusResponse\n\\sv_maxclients\\16\\mapname\\dm1\\g_gametype\\0\nplayer1\nplayer2\n";
        let status = parse_status_response(payload).unwrap();
        assert_eq!(
            status,
            ServerStatus {
                players: 1,
                max_players: 16,
                map: "dm1".to_string(),
                gametype: "0".to_string(),
            }
        );
    }

    #[test]
    fn empty_player_section_yields_minus_one() {
        let payload = b"statusResponse\n\\mapname\\dm2\n";
        let status = parse_status_response(payload).unwrap();
        assert_eq!(status.players, -1);
        assert_eq!(status.map, "dm2");
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let payload = b"statusResponse\n\\hostname\\My Server\nplayer1\n";
        let status = parse_status_response(payload).unwrap();
        assert_eq!(status.max_players, 32);
        assert_eq!(status.map, "unknown");
        assert_eq!(status.gametype, "unknown");
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let payload =
            b"statusResponse\n\\protocol\\68\\mapname\\q3dm17\\sv_privateClients\\2\nbot\n";
        let status = parse_status_response(payload).unwrap();
        assert_eq!(status.map, "q3dm17");
        assert_eq!(status.max_players, 32);
    }

    #[test]
    fn unparseable_maxclients_keeps_default() {
        let payload = b"statusResponse\n\\sv_maxclients\\lots\nplayer1\n";
        let status = parse_status_response(payload).unwrap();
        assert_eq!(status.max_players, 32);
    }

    #[test]
    fn response_without_newline_is_rejected() {
        let err = parse_status_response(b"disconnect").unwrap_err();
        assert!(matches!(err, QueryError::Parse(_)));
    }
}
