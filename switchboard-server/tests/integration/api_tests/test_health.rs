use chrono::DateTime;
use std::sync::Arc;
use switchboard_core::ConnectionId;
use switchboard_server::{AppState, ServerConfig};

use super::get_json;
use crate::integration::init_tracing;
use crate::utils::join;

#[tokio::test]
async fn test_health_tracks_registry() {
    init_tracing();

    let state = Arc::new(AppState::new(ServerConfig::default()));

    let health = get_json(&state, "/health").await;
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["connectedUsers"], 0);
    assert_eq!(health["activeRooms"], 0);
    let timestamp = health["timestamp"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(timestamp).is_ok());

    let a = ConnectionId::new();
    let b = ConnectionId::new();
    let c = ConnectionId::new();
    join(&state.router, a, "alice", "r1").await;
    join(&state.router, b, "bob", "r1").await;
    join(&state.router, c, "carol", "r2").await;

    let health = get_json(&state, "/health").await;
    assert_eq!(health["connectedUsers"], 3);
    assert_eq!(health["activeRooms"], 2);

    state.router.handle_disconnect(c).await;
    let health = get_json(&state, "/health").await;
    assert_eq!(health["connectedUsers"], 2);
    assert_eq!(health["activeRooms"], 1);
}

#[tokio::test]
async fn test_service_info_lists_endpoints() {
    init_tracing();

    let state = Arc::new(AppState::new(ServerConfig::default()));
    let info = get_json(&state, "/").await;

    assert_eq!(info["status"], "running");
    assert_eq!(info["endpoints"]["health"], "/health");
    assert_eq!(info["endpoints"]["ws"], "/ws");
}
