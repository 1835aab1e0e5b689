use serde_json::json;
use std::sync::Arc;
use switchboard_core::{ClientEvent, ConnectionId, ServerEvent};
use switchboard_server::{Registry, SignalingRouter, SignalingService};
use tokio::sync::mpsc;

use crate::integration::init_tracing;
use crate::utils::join;

#[tokio::test]
async fn test_relay_to_offline_target() {
    init_tracing();

    let registry = Arc::new(Registry::new());
    let service = SignalingService::new(Vec::new());
    let router = SignalingRouter::new(registry.clone(), Arc::new(service.clone()));

    let a = ConnectionId::new();
    let b = ConnectionId::new();
    let (tx_a, mut rx_a) = mpsc::unbounded_channel();
    let (tx_b, _rx_b) = mpsc::unbounded_channel();
    service.add_peer(a, tx_a);
    service.add_peer(b, tx_b);

    join(&router, a, "alice", "r1").await;
    join(&router, b, "bob", "r1").await;

    // B goes away before A's offer is processed.
    router.handle_disconnect(b).await;
    service.remove_peer(&b);

    router
        .handle_event(
            a,
            ClientEvent::Offer {
                offer: json!({ "sdp": "v=0" }),
                target_connection_id: Some(b),
            },
        )
        .await;

    // A's session is untouched and still receives events.
    assert!(service.is_connected(&a));
    assert_eq!(
        registry.lookup_user(&a).map(|u| u.room_id),
        Some("r1".to_string())
    );

    let mut received = Vec::new();
    while let Ok(msg) = rx_a.try_recv() {
        let axum::extract::ws::Message::Text(text) = msg else {
            continue;
        };
        received.push(serde_json::from_str::<ServerEvent>(&text).unwrap());
    }

    assert_eq!(
        received,
        vec![
            ServerEvent::RoomUsers(vec![]),
            ServerEvent::UserJoined {
                user_id: "bob".into(),
                connection_id: b,
            },
            ServerEvent::UserLeft { connection_id: b },
        ]
    );
}
