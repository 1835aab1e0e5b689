use serde_json::json;
use switchboard_core::{ClientEvent, RoomMember, ServerEvent};
use switchboard_server::ServerConfig;

use crate::integration::init_tracing;
use crate::utils::TestServer;

#[tokio::test]
async fn test_peer_session() {
    init_tracing();

    let server = TestServer::start(ServerConfig::default())
        .await
        .expect("Failed to start server");

    let mut alice = server.connect().await.expect("alice failed to connect");
    let mut bob = server.connect().await.expect("bob failed to connect");
    let (a, b) = (alice.connection_id, bob.connection_id);

    alice
        .send(&ClientEvent::JoinRoom {
            room_id: "r1".into(),
            user_id: "alice".into(),
        })
        .await
        .unwrap();
    assert_eq!(alice.recv().await.unwrap(), ServerEvent::RoomUsers(vec![]));

    bob.send(&ClientEvent::JoinRoom {
        room_id: "r1".into(),
        user_id: "bob".into(),
    })
    .await
    .unwrap();
    assert_eq!(
        bob.recv().await.unwrap(),
        ServerEvent::RoomUsers(vec![RoomMember::new(a, "alice")])
    );
    assert_eq!(
        alice.recv().await.unwrap(),
        ServerEvent::UserJoined {
            user_id: "bob".into(),
            connection_id: b,
        }
    );

    let offer = json!({ "type": "offer", "sdp": "v=0\r\n" });
    alice
        .send(&ClientEvent::Offer {
            offer: offer.clone(),
            target_connection_id: Some(b),
        })
        .await
        .unwrap();
    assert_eq!(
        bob.recv().await.unwrap(),
        ServerEvent::Offer {
            offer,
            sender_connection_id: a,
        }
    );
    bob.expect_silence().await.unwrap();

    let answer = json!({ "type": "answer", "sdp": "v=0\r\n" });
    bob.send(&ClientEvent::Answer {
        answer: answer.clone(),
        target_connection_id: Some(a),
    })
    .await
    .unwrap();
    assert_eq!(
        alice.recv().await.unwrap(),
        ServerEvent::Answer {
            answer,
            sender_connection_id: b,
        }
    );

    bob.close().await.expect("Failed to close bob");
    assert_eq!(
        alice.recv().await.unwrap(),
        ServerEvent::UserLeft { connection_id: b }
    );
    server.wait_for_users(1).await.unwrap();

    alice.close().await.expect("Failed to close alice");
    server.wait_for_users(0).await.unwrap();
    assert!(server.state.registry.room_members("r1").is_empty());
    assert!(server.state.registry.room_ids().is_empty());
}
