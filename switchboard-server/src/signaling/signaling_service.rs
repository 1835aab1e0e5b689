use crate::signaling::SignalingOutput;
use async_trait::async_trait;
use axum::extract::ws::{Message, Utf8Bytes};
use dashmap::DashMap;
use std::sync::Arc;
use switchboard_core::{ConnectionId, IceServerConfig, ServerEvent};
use tokio::sync::mpsc;
use tracing::{error, warn};

struct SignalingInner {
    peers: DashMap<ConnectionId, mpsc::UnboundedSender<Message>>,
    ice_servers: Vec<IceServerConfig>,
}

/// WebSocket side of the relay: one outbound channel per live connection.
#[derive(Clone)]
pub struct SignalingService {
    inner: Arc<SignalingInner>,
}

impl SignalingService {
    pub fn new(ice_servers: Vec<IceServerConfig>) -> Self {
        Self {
            inner: Arc::new(SignalingInner {
                peers: DashMap::new(),
                ice_servers,
            }),
        }
    }

    pub fn get_ice_servers(&self) -> Vec<IceServerConfig> {
        self.inner.ice_servers.clone()
    }

    pub fn add_peer(&self, connection_id: ConnectionId, tx: mpsc::UnboundedSender<Message>) {
        self.inner.peers.insert(connection_id, tx);
    }

    pub fn remove_peer(&self, connection_id: &ConnectionId) {
        self.inner.peers.remove(connection_id);
    }

    pub fn is_connected(&self, connection_id: &ConnectionId) -> bool {
        self.inner.peers.contains_key(connection_id)
    }

    pub fn send_signal(&self, connection_id: ConnectionId, event: &ServerEvent) {
        match serde_json::to_string(event) {
            Ok(json) => self.send_text(connection_id, Message::Text(json.into())),
            Err(e) => error!("Failed to serialize signal message: {}", e),
        }
    }

    fn send_text(&self, connection_id: ConnectionId, msg: Message) {
        if let Some(peer) = self.inner.peers.get(&connection_id) {
            if let Err(e) = peer.send(msg) {
                error!(
                    "Failed to send WS message to {}: {:?}",
                    connection_id, e
                );
            }
        } else {
            warn!(
                "Attempted to send signal to disconnected connection {}",
                connection_id
            );
        }
    }
}

#[async_trait]
impl SignalingOutput for SignalingService {
    async fn send(&self, connection_id: ConnectionId, event: ServerEvent) {
        self.send_signal(connection_id, &event);
    }

    async fn broadcast(&self, targets: &[ConnectionId], event: ServerEvent) {
        if targets.is_empty() {
            return;
        }

        let json = match serde_json::to_string(&event) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize signal message: {}", e);
                return;
            }
        };

        let text = Utf8Bytes::from(json);
        for target in targets {
            self.send_text(*target, Message::Text(text.clone()));
        }
    }
}
