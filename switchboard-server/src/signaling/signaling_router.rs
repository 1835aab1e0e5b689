use crate::room::Registry;
use crate::signaling::SignalingOutput;
use std::sync::Arc;
use switchboard_core::{ClientEvent, ConnectionId, ServerEvent};
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Dispatches inbound client events against the [`Registry`] and emits the
/// resulting events through a [`SignalingOutput`].
///
/// Holds no per-connection state of its own. Errors never escape: a bad event
/// from one connection is dropped without touching anybody else.
///
/// Membership changes and the events they cause are emitted under one lock,
/// so every connection observes joins and leaves in registry order.
#[derive(Clone)]
pub struct SignalingRouter {
    registry: Arc<Registry>,
    signaling: Arc<dyn SignalingOutput>,
    membership: Arc<Mutex<()>>,
}

impl SignalingRouter {
    pub fn new(registry: Arc<Registry>, signaling: Arc<dyn SignalingOutput>) -> Self {
        Self {
            registry,
            signaling,
            membership: Arc::new(Mutex::new(())),
        }
    }

    pub async fn handle_event(&self, from: ConnectionId, event: ClientEvent) {
        let kind = event.kind();

        match event {
            ClientEvent::JoinRoom { room_id, user_id } => {
                self.join_room(from, user_id, room_id).await;
            }

            ClientEvent::Offer {
                offer,
                target_connection_id,
            } => {
                self.relay(from, target_connection_id, kind, || ServerEvent::Offer {
                    offer,
                    sender_connection_id: from,
                })
                .await;
            }

            ClientEvent::Answer {
                answer,
                target_connection_id,
            } => {
                self.relay(from, target_connection_id, kind, || ServerEvent::Answer {
                    answer,
                    sender_connection_id: from,
                })
                .await;
            }

            ClientEvent::IceCandidate {
                candidate,
                target_connection_id,
            } => {
                self.relay(from, target_connection_id, kind, || {
                    ServerEvent::IceCandidate {
                        candidate,
                        sender_connection_id: from,
                    }
                })
                .await;
            }

            ClientEvent::InitiateCall {
                target_connection_id,
            } => {
                self.relay(from, target_connection_id, kind, || {
                    ServerEvent::IncomingCall {
                        caller_connection_id: from,
                    }
                })
                .await;
            }

            ClientEvent::CallResponse {
                accepted,
                target_connection_id,
            } => {
                self.relay(from, target_connection_id, kind, || {
                    ServerEvent::CallResponse {
                        accepted,
                        responder_connection_id: from,
                    }
                })
                .await;
            }
        }
    }

    /// Must run exactly once per connection, after its last inbound event.
    pub async fn handle_disconnect(&self, connection_id: ConnectionId) {
        let _membership = self.membership.lock().await;

        let Some(departure) = self.registry.leave(&connection_id) else {
            return;
        };

        info!(
            "Connection {} left room {}",
            connection_id, departure.room_id
        );

        self.signaling
            .broadcast(
                &departure.remaining,
                ServerEvent::UserLeft { connection_id },
            )
            .await;
    }

    async fn join_room(&self, connection_id: ConnectionId, user_id: String, room_id: String) {
        let _membership = self.membership.lock().await;

        let join = self
            .registry
            .join(connection_id, user_id.clone(), room_id.clone());

        info!("User {} joined room {} as {}", user_id, room_id, connection_id);

        if let Some(previous) = join.previous {
            debug!(
                "Connection {} moved out of room {}",
                connection_id, previous.room_id
            );
            self.signaling
                .broadcast(&previous.remaining, ServerEvent::UserLeft { connection_id })
                .await;
        }

        let others: Vec<ConnectionId> = join.existing.iter().map(|m| m.connection_id).collect();
        self.signaling
            .broadcast(
                &others,
                ServerEvent::UserJoined {
                    user_id,
                    connection_id,
                },
            )
            .await;

        self.signaling
            .send(connection_id, ServerEvent::RoomUsers(join.existing))
            .await;
    }

    async fn relay<F>(&self, from: ConnectionId, target: Option<ConnectionId>, kind: &str, event: F)
    where
        F: FnOnce() -> ServerEvent,
    {
        let Some(target) = target else {
            debug!("Dropping {} from {}: no target connection", kind, from);
            return;
        };

        if target == from {
            debug!("Dropping {} from {}: target is the sender", kind, from);
            return;
        }

        debug!("Forwarding {} from {} to {}", kind, from, target);
        self.signaling.send(target, event()).await;
    }
}
