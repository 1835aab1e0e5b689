use crate::AppState;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use switchboard_core::{ClientEvent, ConnectionId, ServerEvent};
use tokio::sync::mpsc;
use tracing::{info, warn};

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = ConnectionId::new();
    info!("New WebSocket connection: {}", connection_id);

    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = mpsc::unbounded_channel();

    state.signaling.add_peer(connection_id, tx);
    state.signaling.send_signal(
        connection_id,
        &ServerEvent::Welcome {
            connection_id,
            ice_servers: state.signaling.get_ice_servers(),
        },
    );

    let mut send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(msg).await.is_err() {
                break;
            }
        }
    });

    let mut recv_task = tokio::spawn({
        let state = state.clone();

        async move {
            while let Some(Ok(msg)) = receiver.next().await {
                match msg {
                    Message::Text(text) => match serde_json::from_str::<ClientEvent>(&text) {
                        Ok(event) => state.router.handle_event(connection_id, event).await,
                        Err(e) => warn!("Invalid event from {}: {}", connection_id, e),
                    },
                    Message::Close(_) => break,
                    _ => {}
                }
            }
        }
    });

    tokio::select! {
        _ = (&mut send_task) => recv_task.abort(),
        _ = (&mut recv_task) => send_task.abort(),
    };

    // Registry first, so the id is gone everywhere before the transport forgets it.
    state.router.handle_disconnect(connection_id).await;
    state.signaling.remove_peer(&connection_id);
    info!("WebSocket disconnected: {}", connection_id);
}
