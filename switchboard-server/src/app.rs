use crate::AppState;
use crate::api::{health, room_info, service_info};
use crate::error::ServeError;
use crate::signaling::ws_handler;
use axum::Router;
use axum::routing::get;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(service_info))
        .route("/health", get(health))
        .route("/rooms/{room_id}", get(room_info))
        .route("/ws", get(ws_handler))
        .layer(cors)
        .with_state(state)
}

pub async fn bind(addr: SocketAddr) -> Result<TcpListener, ServeError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })
}

pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Result<(), ServeError> {
    if let Ok(addr) = listener.local_addr() {
        info!("Signaling server listening on http://{}", addr);
    }

    axum::serve(listener, app(state)).await?;
    Ok(())
}
