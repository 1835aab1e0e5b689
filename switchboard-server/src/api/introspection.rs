use crate::AppState;
use axum::Json;
use axum::extract::{Path, State};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use switchboard_core::RoomMember;

#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: &'static str,
    pub status: &'static str,
    pub version: &'static str,
    pub endpoints: Endpoints,
}

#[derive(Debug, Serialize)]
pub struct Endpoints {
    pub health: &'static str,
    pub rooms: &'static str,
    pub ws: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub connected_users: usize,
    pub active_rooms: usize,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct RoomResponse {
    pub users: Vec<RoomMember>,
    pub count: usize,
}

pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: "WebRTC Signaling Server",
        status: "running",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: Endpoints {
            health: "/health",
            rooms: "/rooms/{room_id}",
            ws: "/ws",
        },
    })
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let stats = state.registry.stats();

    Json(HealthResponse {
        status: "healthy",
        connected_users: stats.connected_users,
        active_rooms: stats.active_rooms,
        timestamp: Utc::now(),
    })
}

/// Unknown rooms answer with an empty list, not 404.
pub async fn room_info(
    Path(room_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<RoomResponse> {
    let users = state.registry.room_members(&room_id);

    Json(RoomResponse {
        count: users.len(),
        users,
    })
}
