use crate::model::connection::ConnectionId;
use crate::model::room::RoomMember;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IceServerConfig {
    pub urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credential: Option<String>,
}

/// Сообщения от клиента. Формат кадра: `{"event": "...", "data": {...}}`.
///
/// SDP и ICE полезная нагрузка не интерпретируется сервером и хранится как
/// произвольный JSON. Отсутствующий `targetConnectionId` не ломает разбор:
/// такое событие роутер просто пропускает.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ClientEvent {
    JoinRoom {
        room_id: String,
        user_id: String,
    },
    Offer {
        #[serde(default)]
        offer: Value,
        #[serde(default)]
        target_connection_id: Option<ConnectionId>,
    },
    Answer {
        #[serde(default)]
        answer: Value,
        #[serde(default)]
        target_connection_id: Option<ConnectionId>,
    },
    IceCandidate {
        #[serde(default)]
        candidate: Value,
        #[serde(default)]
        target_connection_id: Option<ConnectionId>,
    },
    InitiateCall {
        #[serde(default)]
        target_connection_id: Option<ConnectionId>,
    },
    CallResponse {
        #[serde(default)]
        accepted: bool,
        #[serde(default)]
        target_connection_id: Option<ConnectionId>,
    },
}

impl ClientEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            ClientEvent::JoinRoom { .. } => "join-room",
            ClientEvent::Offer { .. } => "offer",
            ClientEvent::Answer { .. } => "answer",
            ClientEvent::IceCandidate { .. } => "ice-candidate",
            ClientEvent::InitiateCall { .. } => "initiate-call",
            ClientEvent::CallResponse { .. } => "call-response",
        }
    }
}

/// Сообщения от сервера клиенту, в том же конверте что и [`ClientEvent`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "event",
    content = "data",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ServerEvent {
    Welcome {
        connection_id: ConnectionId,
        ice_servers: Vec<IceServerConfig>,
    },
    RoomUsers(Vec<RoomMember>),
    UserJoined {
        user_id: String,
        connection_id: ConnectionId,
    },
    UserLeft {
        connection_id: ConnectionId,
    },
    Offer {
        offer: Value,
        sender_connection_id: ConnectionId,
    },
    Answer {
        answer: Value,
        sender_connection_id: ConnectionId,
    },
    IceCandidate {
        candidate: Value,
        sender_connection_id: ConnectionId,
    },
    IncomingCall {
        caller_connection_id: ConnectionId,
    },
    CallResponse {
        accepted: bool,
        responder_connection_id: ConnectionId,
    },
}
