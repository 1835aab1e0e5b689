use crate::model::connection::ConnectionId;
use serde::{Deserialize, Serialize};

/// Участник комнаты: соединение и пользователь, от имени которого оно вошло.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomMember {
    pub connection_id: ConnectionId,
    pub user_id: String,
}

impl RoomMember {
    pub fn new(connection_id: ConnectionId, user_id: impl Into<String>) -> Self {
        Self {
            connection_id,
            user_id: user_id.into(),
        }
    }
}
