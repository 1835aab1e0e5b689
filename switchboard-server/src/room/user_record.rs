use switchboard_core::{ConnectionId, RoomMember};

/// Запись о пользователе, привязанная к соединению после `join-room`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub user_id: String,
    pub room_id: String,
}

/// Result of removing a connection from its room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Departure {
    pub room_id: String,
    /// Members still in the room after the removal. Empty when the room was dropped.
    pub remaining: Vec<ConnectionId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Join {
    /// Set when the connection was already in a room and had to leave it first.
    pub previous: Option<Departure>,
    /// Members that were in the room before this join, caller excluded.
    pub existing: Vec<RoomMember>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryStats {
    pub connected_users: usize,
    pub active_rooms: usize,
}
