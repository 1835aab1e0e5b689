use crate::room::{Departure, Join, RegistryStats, UserRecord};
use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};
use switchboard_core::{ConnectionId, RoomMember};
use tracing::{debug, info};

#[derive(Default)]
struct RegistryInner {
    users: HashMap<ConnectionId, UserRecord>,
    rooms: HashMap<String, HashSet<ConnectionId>>,
}

/// Реестр соединений, пользователей и комнат.
///
/// Обе карты живут под одной блокировкой, поэтому каждая операция видит и
/// оставляет после себя согласованное состояние: участник комнаты всегда имеет
/// запись пользователя с тем же `room_id`, а пустых комнат не бывает.
/// Блокировка никогда не удерживается через `.await`.
#[derive(Default)]
pub struct Registry {
    inner: Mutex<RegistryInner>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, RegistryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records `user_id` for `connection_id` and adds it to `room_id`.
    ///
    /// A connection that is already in a room leaves it first, so a second
    /// join moves the connection instead of leaving a stale member behind.
    pub fn join(
        &self,
        connection_id: ConnectionId,
        user_id: impl Into<String>,
        room_id: impl Into<String>,
    ) -> Join {
        let user_id = user_id.into();
        let room_id = room_id.into();
        let mut inner = self.lock();

        let previous = inner.remove(&connection_id);

        let members = inner.rooms.entry(room_id.clone()).or_insert_with(|| {
            info!("Creating new room: {}", room_id);
            HashSet::new()
        });
        let others: Vec<ConnectionId> = members.iter().copied().collect();
        members.insert(connection_id);

        let existing = others
            .into_iter()
            .filter_map(|id| {
                inner
                    .users
                    .get(&id)
                    .map(|user| RoomMember::new(id, user.user_id.clone()))
            })
            .collect();

        inner.users.insert(connection_id, UserRecord { user_id, room_id });

        Join { previous, existing }
    }

    pub fn lookup_user(&self, connection_id: &ConnectionId) -> Option<UserRecord> {
        self.lock().users.get(connection_id).cloned()
    }

    pub fn room_members(&self, room_id: &str) -> Vec<RoomMember> {
        let inner = self.lock();
        let Some(members) = inner.rooms.get(room_id) else {
            return Vec::new();
        };

        members
            .iter()
            .filter_map(|id| {
                inner
                    .users
                    .get(id)
                    .map(|user| RoomMember::new(*id, user.user_id.clone()))
            })
            .collect()
    }

    /// Removes the connection from its room. Returns `None` if it never joined.
    pub fn leave(&self, connection_id: &ConnectionId) -> Option<Departure> {
        self.lock().remove(connection_id)
    }

    pub fn stats(&self) -> RegistryStats {
        let inner = self.lock();
        RegistryStats {
            connected_users: inner.users.len(),
            active_rooms: inner.rooms.len(),
        }
    }

    pub fn room_ids(&self) -> Vec<String> {
        self.lock().rooms.keys().cloned().collect()
    }
}

impl RegistryInner {
    fn remove(&mut self, connection_id: &ConnectionId) -> Option<Departure> {
        let user = self.users.remove(connection_id)?;

        let remaining = match self.rooms.get_mut(&user.room_id) {
            Some(members) => {
                members.remove(connection_id);
                members.iter().copied().collect()
            }
            None => Vec::new(),
        };

        if remaining.is_empty() && self.rooms.remove(&user.room_id).is_some() {
            debug!("Room {} is empty, removing", user.room_id);
        }

        Some(Departure {
            room_id: user.room_id,
            remaining,
        })
    }
}
