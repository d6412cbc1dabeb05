// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use parking_lot::RwLock;
use tracing::{info, warn};

use crate::domain::rooms::models::Room;
use crate::domain::rooms::repos::{ConnectedRoomsRepository, RoomAlreadyExistsError};
use crate::domain::shared::models::RoomId;

/// The registry of all rooms we are currently in.
#[derive(Debug, Default)]
pub struct RoomManager {
    rooms: RwLock<HashMap<RoomId, Room>>,
}

impl RoomManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `room`. Returns false, keeping the existing room, if a room with the same id is
    /// already registered.
    pub fn add_room(&self, room: Room) -> bool {
        self.set(room).is_ok()
    }

    pub fn get_room(&self, room_id: &RoomId) -> Option<Room> {
        self.get(room_id)
    }

    pub fn get_all_rooms(&self) -> Vec<Room> {
        self.get_all()
    }

    /// Removes the room. Returns false if we weren't in that room.
    pub fn leave_room(&self, room_id: &RoomId) -> bool {
        self.delete(room_id).is_some()
    }
}

impl ConnectedRoomsRepository for RoomManager {
    fn get(&self, room_id: &RoomId) -> Option<Room> {
        self.rooms.read().get(room_id).cloned()
    }

    fn get_all(&self) -> Vec<Room> {
        self.rooms.read().values().cloned().collect()
    }

    fn set(&self, room: Room) -> Result<(), RoomAlreadyExistsError> {
        let mut rooms = self.rooms.write();

        if rooms.contains_key(room.id()) {
            warn!("Room {} is already registered.", room.id());
            return Err(RoomAlreadyExistsError);
        }

        info!("Adding room {}", room.id());
        rooms.insert(room.id().clone(), room);
        Ok(())
    }

    fn delete(&self, room_id: &RoomId) -> Option<Room> {
        let room = self.rooms.write().remove(room_id);
        match room {
            Some(_) => info!("Removed room {room_id}"),
            None => warn!("Cannot leave room {room_id}. It is not registered."),
        }
        room
    }
}
