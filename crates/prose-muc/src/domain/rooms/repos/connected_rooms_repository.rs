// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::rooms::models::Room;
use crate::domain::shared::models::RoomId;

#[derive(Debug, PartialEq)]
pub struct RoomAlreadyExistsError;

/// The rooms we are currently connected to.
#[cfg_attr(any(test, feature = "test"), mockall::automock)]
pub trait ConnectedRoomsRepository: Send + Sync {
    fn get(&self, room_id: &RoomId) -> Option<Room>;
    fn get_all(&self) -> Vec<Room>;

    /// Fails if a room with the same id is already connected. The existing room is kept.
    fn set(&self, room: Room) -> Result<(), RoomAlreadyExistsError>;

    /// Deletes the room identified by `room_id` from the repository and returns the removed room.
    fn delete(&self, room_id: &RoomId) -> Option<Room>;
}
