// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connected_rooms_repository::{ConnectedRoomsRepository, RoomAlreadyExistsError};

mod connected_rooms_repository;

#[cfg(any(test, feature = "test"))]
pub mod mocks {
    pub use super::connected_rooms_repository::MockConnectedRoomsRepository;
}
