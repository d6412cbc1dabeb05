// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::deps::{AppConfig, HistoryTimeZone, RoomConfigDefaults};
pub use app::event_handlers::{RoomsEventHandler, ServerEvent, ServerEventHandler};
pub use domain::rooms::models::{
    Affiliation, Occupant, PresenceEvent, Role, Room, RoomConfigForm, RoomError, RoomEvent,
    RoomRoster,
};
pub use domain::rooms::repos::ConnectedRoomsRepository;
pub use domain::shared::models::RoomId;
pub use infra::rooms::RoomManager;

pub mod app;
pub mod domain;
pub mod infra;
pub mod test;
