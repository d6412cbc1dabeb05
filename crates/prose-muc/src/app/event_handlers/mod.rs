// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use rooms_event_handler::RoomsEventHandler;
pub use server_event::ServerEvent;

use crate::domain::rooms::models::RoomError;

mod rooms_event_handler;
mod server_event;

/// `ServerEventHandler` is a trait representing a handler for events received from the server.
///
/// If the handler returns `None`, the event has been consumed and no further processing should
/// be done. If it returns `Some(event)`, the event is not consumed and should be passed to the
/// next handler.
pub trait ServerEventHandler: Send + Sync {
    fn name(&self) -> &'static str;
    fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>, RoomError>;
}
