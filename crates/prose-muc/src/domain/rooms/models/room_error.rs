// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::RoomId;
use crate::infra::xmpp::ParseError;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RoomError {
    #[error("No occupant with nickname '{0}' in the room.")]
    UnknownOccupant(String),
    #[error("Invalid presence type '{0}'.")]
    InvalidPresenceType(String),
    #[error("Unknown affiliation '{0}'.")]
    UnknownAffiliation(String),
    #[error("Unknown role '{0}'.")]
    UnknownRole(String),
    #[error("The nickname '{0}' is already taken in the room.")]
    NicknameConflict(String),
    #[error("Room {0} is not connected.")]
    RoomNotFound(RoomId),
    #[error(transparent)]
    JidError(#[from] jid::Error),
    #[error(transparent)]
    ParseError(#[from] ParseError),
}
