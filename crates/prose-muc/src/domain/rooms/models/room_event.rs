// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::rooms::models::{DelayedMessage, Occupant, RoomDiscoInfo};

/// Why an occupant was removed from a room by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalReason {
    Banned,
    Kicked,
    AffiliationChanged,
    MembersOnly,
    ServiceShutdown,
}

#[derive(Debug, Clone)]
pub enum RoomEvent {
    /// Our own occupant entered the room.
    SelfJoined(Occupant),
    /// Our own occupant's affiliation, role or status changed.
    SelfUpdated(Occupant),
    /// We left the room.
    SelfLeft(Occupant),
    /// We were removed from the room by the service.
    SelfRemoved {
        occupant: Occupant,
        reason: RemovalReason,
    },
    OccupantJoined(Occupant),
    OccupantUpdated(Occupant),
    OccupantLeft(Occupant),
    OccupantRemoved {
        occupant: Occupant,
        reason: RemovalReason,
    },
    NicknameChanged {
        occupant: Occupant,
        old_nickname: String,
    },
    /// The subject as announced when joining the room.
    SubjectReceived { subject: String },
    /// The subject was changed while we were in the room.
    SubjectChanged {
        subject: String,
        nickname: Option<String>,
    },
    HistoryMessageAdded(DelayedMessage),
    LoggingEnabled,
    LoggingDisabled,
    ConfigurationChanged,
    PropertiesUpdated(RoomDiscoInfo),
}
