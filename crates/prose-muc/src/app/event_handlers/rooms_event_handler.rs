// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::Element;
use tracing::{debug, info, warn};

use crate::app::deps::DynConnectedRoomsRepository;
use crate::app::event_handlers::{ServerEvent, ServerEventHandler};
use crate::domain::rooms::models::{
    DelayedMessage, MessageEvent, MucStatus, MucStatuses, PresenceEvent, PresenceType,
    RemovalReason, Room, RoomDiscoInfo, RoomError, RoomEvent,
};
use crate::domain::shared::models::RoomId;

pub struct RoomsEventHandler {
    connected_rooms_repo: DynConnectedRoomsRepository,
}

impl ServerEventHandler for RoomsEventHandler {
    fn name(&self) -> &'static str {
        "rooms"
    }

    fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>, RoomError> {
        match event {
            ServerEvent::Presence(presence) => self.handle_presence(presence)?,
            ServerEvent::Message(message) => self.handle_message(message)?,
            ServerEvent::DiscoInfo { room_id, info } => {
                let Some(room) = self.connected_rooms_repo.get(&room_id) else {
                    return Ok(Some(ServerEvent::DiscoInfo { room_id, info }));
                };
                self.handle_disco_info(&room, info);
            }
        }
        Ok(None)
    }
}

impl RoomsEventHandler {
    pub fn new(connected_rooms_repo: DynConnectedRoomsRepository) -> Self {
        Self {
            connected_rooms_repo,
        }
    }

    /// Parses `stanza` and routes it into the matching room. Returns `false` if the stanza
    /// wasn't consumed.
    pub fn handle_stanza(&self, stanza: &Element) -> Result<bool, RoomError> {
        let Some(event) = ServerEvent::from_stanza(stanza)? else {
            return Ok(false);
        };
        Ok(self.handle_event(event)?.is_none())
    }
}

impl RoomsEventHandler {
    fn get_room(&self, room_id: &RoomId) -> Result<Room, RoomError> {
        self.connected_rooms_repo.get(room_id).ok_or_else(|| {
            warn!("Received event for unknown room {}", room_id);
            RoomError::RoomNotFound(room_id.clone())
        })
    }

    fn handle_presence(&self, presence: PresenceEvent) -> Result<(), RoomError> {
        let room = self.get_room(&RoomId::from(&presence.from))?;
        let is_self = is_self_presence(&room, &presence);

        info!(
            "Received presence from {} in {} (self: {}).",
            presence.nickname(),
            room.id(),
            is_self
        );

        match presence.r#type.parse::<PresenceType>()? {
            PresenceType::Unavailable => {
                self.handle_unavailable_presence(&room, &presence, is_self)?
            }
            PresenceType::Available => self.handle_available_presence(&room, &presence, is_self)?,
        }

        if presence
            .status_codes
            .contains(&[MucStatus::ConfigurationChanged])
        {
            room.publish(RoomEvent::ConfigurationChanged);
        }

        Ok(())
    }

    fn handle_unavailable_presence(
        &self,
        room: &Room,
        presence: &PresenceEvent,
        is_self: bool,
    ) -> Result<(), RoomError> {
        let nickname = presence.nickname();

        if presence.status_codes.contains(&[MucStatus::NewNickname]) {
            let Some(new_nickname) = presence.new_nickname.as_deref() else {
                warn!("Ignoring nickname change of {} without a new nickname.", nickname);
                return Ok(());
            };
            room.roster().update_nickname(nickname, new_nickname)?;
            let occupant = room
                .roster()
                .get_occupant(new_nickname)
                .ok_or_else(|| RoomError::UnknownOccupant(new_nickname.to_string()))?;
            room.publish(RoomEvent::NicknameChanged {
                occupant,
                old_nickname: nickname.to_string(),
            });
            return Ok(());
        }

        let update = room.roster().update_presence(presence)?;
        let reason = removal_reason(&presence.status_codes);

        if let Some(reason) = reason {
            debug!("{} was removed from {} ({:?}).", nickname, room.id(), reason);
        }

        let event = match (is_self, reason) {
            (true, Some(reason)) => RoomEvent::SelfRemoved {
                occupant: update.occupant,
                reason,
            },
            (true, None) => RoomEvent::SelfLeft(update.occupant),
            (false, Some(reason)) => RoomEvent::OccupantRemoved {
                occupant: update.occupant,
                reason,
            },
            (false, None) => RoomEvent::OccupantLeft(update.occupant),
        };
        room.publish(event);

        Ok(())
    }

    fn handle_available_presence(
        &self,
        room: &Room,
        presence: &PresenceEvent,
        is_self: bool,
    ) -> Result<(), RoomError> {
        let update = room.roster().update_presence(presence)?;

        if !is_self {
            room.publish(if update.joined {
                RoomEvent::OccupantJoined(update.occupant)
            } else {
                RoomEvent::OccupantUpdated(update.occupant)
            });
            return Ok(());
        }

        if update.joined {
            room.add_self_occupant(update.occupant.clone());
            room.publish(RoomEvent::SelfJoined(update.occupant));
        } else {
            room.publish(RoomEvent::SelfUpdated(update.occupant));
        }

        if presence
            .status_codes
            .contains(&[MucStatus::NicknameAssigned])
        {
            debug!("The service assigned the nickname {}.", presence.nickname());
        }

        publish_logging_changes(room, &presence.status_codes);
        Ok(())
    }

    fn handle_message(&self, message: MessageEvent) -> Result<(), RoomError> {
        let room = self.get_room(&message.room_id())?;
        let nickname = message.nickname().map(ToString::to_string);

        if let Some(subject) = message.subject {
            let had_subject = room.update_subject(subject.clone());
            info!("Received subject in {}.", room.id());
            room.publish(if had_subject {
                RoomEvent::SubjectChanged { subject, nickname }
            } else {
                RoomEvent::SubjectReceived { subject }
            });
        } else if let (Some(body), Some(timestamp), Some(nickname)) =
            (message.body, message.delay, nickname)
        {
            if room.add_history_message(nickname.clone(), body.clone(), timestamp) {
                room.publish(RoomEvent::HistoryMessageAdded(DelayedMessage {
                    nickname,
                    message: body,
                    timestamp,
                }));
            } else {
                debug!("Dropped out-of-order history message in {}.", room.id());
            }
        }

        if message
            .status_codes
            .contains(&[MucStatus::ConfigurationChanged])
        {
            room.publish(RoomEvent::ConfigurationChanged);
        }
        publish_logging_changes(&room, &message.status_codes);

        Ok(())
    }

    fn handle_disco_info(&self, room: &Room, info: RoomDiscoInfo) {
        info!("Updating properties of {}.", room.id());
        room.update_properties(info.clone());
        room.publish(RoomEvent::PropertiesUpdated(info));
    }
}

fn is_self_presence(room: &Room, presence: &PresenceEvent) -> bool {
    if presence.status_codes.contains(&[MucStatus::SelfPresence]) {
        return true;
    }
    room.self_occupant()
        .is_some_and(|occupant| occupant.nickname() == presence.nickname())
}

fn removal_reason(status_codes: &MucStatuses) -> Option<RemovalReason> {
    if status_codes.contains(&[MucStatus::Banned]) {
        Some(RemovalReason::Banned)
    } else if status_codes.contains(&[MucStatus::Kicked]) {
        Some(RemovalReason::Kicked)
    } else if status_codes.contains(&[MucStatus::RemovedBecauseAffiliationChanged]) {
        Some(RemovalReason::AffiliationChanged)
    } else if status_codes.contains(&[MucStatus::RemovedBecauseNotMember]) {
        Some(RemovalReason::MembersOnly)
    } else if status_codes.contains(&[MucStatus::RemovedBecauseShutdown]) {
        Some(RemovalReason::ServiceShutdown)
    } else {
        None
    }
}

fn publish_logging_changes(room: &Room, status_codes: &MucStatuses) {
    if status_codes.contains(&[MucStatus::RoomLoggingEnabled]) {
        room.publish(RoomEvent::LoggingEnabled);
    }
    if status_codes.contains(&[MucStatus::RoomLoggingDisabled]) {
        room.publish(RoomEvent::LoggingDisabled);
    }
}
