// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use itertools::Itertools;
use parking_lot::RwLock;

use crate::domain::rooms::models::{
    Affiliation, Occupant, PresenceEvent, PresenceType, Role, RoomError,
};
use crate::domain::shared::models::PresenceStatus;

const LEFT_THE_ROOM: &str = "Occupant left the room";

/// The occupants currently present in a room, keyed by nickname.
///
/// All accessors return snapshots, so callers never iterate the guarded map.
#[derive(Debug, Default)]
pub struct RoomRoster {
    occupants: RwLock<HashMap<String, Occupant>>,
}

/// The outcome of applying a presence to the roster.
#[derive(Debug, Clone)]
pub struct RosterUpdate {
    pub joined: bool,
    pub left: bool,
    pub occupant: Occupant,
}

impl RoomRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.occupants.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.read().is_empty()
    }

    pub fn get_occupant(&self, nickname: &str) -> Option<Occupant> {
        self.occupants.read().get(nickname).cloned()
    }

    /// All occupants sorted case-insensitively by nickname.
    pub fn all_occupants(&self) -> Vec<Occupant> {
        let occupants = self.occupants.read();
        occupants
            .iter()
            .sorted_by_cached_key(|(nickname, _)| (nickname.to_lowercase(), nickname.to_string()))
            .map(|(_, occupant)| occupant.clone())
            .collect()
    }

    pub fn occupants_with_role(&self, role: Role) -> Vec<Occupant> {
        self.all_occupants()
            .into_iter()
            .filter(|o| o.role() == role)
            .collect()
    }

    pub fn occupants_with_affiliation(&self, affiliation: Affiliation) -> Vec<Occupant> {
        self.all_occupants()
            .into_iter()
            .filter(|o| o.affiliation() == affiliation)
            .collect()
    }

    pub fn no_role(&self) -> Vec<Occupant> {
        self.occupants_with_role(Role::None)
    }

    pub fn visitors(&self) -> Vec<Occupant> {
        self.occupants_with_role(Role::Visitor)
    }

    pub fn participants(&self) -> Vec<Occupant> {
        self.occupants_with_role(Role::Participant)
    }

    pub fn moderators(&self) -> Vec<Occupant> {
        self.occupants_with_role(Role::Moderator)
    }

    pub fn no_affiliation(&self) -> Vec<Occupant> {
        self.occupants_with_affiliation(Affiliation::None)
    }

    pub fn banned(&self) -> Vec<Occupant> {
        self.occupants_with_affiliation(Affiliation::Outcast)
    }

    pub fn members(&self) -> Vec<Occupant> {
        self.occupants_with_affiliation(Affiliation::Member)
    }

    pub fn admins(&self) -> Vec<Occupant> {
        self.occupants_with_affiliation(Affiliation::Admin)
    }

    pub fn owners(&self) -> Vec<Occupant> {
        self.occupants_with_affiliation(Affiliation::Owner)
    }

    /// All occupants grouped by role, from `None` to `Moderator`.
    pub fn occupants_by_role(&self) -> HashMap<Role, Vec<Occupant>> {
        self.all_occupants()
            .into_iter()
            .into_group_map_by(|o| o.role())
    }

    pub fn occupants_by_affiliation(&self) -> HashMap<Affiliation, Vec<Occupant>> {
        self.all_occupants()
            .into_iter()
            .into_group_map_by(|o| o.affiliation())
    }
}

impl RoomRoster {
    /// Applies a presence of type `""` or `"unavailable"` to the roster.
    ///
    /// Nickname changes are not handled here, see `update_nickname`.
    pub fn update_presence(&self, presence: &PresenceEvent) -> Result<RosterUpdate, RoomError> {
        let presence_type = presence.r#type.parse::<PresenceType>()?;
        let affiliation = presence.affiliation.parse::<Affiliation>()?;
        let role = presence.role.parse::<Role>()?;
        let nickname = presence.nickname();

        let mut occupants = self.occupants.write();

        match presence_type {
            PresenceType::Unavailable => {
                let Some(occupant) = occupants.remove(nickname) else {
                    return Err(RoomError::UnknownOccupant(nickname.to_string()));
                };
                occupant.change_affiliation(affiliation);
                occupant.change_role_to_none();
                occupant.update_status(PresenceStatus::unavailable(LEFT_THE_ROOM));
                Ok(RosterUpdate {
                    joined: false,
                    left: true,
                    occupant,
                })
            }
            PresenceType::Available => {
                let status = PresenceStatus::new(&presence.show, &presence.status_message);

                if let Some(occupant) = occupants.get(nickname) {
                    occupant.update(presence.real_jid.clone(), affiliation, role, status);
                    return Ok(RosterUpdate {
                        joined: false,
                        left: false,
                        occupant: occupant.clone(),
                    });
                }

                let occupant = Occupant::new(
                    nickname,
                    presence.real_jid.clone(),
                    affiliation,
                    role,
                    status,
                );
                occupants.insert(nickname.to_string(), occupant.clone());
                Ok(RosterUpdate {
                    joined: true,
                    left: false,
                    occupant,
                })
            }
        }
    }

    /// Moves the occupant known as `nickname` to `new_nickname`, keeping the same `Occupant`.
    pub fn update_nickname(&self, nickname: &str, new_nickname: &str) -> Result<(), RoomError> {
        let mut occupants = self.occupants.write();

        if !occupants.contains_key(nickname) {
            return Err(RoomError::UnknownOccupant(nickname.to_string()));
        }
        if nickname == new_nickname {
            return Ok(());
        }
        if occupants.contains_key(new_nickname) {
            return Err(RoomError::NicknameConflict(new_nickname.to_string()));
        }

        let Some(occupant) = occupants.remove(nickname) else {
            return Err(RoomError::UnknownOccupant(nickname.to_string()));
        };
        occupant.set_nickname(new_nickname);
        occupants.insert(new_nickname.to_string(), occupant);
        Ok(())
    }

    /// Removes the occupant, resetting its role and marking it unavailable.
    pub fn remove_occupant(&self, nickname: &str) -> Result<Occupant, RoomError> {
        let Some(occupant) = self.occupants.write().remove(nickname) else {
            return Err(RoomError::UnknownOccupant(nickname.to_string()));
        };
        occupant.change_role_to_none();
        occupant.update_status(PresenceStatus::unavailable(LEFT_THE_ROOM));
        Ok(occupant)
    }
}
