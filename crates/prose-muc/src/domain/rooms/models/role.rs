// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::domain::rooms::models::privileges::{RolePrivilege, ROLE_PRIVILEGES};
use crate::domain::rooms::models::RoomError;

/// The session-scoped role of an occupant. Roles are ordered by capability.
#[derive(
    Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy, Default, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Not present in the room.
    #[default]
    None,
    /// Present but without voice in moderated rooms.
    Visitor,
    Participant,
    Moderator,
}

impl Role {
    pub(crate) const fn ordinal(self) -> usize {
        self as usize
    }

    pub fn can(self, privilege: RolePrivilege) -> bool {
        ROLE_PRIVILEGES[privilege as usize][self.ordinal()]
    }

    pub fn has_voice(self) -> bool {
        matches!(self, Self::Participant | Self::Moderator)
    }

    /// The closest role upwards that has voice.
    pub fn with_voice(self) -> Self {
        match self {
            Self::Moderator => Self::Moderator,
            _ => Self::Participant,
        }
    }

    pub fn as_moderator(self) -> Self {
        Self::Moderator
    }

    pub fn is_different_from(self, other: Self) -> bool {
        self != other
    }

    pub fn is_none(self) -> bool {
        self == Self::None
    }

    pub fn is_visitor(self) -> bool {
        self == Self::Visitor
    }

    pub fn is_participant(self) -> bool {
        self == Self::Participant
    }

    pub fn is_moderator(self) -> bool {
        self == Self::Moderator
    }
}

impl FromStr for Role {
    type Err = RoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(Self::None),
            "visitor" => Ok(Self::Visitor),
            "participant" => Ok(Self::Participant),
            "moderator" => Ok(Self::Moderator),
            _ => Err(RoomError::UnknownRole(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_voice() {
        let voiced = [Role::None, Role::Visitor, Role::Participant, Role::Moderator]
            .into_iter()
            .filter(|r| r.has_voice())
            .collect::<Vec<_>>();
        assert_eq!(voiced, vec![Role::Participant, Role::Moderator]);

        assert_eq!(Role::Visitor.with_voice(), Role::Participant);
        assert_eq!(Role::Moderator.with_voice(), Role::Moderator);
        assert_eq!(Role::None.as_moderator(), Role::Moderator);
    }

    #[test]
    fn test_parse() {
        assert_eq!("visitor".parse::<Role>(), Ok(Role::Visitor));
        assert_eq!(
            "boss".parse::<Role>(),
            Err(RoomError::UnknownRole("boss".to_string()))
        );
        assert!(Role::Visitor < Role::Participant);
    }
}
