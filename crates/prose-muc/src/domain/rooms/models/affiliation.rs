// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum_macros::Display;

use crate::domain::rooms::models::privileges::{AffiliationPrivilege, AFFILIATION_PRIVILEGES};
use crate::domain::rooms::models::RoomError;

#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Default, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Affiliation {
    /// A normal participant.
    #[default]
    None,

    /// A user who has been banned from this room.
    Outcast,

    /// A user who is whitelisted to speak in moderated rooms, or to join a
    /// member-only room.
    Member,

    /// A user who has been empowered by an owner to do administrative
    /// operations.
    Admin,

    /// The user who created the room, or who got appointed by its creator
    /// to be their equal.
    Owner,
}

impl Affiliation {
    /// Column of this affiliation in the privilege table.
    pub(crate) const fn ordinal(self) -> usize {
        match self {
            Self::Outcast => 0,
            Self::None => 1,
            Self::Member => 2,
            Self::Admin => 3,
            Self::Owner => 4,
        }
    }

    const fn rank(self) -> u8 {
        match self {
            Self::Outcast | Self::None => 1,
            Self::Member => 2,
            Self::Admin => 3,
            Self::Owner => 4,
        }
    }

    pub fn can(self, privilege: AffiliationPrivilege) -> bool {
        AFFILIATION_PRIVILEGES[privilege as usize][self.ordinal()]
    }

    /// `None` and `Outcast` are incomparable, so neither is lower than the other.
    pub fn is_lower_than(self, other: Self) -> bool {
        self < other
    }

    pub fn is_different_from(self, other: Self) -> bool {
        self != other
    }

    pub fn is_none(self) -> bool {
        self == Self::None
    }

    pub fn is_banned(self) -> bool {
        self == Self::Outcast
    }

    /// Members, admins and owners.
    pub fn is_member(self) -> bool {
        matches!(self, Self::Member | Self::Admin | Self::Owner)
    }

    pub fn is_admin(self) -> bool {
        self == Self::Admin
    }

    /// Admins and owners can moderate a room.
    pub fn is_moderator(self) -> bool {
        matches!(self, Self::Admin | Self::Owner)
    }

    pub fn is_owner(self) -> bool {
        self == Self::Owner
    }
}

impl PartialOrd for Affiliation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            return Some(Ordering::Equal);
        }
        match self.rank().cmp(&other.rank()) {
            Ordering::Equal => None,
            ordering => Some(ordering),
        }
    }
}

impl FromStr for Affiliation {
    type Err = RoomError;

    /// An empty string is read as `none` since the attribute may be omitted on the wire.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "none" => Ok(Self::None),
            "outcast" => Ok(Self::Outcast),
            "member" => Ok(Self::Member),
            "admin" => Ok(Self::Admin),
            "owner" => Ok(Self::Owner),
            _ => Err(RoomError::UnknownAffiliation(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_is_lower_than() {
        use Affiliation::*;

        assert!(!None.is_lower_than(Outcast));
        assert!(!Outcast.is_lower_than(None));
        assert!(None.is_lower_than(Member));
        assert!(Outcast.is_lower_than(Owner));
        assert!(Member.is_lower_than(Admin));
        assert!(Admin.is_lower_than(Owner));
        assert!(!Owner.is_lower_than(Admin));
        assert!(!Admin.is_lower_than(Admin));
    }

    #[test]
    fn test_parse() {
        assert_eq!("admin".parse::<Affiliation>(), Ok(Affiliation::Admin));
        assert_eq!("".parse::<Affiliation>(), Ok(Affiliation::None));
        assert_eq!(
            "king".parse::<Affiliation>(),
            Err(RoomError::UnknownAffiliation("king".to_string()))
        );
        assert_eq!(Affiliation::Outcast.to_string(), "outcast");
    }

    #[test]
    fn test_helper_queries() {
        assert!(Affiliation::Owner.is_moderator());
        assert!(!Affiliation::Owner.is_admin());
        assert!(Affiliation::Admin.is_member());
        assert!(!Affiliation::Outcast.is_member());
        assert!(Affiliation::Outcast.is_banned());
    }
}
