// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Display, Formatter};
use std::ops::Deref;
use std::str::FromStr;

use jid::{BareJid, FullJid, Jid};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Represents the BareJid of a MUC room.
pub struct RoomId(BareJid);

impl RoomId {
    /// Returns the JID under which the occupant with `nickname` is addressed in this room.
    pub fn occupant_jid(&self, nickname: impl AsRef<str>) -> Result<FullJid, jid::Error> {
        self.0.with_resource_str(nickname.as_ref())
    }

    pub fn into_inner(self) -> BareJid {
        self.0
    }
}

impl From<BareJid> for RoomId {
    fn from(value: BareJid) -> Self {
        RoomId(value)
    }
}

impl From<&FullJid> for RoomId {
    fn from(value: &FullJid) -> Self {
        RoomId(value.to_bare())
    }
}

impl Debug for RoomId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RoomId({})", self.0)
    }
}

impl Display for RoomId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<BareJid> for RoomId {
    fn as_ref(&self) -> &BareJid {
        &self.0
    }
}

impl Deref for RoomId {
    type Target = BareJid;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for RoomId {
    type Err = <BareJid as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

impl From<RoomId> for Jid {
    fn from(value: RoomId) -> Self {
        Jid::Bare(value.0)
    }
}
