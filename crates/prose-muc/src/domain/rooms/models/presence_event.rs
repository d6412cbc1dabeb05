// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::str::FromStr;

use jid::FullJid;

use crate::domain::rooms::models::{MucStatuses, RoomError};

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum PresenceType {
    Available,
    Unavailable,
}

impl FromStr for PresenceType {
    type Err = RoomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::Available),
            "unavailable" => Ok(Self::Unavailable),
            _ => Err(RoomError::InvalidPresenceType(s.to_string())),
        }
    }
}

/// A presence received from a room occupant, with its values as they appeared on the wire.
#[derive(Debug, PartialEq, Clone)]
pub struct PresenceEvent {
    /// The occupant JID, i.e. `room@service/nickname`.
    pub from: FullJid,
    pub r#type: String,
    pub affiliation: String,
    pub role: String,
    pub show: String,
    pub status_codes: MucStatuses,
    pub status_message: String,
    pub real_jid: Option<FullJid>,
    /// The new nickname announced in an `unavailable` presence with status 303.
    pub new_nickname: Option<String>,
}

impl PresenceEvent {
    pub fn new(from: FullJid) -> Self {
        Self {
            from,
            r#type: String::new(),
            affiliation: String::new(),
            role: String::new(),
            show: String::new(),
            status_codes: Default::default(),
            status_message: String::new(),
            real_jid: None,
            new_nickname: None,
        }
    }

    pub fn nickname(&self) -> &str {
        self.from.resource_str()
    }

    pub fn with_type(mut self, r#type: impl Into<String>) -> Self {
        self.r#type = r#type.into();
        self
    }

    pub fn with_affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliation = affiliation.into();
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_show(mut self, show: impl Into<String>) -> Self {
        self.show = show.into();
        self
    }

    pub fn with_status_message(mut self, message: impl Into<String>) -> Self {
        self.status_message = message.into();
        self
    }

    pub fn with_status_codes(mut self, codes: &[u16]) -> Self {
        self.status_codes = MucStatuses::from(codes);
        self
    }

    pub fn with_real_jid(mut self, real_jid: FullJid) -> Self {
        self.real_jid = Some(real_jid);
        self
    }

    pub fn with_new_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.new_nickname = Some(nickname.into());
        self
    }
}
