// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use jid::{BareJid, Jid};

use crate::domain::rooms::models::MucStatuses;
use crate::domain::shared::models::RoomId;

/// A groupchat message received from a room or one of its occupants.
#[derive(Debug, PartialEq, Clone)]
pub struct MessageEvent {
    /// Either the room itself or an occupant JID.
    pub from: Jid,
    pub subject: Option<String>,
    pub body: Option<String>,
    /// Set when the message was replayed from the room's history.
    pub delay: Option<DateTime<Utc>>,
    pub status_codes: MucStatuses,
}

impl MessageEvent {
    pub fn new(from: impl Into<Jid>) -> Self {
        Self {
            from: from.into(),
            subject: None,
            body: None,
            delay: None,
            status_codes: Default::default(),
        }
    }

    pub fn room_id(&self) -> RoomId {
        let bare: BareJid = match &self.from {
            Jid::Bare(bare) => bare.clone(),
            Jid::Full(full) => full.to_bare(),
        };
        RoomId::from(bare)
    }

    /// The nickname of the sender if the message wasn't sent by the room itself.
    pub fn nickname(&self) -> Option<&str> {
        match &self.from {
            Jid::Bare(_) => None,
            Jid::Full(full) => Some(full.resource_str()),
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_delay(mut self, delay: DateTime<Utc>) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_status_codes(mut self, codes: &[u16]) -> Self {
        self.status_codes = MucStatuses::from(codes);
        self
    }
}
