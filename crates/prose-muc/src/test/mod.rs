// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::rooms::models::{Room, RoomEvent};

/// Collects every event published on a room.
#[derive(Clone, Default)]
pub struct RecordedEvents {
    events: Arc<Mutex<Vec<RoomEvent>>>,
}

impl RecordedEvents {
    pub fn attach(room: &Room) -> Self {
        let recorded = Self::default();
        let events = recorded.events.clone();
        room.subscribe(move |_: &Room, event: &RoomEvent| events.lock().push(event.clone()));
        recorded
    }

    /// Returns the events recorded so far and clears the list.
    pub fn take(&self) -> Vec<RoomEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

#[macro_export]
macro_rules! jid {
    ($jid:expr) => {
        $jid.parse::<jid::Jid>().unwrap()
    };
}

#[macro_export]
macro_rules! bare {
    ($jid:expr) => {
        $jid.parse::<jid::BareJid>().unwrap()
    };
}

#[macro_export]
macro_rules! full {
    ($jid:expr) => {
        $jid.parse::<jid::FullJid>().unwrap()
    };
}
