// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::RwLock;

use crate::domain::rooms::models::{
    DelayedMessages, DiscussionHistory, Occupant, RoomDiscoInfo, RoomEvent, RoomRoster,
};
use crate::domain::shared::models::{HistoryTimeZone, RoomId};

/// Receives the events of a room. Observers are called synchronously on the publishing thread,
/// so they must not block.
pub trait RoomObserver: Send + Sync {
    fn on_event(&self, room: &Room, event: &RoomEvent);
}

impl<F> RoomObserver for F
where
    F: Fn(&Room, &RoomEvent) + Send + Sync,
{
    fn on_event(&self, room: &Room, event: &RoomEvent) {
        self(room, event)
    }
}

/// A room we joined. Cloning a `Room` yields another handle to the same room.
#[derive(Clone)]
pub struct Room {
    inner: Arc<RoomInner>,
}

struct RoomInner {
    id: RoomId,
    roster: RoomRoster,
    history: DiscussionHistory,
    details: RwLock<RoomDetails>,
    observers: RwLock<Vec<Arc<dyn RoomObserver>>>,
}

#[derive(Debug, Default)]
struct RoomDetails {
    subject: Option<String>,
    self_occupant: Option<Occupant>,
    properties: RoomDiscoInfo,
}

impl Room {
    pub fn new(id: RoomId, history_time_zone: HistoryTimeZone) -> Self {
        Self {
            inner: Arc::new(RoomInner {
                id,
                roster: RoomRoster::new(),
                history: DiscussionHistory::new(history_time_zone),
                details: Default::default(),
                observers: Default::default(),
            }),
        }
    }

    pub fn id(&self) -> &RoomId {
        &self.inner.id
    }

    pub fn roster(&self) -> &RoomRoster {
        &self.inner.roster
    }

    pub fn ptr_eq(&self, other: &Room) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Room {
    pub fn add_self_occupant(&self, occupant: Occupant) {
        self.inner.details.write().self_occupant = Some(occupant);
    }

    pub fn self_occupant(&self) -> Option<Occupant> {
        self.inner.details.read().self_occupant.clone()
    }

    /// True while our own occupant is in the roster.
    pub fn is_self_occupant_in_the_room(&self) -> bool {
        let Some(occupant) = self.self_occupant() else {
            return false;
        };
        self.inner
            .roster
            .get_occupant(&occupant.nickname())
            .is_some_and(|o| o.ptr_eq(&occupant))
    }

    pub fn is_self_occupant_an_owner(&self) -> bool {
        self.self_occupant()
            .is_some_and(|o| o.affiliation().is_owner())
    }

    pub fn subject(&self) -> Option<String> {
        self.inner.details.read().subject.clone()
    }

    /// Sets the subject and returns whether a subject had been set before.
    pub fn update_subject(&self, subject: impl Into<String>) -> bool {
        self.inner
            .details
            .write()
            .subject
            .replace(subject.into())
            .is_some()
    }

    pub fn properties(&self) -> RoomDiscoInfo {
        self.inner.details.read().properties.clone()
    }

    pub fn update_properties(&self, properties: RoomDiscoInfo) {
        self.inner.details.write().properties = properties;
    }
}

impl Room {
    pub fn add_history_message(
        &self,
        nickname: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> bool {
        self.inner.history.add_message(nickname, message, timestamp)
    }

    pub fn has_history(&self) -> bool {
        self.inner.history.has_history()
    }

    pub fn get_history(&self) -> Vec<DelayedMessages> {
        self.inner.history.get_history()
    }
}

impl Room {
    pub fn subscribe(&self, observer: impl RoomObserver + 'static) {
        self.inner.observers.write().push(Arc::new(observer));
    }

    /// Delivers `event` to all current observers. The observer list is copied before any of them
    /// is called, so observers may subscribe or publish themselves.
    pub fn publish(&self, event: RoomEvent) {
        let observers = self.inner.observers.read().clone();
        for observer in observers {
            observer.on_event(self, &event);
        }
    }
}

impl Debug for Room {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Room")
            .field("id", &self.inner.id)
            .field("roster", &self.inner.roster)
            .field("details", &*self.inner.details.read())
            .field("observers", &self.inner.observers.read().len())
            .finish()
    }
}
