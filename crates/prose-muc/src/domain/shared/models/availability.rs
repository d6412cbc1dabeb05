// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum Availability {
    #[default]
    Available,
    Chat,
    Away,
    DoNotDisturb,
    ExtendedAway,
    Unavailable,
}

impl Availability {
    /// Maps the `<show/>` value of a presence to an availability. An empty or unknown value
    /// means the sender is plainly available.
    pub fn from_show(show: impl AsRef<str>) -> Self {
        match show.as_ref() {
            "chat" => Self::Chat,
            "away" => Self::Away,
            "dnd" => Self::DoNotDisturb,
            "xa" => Self::ExtendedAway,
            _ => Self::Available,
        }
    }

    /// The `<show/>` value for this availability, if any.
    pub fn show(&self) -> Option<&'static str> {
        match self {
            Self::Available | Self::Unavailable => None,
            Self::Chat => Some("chat"),
            Self::Away => Some("away"),
            Self::DoNotDisturb => Some("dnd"),
            Self::ExtendedAway => Some("xa"),
        }
    }
}

/// The presence status of an occupant as last announced in the room.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PresenceStatus {
    pub availability: Availability,
    pub message: Option<String>,
}

impl PresenceStatus {
    pub fn new(show: impl AsRef<str>, message: impl AsRef<str>) -> Self {
        let message = message.as_ref();
        Self {
            availability: Availability::from_show(show),
            message: (!message.is_empty()).then(|| message.to_string()),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            availability: Availability::Unavailable,
            message: Some(message.into()),
        }
    }
}
