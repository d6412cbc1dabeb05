// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::rooms::models::{Room, RoomConfigDefaults, RoomConfigForm};
use crate::domain::shared::models::{DataForm, HistoryTimeZone, RoomId};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// The time zone in which the discussion history of a room is split into days.
    pub history_time_zone: HistoryTimeZone,
    /// Options offered for list fields of the room configuration form when the server doesn't
    /// send any.
    pub room_config_defaults: RoomConfigDefaults,
}

impl AppConfig {
    /// Reads the configuration from JSON. Missing keys take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse app configuration")
    }

    pub fn new_room(&self, room_id: RoomId) -> Room {
        Room::new(room_id, self.history_time_zone)
    }

    pub fn room_config_form(&self, form: &DataForm) -> RoomConfigForm {
        RoomConfigForm::new(form, &self.room_config_defaults)
    }
}
