// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use affiliation::Affiliation;
pub use discussion_history::{DelayedMessage, DelayedMessages, DiscussionHistory};
pub use message_event::MessageEvent;
pub use muc_status::{MucStatus, MucStatuses};
pub use occupant::{Occupant, OccupantInfo};
pub use presence_event::{PresenceEvent, PresenceType};
pub use privileges::{AffiliationPrivilege, RolePrivilege, Standing};
pub use role::Role;
pub use room::{Room, RoomObserver};
pub use room_config_fields::{
    ConfigListMultiField, ConfigListSingleField, FieldValue, RoomConfigDefaults,
    RoomConfigFieldType,
};
pub use room_config_form::RoomConfigForm;
pub use room_error::RoomError;
pub use room_event::{RemovalReason, RoomEvent};
pub use room_listing::{Anonymity, RoomDiscoInfo, RoomListing};
pub use room_roster::{RoomRoster, RosterUpdate};

mod affiliation;
mod discussion_history;
mod message_event;
mod muc_status;
mod occupant;
mod presence_event;
mod privileges;
mod role;
mod room;
mod room_config_fields;
mod room_config_form;
mod room_error;
mod room_event;
mod room_listing;
mod room_roster;
