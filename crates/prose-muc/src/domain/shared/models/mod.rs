// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use availability::{Availability, PresenceStatus};
pub use data_form::{DataForm, DataFormType, FieldType, FormField, FormFieldOption};
pub use history_time_zone::HistoryTimeZone;
pub use room_id::RoomId;

mod availability;
mod data_form;
mod history_time_zone;
mod room_id;
