// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

pub use app_config::AppConfig;
pub use crate::domain::rooms::models::RoomConfigDefaults;
pub use crate::domain::shared::models::HistoryTimeZone;

use crate::domain::rooms::repos::ConnectedRoomsRepository;

mod app_config;

pub type DynConnectedRoomsRepository = Arc<dyn ConnectedRoomsRepository>;
