// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub(crate) mod affiliation;
pub(crate) mod data_form;
pub(crate) mod disco_info;
pub(crate) mod message_event;
pub(crate) mod muc_status;
pub(crate) mod muc_user;
pub(crate) mod presence_event;
