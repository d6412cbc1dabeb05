// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::domain::shared::models::{FieldType, FormFieldOption};
use crate::infra::xmpp::ns::roomconfig;

/// The configuration fields the client knows how to present and edit.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum RoomConfigFieldType {
    Name,
    Description,
    EnableLogging,
    Language,
    Pubsub,
    CanChangeSubject,
    AllowInvites,
    AllowPrivateMessages,
    MaxOccupantsNumber,
    IsPublic,
    IsPersistent,
    PresenceBroadcast,
    IsModerated,
    IsMembersOnly,
    RetrieveMembersList,
    IsPasswordProtected,
    Password,
    Owners,
    Whois,
    MaxHistoryFetch,
    Admins,
}

impl RoomConfigFieldType {
    pub const ALL: [RoomConfigFieldType; 21] = [
        Self::Name,
        Self::Description,
        Self::EnableLogging,
        Self::Language,
        Self::Pubsub,
        Self::CanChangeSubject,
        Self::AllowInvites,
        Self::AllowPrivateMessages,
        Self::MaxOccupantsNumber,
        Self::IsPublic,
        Self::IsPersistent,
        Self::PresenceBroadcast,
        Self::IsModerated,
        Self::IsMembersOnly,
        Self::RetrieveMembersList,
        Self::IsPasswordProtected,
        Self::Password,
        Self::Owners,
        Self::Whois,
        Self::MaxHistoryFetch,
        Self::Admins,
    ];

    /// The var names under which servers send this field. The first one is canonical.
    pub fn vars(self) -> &'static [&'static str] {
        match self {
            Self::Name => &[roomconfig::ROOM_NAME],
            Self::Description => &[roomconfig::ROOM_DESC],
            Self::EnableLogging => &[
                roomconfig::ENABLE_LOGGING,
                roomconfig::ENABLE_ARCHIVING,
                roomconfig::MAM,
            ],
            Self::Language => &[roomconfig::LANG],
            Self::Pubsub => &[roomconfig::PUBSUB],
            Self::CanChangeSubject => &[roomconfig::CHANGE_SUBJECT],
            Self::AllowInvites => &[roomconfig::ALLOW_INVITES, roomconfig::ALLOW_MEMBER_INVITES],
            Self::AllowPrivateMessages => {
                &[roomconfig::ALLOW_PM, roomconfig::ALLOW_PRIVATE_MESSAGES]
            }
            Self::MaxOccupantsNumber => &[roomconfig::MAX_USERS],
            Self::IsPublic => &[roomconfig::PUBLIC_ROOM],
            Self::IsPersistent => &[roomconfig::PERSISTENT_ROOM],
            Self::PresenceBroadcast => &[roomconfig::PRESENCE_BROADCAST],
            Self::IsModerated => &[roomconfig::MODERATED_ROOM],
            Self::IsMembersOnly => &[roomconfig::MEMBERS_ONLY],
            Self::RetrieveMembersList => &[roomconfig::GET_MEMBER_LIST],
            Self::IsPasswordProtected => &[roomconfig::PASSWORD_PROTECTED_ROOM],
            Self::Password => &[roomconfig::ROOM_SECRET],
            Self::Owners => &[roomconfig::ROOM_OWNERS],
            Self::Whois => &[roomconfig::WHOIS],
            Self::MaxHistoryFetch => {
                &[roomconfig::MAX_HISTORY_FETCH, roomconfig::HISTORY_LENGTH]
            }
            Self::Admins => &[roomconfig::ROOM_ADMINS],
        }
    }

    pub fn canonical_var(self) -> &'static str {
        self.vars()[0]
    }

    /// The field type used when the server did not send this field.
    pub fn default_field_type(self) -> FieldType {
        match self {
            Self::Name | Self::Description | Self::Language | Self::Pubsub => FieldType::TextSingle,
            Self::Password => FieldType::TextPrivate,
            Self::EnableLogging
            | Self::CanChangeSubject
            | Self::AllowInvites
            | Self::IsPublic
            | Self::IsPersistent
            | Self::IsModerated
            | Self::IsMembersOnly
            | Self::IsPasswordProtected => FieldType::Boolean,
            Self::AllowPrivateMessages
            | Self::MaxOccupantsNumber
            | Self::Whois
            | Self::MaxHistoryFetch => FieldType::ListSingle,
            Self::PresenceBroadcast | Self::RetrieveMembersList => FieldType::ListMulti,
            Self::Owners | Self::Admins => FieldType::JidMulti,
        }
    }

    pub fn for_var(var: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.vars().contains(&var))
    }

    /// Identifies the field a server error text (e.g. of a `bad-request` reply to a submitted
    /// form) refers to. Longer var names are matched first so that short aliases don't shadow
    /// them.
    pub fn for_error_text(text: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .flat_map(|t| t.vars().iter().map(move |var| (t, *var)))
            .sorted_by_key(|(_, var)| std::cmp::Reverse(var.len()))
            .find(|(_, var)| text.contains(var))
            .map(|(t, _)| t)
    }
}

/// A `list-single` field together with the options to choose from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigListSingleField {
    pub value: String,
    pub options: Vec<FormFieldOption>,
}

impl ConfigListSingleField {
    pub fn with_options(options: Vec<FormFieldOption>) -> Self {
        Self {
            value: String::new(),
            options,
        }
    }

    /// Sets the value and replaces the options unless `options` is empty.
    pub fn update_field(&mut self, value: impl Into<String>, options: Vec<FormFieldOption>) {
        self.value = value.into();
        if !options.is_empty() {
            self.options = options;
        }
    }

    pub fn update_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn current_value(&self) -> &str {
        &self.value
    }

    pub fn option_values(&self) -> Vec<&str> {
        self.options.iter().map(|o| o.value.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigListMultiField {
    pub values: Vec<String>,
    pub options: Vec<FormFieldOption>,
}

impl ConfigListMultiField {
    pub fn with_options(options: Vec<FormFieldOption>) -> Self {
        Self {
            values: vec![],
            options,
        }
    }

    pub fn update_field(&mut self, values: Vec<String>, options: Vec<FormFieldOption>) {
        self.values = values;
        if !options.is_empty() {
            self.options = options;
        }
    }

    pub fn current_values(&self) -> &[String] {
        &self.values
    }
}

/// A new value for a configuration field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Bool(bool),
    Text(String),
    Multi(Vec<String>),
}

impl FieldValue {
    pub(crate) fn into_values(self) -> Vec<String> {
        match self {
            Self::Bool(value) => vec![value.to_string()],
            Self::Text(value) if value.is_empty() => vec![],
            Self::Text(value) => vec![value],
            Self::Multi(values) => values,
        }
    }
}

/// Options offered for list fields when the server doesn't send any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomConfigDefaults {
    pub max_history_fetch: Vec<String>,
    pub allow_private_messages: Vec<String>,
    pub retrieve_members_list: Vec<String>,
    pub max_occupants_number: Vec<String>,
    pub presence_broadcast: Vec<String>,
    pub whois: Vec<String>,
}

impl Default for RoomConfigDefaults {
    fn default() -> Self {
        fn list(values: &[&str]) -> Vec<String> {
            values.iter().map(|v| v.to_string()).collect()
        }

        Self {
            max_history_fetch: list(&["50"]),
            allow_private_messages: list(&["participants", "moderators", "none"]),
            retrieve_members_list: list(&["moderator", "participant", "visitor"]),
            max_occupants_number: list(&["10", "20", "30", "50", "100", "0"]),
            presence_broadcast: list(&["moderator", "participant", "visitor"]),
            whois: list(&["moderators", "anyone"]),
        }
    }
}

pub(crate) fn options_from(values: &[String]) -> Vec<FormFieldOption> {
    values.iter().map(FormFieldOption::new).collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_for_var() {
        assert_eq!(
            RoomConfigFieldType::for_var("mam"),
            Some(RoomConfigFieldType::EnableLogging)
        );
        assert_eq!(
            RoomConfigFieldType::for_var("muc#roomconfig_historylength"),
            Some(RoomConfigFieldType::MaxHistoryFetch)
        );
        assert_eq!(RoomConfigFieldType::for_var("x-vendor-flag"), None);
    }

    #[test]
    fn test_for_error_text() {
        assert_eq!(
            RoomConfigFieldType::for_error_text(
                "Field 'muc#roomconfig_maxusers' has invalid value"
            ),
            Some(RoomConfigFieldType::MaxOccupantsNumber)
        );
        assert_eq!(
            RoomConfigFieldType::for_error_text(
                "Invalid {http://prosody.im/protocol/muc}roomconfig_allowmemberinvites"
            ),
            Some(RoomConfigFieldType::AllowInvites)
        );
        assert_eq!(RoomConfigFieldType::for_error_text("Bad request"), None);
    }

    #[test]
    fn test_list_single_keeps_options_when_none_received() {
        let mut field = ConfigListSingleField::with_options(vec![FormFieldOption::new("50")]);
        field.update_field("20", vec![]);
        assert_eq!(field.current_value(), "20");
        assert_eq!(field.option_values(), vec!["50"]);
    }
}
