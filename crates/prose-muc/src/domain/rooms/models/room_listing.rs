// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::cmp::Ordering;

use jid::Jid;
use tracing::debug;

use crate::domain::shared::models::{DataForm, DataFormType, RoomId};
use crate::infra::xmpp::ns::{disco_feature, roominfo};
use crate::infra::xmpp::parse_form_bool;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anonymity {
    NonAnonymous,
    SemiAnonymous,
}

/// What a room announces about itself via service discovery (XEP-0045, 6.4).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoomDiscoInfo {
    pub supports_voice_requests: bool,
    pub allows_registration: bool,
    pub anonymity: Option<Anonymity>,
    pub persistent: bool,
    pub moderated: bool,
    pub open: bool,
    pub password_protected: bool,
    pub public: bool,

    pub language: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub occupants: Option<u32>,
    pub occupants_can_change_subject: bool,
    pub logged: bool,
    pub members_can_invite: bool,
    pub occupants_can_invite: bool,
    pub allow_private_messages: Option<String>,
    pub contact_jid: Option<String>,
}

impl RoomDiscoInfo {
    pub fn set_features<S: AsRef<str>>(&mut self, features: impl IntoIterator<Item = S>) {
        for feature in features {
            self.set_feature(feature.as_ref());
        }
    }

    fn set_feature(&mut self, feature: &str) {
        match feature {
            disco_feature::REQUEST => self.supports_voice_requests = true,
            disco_feature::REGISTER_IN_BAND => self.allows_registration = true,
            disco_feature::SEMI_ANONYMOUS => self.anonymity = Some(Anonymity::SemiAnonymous),
            disco_feature::NON_ANONYMOUS => self.anonymity = Some(Anonymity::NonAnonymous),
            disco_feature::PERSISTENT => self.persistent = true,
            disco_feature::TEMPORARY => self.persistent = false,
            disco_feature::MODERATED => self.moderated = true,
            disco_feature::UNMODERATED => self.moderated = false,
            disco_feature::OPEN => self.open = true,
            disco_feature::MEMBERS_ONLY => self.open = false,
            disco_feature::PASSWORD_PROTECTED => self.password_protected = true,
            disco_feature::UNSECURED => self.password_protected = false,
            disco_feature::PUBLIC => self.public = true,
            disco_feature::HIDDEN => self.public = false,
            _ => debug!("Ignoring room feature {feature}"),
        }
    }

    /// Applies a `muc#roominfo` result form. Other forms are ignored.
    pub fn set_form_data(&mut self, form: &DataForm) {
        if form.r#type != DataFormType::Result
            || form.form_type.as_deref() != Some(disco_feature::ROOM_INFO)
        {
            return;
        }

        for field in &form.fields {
            let Some(var) = field.var.as_deref() else {
                continue;
            };
            let value = field.values.first().cloned();

            match var {
                roominfo::LANG => self.language = value.or(self.language.take()),
                // Some servers send an empty value instead of 0.
                roominfo::CHANGE_SUBJECT => {
                    self.occupants_can_change_subject =
                        value.map(parse_form_bool).unwrap_or_default()
                }
                roominfo::ENABLE_LOGGING => {
                    if let Some(value) = value {
                        self.logged = parse_form_bool(value)
                    }
                }
                roominfo::ROOM_NAME => self.title = value.or(self.title.take()),
                roominfo::DESCRIPTION => self.description = value.or(self.description.take()),
                roominfo::OCCUPANTS => {
                    if let Some(count) = value.and_then(|v| v.parse().ok()) {
                        self.occupants = Some(count)
                    }
                }
                roominfo::ALLOW_MEMBER_INVITES => {
                    if let Some(value) = value {
                        self.members_can_invite = parse_form_bool(value)
                    }
                }
                roominfo::ALLOW_INVITES => {
                    if let Some(value) = value {
                        self.occupants_can_invite = parse_form_bool(value)
                    }
                }
                roominfo::ALLOW_PM => {
                    self.allow_private_messages = value.or(self.allow_private_messages.take())
                }
                roominfo::CONTACT_JID => self.contact_jid = value.or(self.contact_jid.take()),
                _ => debug!("Ignoring room info field {var}"),
            }
        }
    }
}

/// A room as presented in a list of rooms of a MUC service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomListing {
    pub service: Jid,
    pub service_name: String,
    pub room_id: RoomId,
    pub name: String,
    pub info: RoomDiscoInfo,
}

impl RoomListing {
    pub fn new(service: Jid, room_id: RoomId, name: impl Into<String>) -> Self {
        Self {
            service,
            service_name: String::new(),
            room_id,
            name: name.into(),
            info: Default::default(),
        }
    }
}

impl PartialOrd for RoomListing {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RoomListing {
    /// Case-insensitively by name, then by room.
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .to_lowercase()
            .cmp(&other.name.to_lowercase())
            .then_with(|| self.room_id.to_string().cmp(&other.room_id.to_string()))
            .then_with(|| self.name.cmp(&other.name))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::domain::shared::models::{FieldType, FormField};
    use crate::{bare, jid};

    use super::*;

    #[test]
    fn test_features() {
        let mut info = RoomDiscoInfo::default();
        info.set_features([
            "http://jabber.org/protocol/muc",
            "muc_persistent",
            "muc_membersonly",
            "muc_semianonymous",
            "muc_passwordprotected",
            "http://jabber.org/protocol/muc#request",
        ]);

        assert!(info.persistent);
        assert!(!info.open);
        assert!(info.password_protected);
        assert!(info.supports_voice_requests);
        assert_eq!(info.anonymity, Some(Anonymity::SemiAnonymous));
    }

    #[test]
    fn test_form_data() {
        let mut info = RoomDiscoInfo::default();
        info.set_form_data(
            &DataForm::new(DataFormType::Result)
                .with_form_type("http://jabber.org/protocol/muc#roominfo")
                .with_fields(vec![
                    FormField::new("muc#roominfo_description", FieldType::TextSingle)
                        .with_value("The place to be"),
                    FormField::new("muc#roominfo_occupants", FieldType::TextSingle)
                        .with_value("7"),
                    FormField::new("muc#roominfo_changesubject", FieldType::Boolean),
                    FormField::new("muc#roomconfig_roomname", FieldType::TextSingle)
                        .with_value("Lounge"),
                ]),
        );

        assert_eq!(info.description.as_deref(), Some("The place to be"));
        assert_eq!(info.occupants, Some(7));
        assert_eq!(info.title.as_deref(), Some("Lounge"));
        assert!(!info.occupants_can_change_subject);
    }

    #[test]
    fn test_ignores_other_forms() {
        let mut info = RoomDiscoInfo::default();
        info.set_form_data(
            &DataForm::new(DataFormType::Result)
                .with_form_type("urn:xmpp:other")
                .with_fields(vec![FormField::new(
                    "muc#roominfo_description",
                    FieldType::TextSingle,
                )
                .with_value("Nope")]),
        );
        assert_eq!(info, RoomDiscoInfo::default());
    }

    #[test]
    fn test_listing_order() {
        let service = jid!("conference.prose.org");
        let mut listings = vec![
            RoomListing::new(service.clone(), bare!("b@conference.prose.org").into(), "beta"),
            RoomListing::new(service.clone(), bare!("a@conference.prose.org").into(), "Alpha"),
            RoomListing::new(service, bare!("c@conference.prose.org").into(), "alpha"),
        ];
        listings.sort();

        let ids = listings
            .iter()
            .map(|l| l.room_id.to_string())
            .collect::<Vec<_>>();
        assert_eq!(
            ids,
            vec![
                "a@conference.prose.org",
                "c@conference.prose.org",
                "b@conference.prose.org"
            ]
        );
    }
}
