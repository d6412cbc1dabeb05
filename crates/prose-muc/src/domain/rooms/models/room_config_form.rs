// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use jid::Jid;

use crate::domain::rooms::models::room_config_fields::options_from;
use crate::domain::rooms::models::{
    ConfigListMultiField, ConfigListSingleField, FieldValue, RoomConfigDefaults,
    RoomConfigFieldType,
};
use crate::domain::shared::models::{DataForm, DataFormType, FieldType, FormField};
use crate::infra::xmpp::ns::disco_feature;
use crate::infra::xmpp::parse_form_bool;

/// The configuration of a room as an owner edits it (XEP-0045, 10.2).
///
/// Fields the client doesn't know are kept in `fields` and submitted back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomConfigForm {
    pub title: String,
    pub description: String,
    pub logged: bool,
    pub language: String,
    pub associated_publish_subscribe_node: String,
    pub occupants_can_change_subject: bool,
    pub occupants_can_invite: bool,
    pub allow_private_messages: ConfigListSingleField,
    pub max_occupants_number: ConfigListSingleField,
    pub public: bool,
    pub persistent: bool,
    pub presence_broadcast: ConfigListMultiField,
    pub moderated: bool,
    pub members_only: bool,
    pub retrieve_members_list: ConfigListMultiField,
    pub password_protected: bool,
    pub password: String,
    pub owners: Vec<Jid>,
    pub whois: ConfigListSingleField,
    pub max_history_fetch: ConfigListSingleField,
    pub admins: Vec<Jid>,
    /// Fields not known to the client, in the order they were received.
    pub fields: Vec<FormField>,
    received: HashMap<RoomConfigFieldType, ReceivedField>,
}

#[derive(Debug, Clone, PartialEq)]
struct ReceivedField {
    var: String,
    r#type: FieldType,
    /// Whether the field carried at least one `<value/>`, even an empty one.
    has_value: bool,
}

impl RoomConfigForm {
    pub fn new(form: &DataForm, defaults: &RoomConfigDefaults) -> Self {
        let mut config = Self::empty(defaults);
        config.set_form_fields(form);
        config
    }

    fn empty(defaults: &RoomConfigDefaults) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            logged: false,
            language: String::new(),
            associated_publish_subscribe_node: String::new(),
            occupants_can_change_subject: false,
            occupants_can_invite: false,
            allow_private_messages: ConfigListSingleField::with_options(options_from(
                &defaults.allow_private_messages,
            )),
            max_occupants_number: ConfigListSingleField::with_options(options_from(
                &defaults.max_occupants_number,
            )),
            public: false,
            persistent: false,
            presence_broadcast: ConfigListMultiField::with_options(options_from(
                &defaults.presence_broadcast,
            )),
            moderated: false,
            members_only: false,
            retrieve_members_list: ConfigListMultiField::with_options(options_from(
                &defaults.retrieve_members_list,
            )),
            password_protected: false,
            password: String::new(),
            owners: vec![],
            whois: ConfigListSingleField::with_options(options_from(&defaults.whois)),
            max_history_fetch: ConfigListSingleField::with_options(options_from(
                &defaults.max_history_fetch,
            )),
            admins: vec![],
            fields: vec![],
            received: HashMap::new(),
        }
    }

    /// Updates the typed values from the fields of `form`.
    pub fn set_form_fields(&mut self, form: &DataForm) {
        for field in &form.fields {
            self.set_field(field);
        }
    }

    fn set_field(&mut self, field: &FormField) {
        let Some(var) = field.var.as_deref() else {
            return;
        };

        let Some(field_type) = RoomConfigFieldType::for_var(var) else {
            if field.r#type != FieldType::Fixed {
                self.set_unknown_field(var, field);
            }
            return;
        };

        // Servers may send several aliases of the same field. The first one received drives the
        // typed value, the others are kept as they are.
        if self
            .received
            .get(&field_type)
            .is_some_and(|received| received.var != var)
        {
            self.set_unknown_field(var, field);
            return;
        }

        self.received.insert(
            field_type,
            ReceivedField {
                var: var.to_string(),
                r#type: field.r#type,
                has_value: !field.values.is_empty(),
            },
        );

        let single = || field.first_value().to_string();
        let boolean = || parse_form_bool(field.first_value());
        let options = || field.options.clone();

        match field_type {
            RoomConfigFieldType::Name => self.title = single(),
            RoomConfigFieldType::Description => self.description = single(),
            RoomConfigFieldType::EnableLogging => self.logged = boolean(),
            RoomConfigFieldType::Language => self.language = single(),
            RoomConfigFieldType::Pubsub => self.associated_publish_subscribe_node = single(),
            RoomConfigFieldType::CanChangeSubject => self.occupants_can_change_subject = boolean(),
            RoomConfigFieldType::AllowInvites => self.occupants_can_invite = boolean(),
            RoomConfigFieldType::AllowPrivateMessages => {
                self.allow_private_messages.update_field(single(), options())
            }
            RoomConfigFieldType::MaxOccupantsNumber => {
                self.max_occupants_number.update_field(single(), options())
            }
            RoomConfigFieldType::IsPublic => self.public = boolean(),
            RoomConfigFieldType::IsPersistent => self.persistent = boolean(),
            RoomConfigFieldType::PresenceBroadcast => self
                .presence_broadcast
                .update_field(field.values.clone(), options()),
            RoomConfigFieldType::IsModerated => self.moderated = boolean(),
            RoomConfigFieldType::IsMembersOnly => self.members_only = boolean(),
            RoomConfigFieldType::RetrieveMembersList => self
                .retrieve_members_list
                .update_field(field.values.clone(), options()),
            RoomConfigFieldType::IsPasswordProtected => self.password_protected = boolean(),
            RoomConfigFieldType::Password => self.password = single(),
            RoomConfigFieldType::Owners => self.owners = parse_jids(&field.values),
            RoomConfigFieldType::Whois => self.whois.update_field(single(), options()),
            RoomConfigFieldType::MaxHistoryFetch => {
                self.max_history_fetch.update_field(single(), options())
            }
            RoomConfigFieldType::Admins => self.admins = parse_jids(&field.values),
        }
    }

    fn set_unknown_field(&mut self, var: &str, field: &FormField) {
        match self.fields.iter_mut().find(|f| f.var.as_deref() == Some(var)) {
            Some(existing) => *existing = field.clone(),
            None => self.fields.push(field.clone()),
        }
    }

    /// Sets the value of an unknown field. Does nothing if no such field was received.
    pub fn update_field_value_by_name(&mut self, name: &str, value: FieldValue) {
        let Some(field) = self
            .fields
            .iter_mut()
            .find(|f| f.var.as_deref() == Some(name))
        else {
            return;
        };
        field.values = value.into_values();
    }

    /// The var name used for `field_type`, i.e. the one the server sent or the canonical one.
    pub fn var_for(&self, field_type: RoomConfigFieldType) -> &str {
        self.received
            .get(&field_type)
            .map(|f| f.var.as_str())
            .unwrap_or_else(|| field_type.canonical_var())
    }

    fn values_for(&self, field_type: RoomConfigFieldType) -> Vec<String> {
        // An empty text is only sent as `<value/>` if the server sent one.
        let received_value = self
            .received
            .get(&field_type)
            .is_some_and(|received| received.has_value);
        let text = |value: &str| {
            if value.is_empty() && !received_value {
                return vec![];
            }
            vec![value.to_string()]
        };

        match field_type {
            RoomConfigFieldType::Name => text(&self.title),
            RoomConfigFieldType::Description => text(&self.description),
            RoomConfigFieldType::EnableLogging => bool_value(self.logged),
            RoomConfigFieldType::Language => text(&self.language),
            RoomConfigFieldType::Pubsub => text(&self.associated_publish_subscribe_node),
            RoomConfigFieldType::CanChangeSubject => bool_value(self.occupants_can_change_subject),
            RoomConfigFieldType::AllowInvites => bool_value(self.occupants_can_invite),
            RoomConfigFieldType::AllowPrivateMessages => {
                text(self.allow_private_messages.current_value())
            }
            RoomConfigFieldType::MaxOccupantsNumber => {
                text(self.max_occupants_number.current_value())
            }
            RoomConfigFieldType::IsPublic => bool_value(self.public),
            RoomConfigFieldType::IsPersistent => bool_value(self.persistent),
            RoomConfigFieldType::PresenceBroadcast => {
                self.presence_broadcast.current_values().to_vec()
            }
            RoomConfigFieldType::IsModerated => bool_value(self.moderated),
            RoomConfigFieldType::IsMembersOnly => bool_value(self.members_only),
            RoomConfigFieldType::RetrieveMembersList => {
                self.retrieve_members_list.current_values().to_vec()
            }
            RoomConfigFieldType::IsPasswordProtected => bool_value(self.password_protected),
            RoomConfigFieldType::Password => text(&self.password),
            RoomConfigFieldType::Owners => self.owners.iter().map(|j| j.to_string()).collect(),
            RoomConfigFieldType::Whois => text(self.whois.current_value()),
            RoomConfigFieldType::MaxHistoryFetch => text(self.max_history_fetch.current_value()),
            RoomConfigFieldType::Admins => self.admins.iter().map(|j| j.to_string()).collect(),
        }
    }

    /// Every known field exactly once followed by the unknown fields.
    pub fn get_form_data(&self) -> Vec<FormField> {
        let known = RoomConfigFieldType::ALL.into_iter().map(|field_type| {
            let r#type = self
                .received
                .get(&field_type)
                .map(|f| f.r#type)
                .unwrap_or_else(|| field_type.default_field_type());
            FormField::new(self.var_for(field_type), r#type)
                .with_values(self.values_for(field_type))
        });

        known.chain(self.fields.iter().cloned()).collect()
    }

    /// The form to send back to the room in an owner `set` request.
    pub fn submit_form(&self) -> DataForm {
        DataForm::new(DataFormType::Submit)
            .with_form_type(disco_feature::ROOM_CONFIG)
            .with_fields(self.get_form_data())
    }
}

impl From<&DataForm> for RoomConfigForm {
    fn from(form: &DataForm) -> Self {
        Self::new(form, &RoomConfigDefaults::default())
    }
}

fn parse_jids(values: &[String]) -> Vec<Jid> {
    values.iter().filter_map(|v| v.parse::<Jid>().ok()).collect()
}

fn bool_value(value: bool) -> Vec<String> {
    FieldValue::Bool(value).into_values()
}
