// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::Jid;
use minidom::{Element, IntoAttributeValue};
use xmpp_parsers::presence::{Presence, Show};

use crate::domain::rooms::models::{Affiliation, PresenceEvent, Role};
use crate::infra::xmpp::type_conversions::muc_user::MucUser;
use crate::infra::xmpp::ParseError;

impl TryFrom<&Element> for PresenceEvent {
    type Error = ParseError;

    fn try_from(root: &Element) -> Result<Self, Self::Error> {
        let presence = Presence::try_from(root.clone())?;
        let Some(muc_user) = MucUser::from_payloads(&presence.payloads)? else {
            return Err(ParseError::Generic {
                msg: "Missing muc#user payload in presence.".to_string(),
            });
        };
        PresenceEvent::try_from((presence, muc_user))
    }
}

impl TryFrom<(Presence, MucUser)> for PresenceEvent {
    type Error = ParseError;

    fn try_from((presence, muc_user): (Presence, MucUser)) -> Result<Self, Self::Error> {
        let Some(Jid::Full(from)) = presence.from else {
            return Err(ParseError::Generic {
                msg: "Expected an occupant JID in the 'from' attribute of a room presence."
                    .to_string(),
            });
        };

        let status_message = presence
            .statuses
            .get("")
            .or_else(|| presence.statuses.values().next())
            .cloned()
            .unwrap_or_default();

        let mut event = PresenceEvent::new(from)
            .with_type(presence.type_.into_attribute_value().unwrap_or_default())
            .with_show(presence.show.map(show_str).unwrap_or_default())
            .with_status_message(status_message);

        event.status_codes = muc_user.status;

        if let Some(item) = muc_user.items.into_iter().next() {
            event.affiliation = Affiliation::from(item.affiliation).to_string();
            event.role = Role::from(item.role).to_string();
            event.real_jid = item.jid;
            event.new_nickname = item.nick;
        }

        Ok(event)
    }
}

fn show_str(show: Show) -> &'static str {
    match show {
        Show::Away => "away",
        Show::Chat => "chat",
        Show::Dnd => "dnd",
        Show::Xa => "xa",
    }
}
