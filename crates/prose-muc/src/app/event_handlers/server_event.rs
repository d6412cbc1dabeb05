// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::BareJid;
use minidom::Element;
use xmpp_parsers::message::Message;
use xmpp_parsers::presence::Presence;

use crate::domain::rooms::models::{MessageEvent, PresenceEvent, RoomDiscoInfo};
use crate::domain::shared::models::RoomId;
use crate::infra::xmpp::type_conversions::message_event::is_room_message;
use crate::infra::xmpp::type_conversions::muc_user::MucUser;
use crate::infra::xmpp::{ns, ElementExt, ParseError};

#[derive(Debug, Clone, PartialEq)]
pub enum ServerEvent {
    Presence(PresenceEvent),
    Message(MessageEvent),
    DiscoInfo {
        room_id: RoomId,
        info: RoomDiscoInfo,
    },
}

impl ServerEvent {
    /// Parses a room `<presence/>`, a room `<message/>` or a disco#info result `<iq/>`. Returns
    /// `None` for anything else, e.g. the presence of a contact.
    pub fn from_stanza(stanza: &Element) -> Result<Option<Self>, ParseError> {
        match stanza.name() {
            "presence" => {
                let presence = Presence::try_from(stanza.clone())?;
                let Some(muc_user) = MucUser::from_payloads(&presence.payloads)? else {
                    return Ok(None);
                };
                Ok(Some(Self::Presence(PresenceEvent::try_from((
                    presence, muc_user,
                ))?)))
            }
            "message" => {
                let message = Message::try_from(stanza.clone())?;
                if !is_room_message(&message) {
                    return Ok(None);
                }
                Ok(Some(Self::Message(MessageEvent::try_from(message)?)))
            }
            "iq" => {
                let Some(query) = stanza.get_child("query", ns::DISCO_INFO) else {
                    return Ok(None);
                };
                if stanza.attr("type") != Some("result") {
                    return Ok(None);
                }
                let room_id = stanza.attr_req("from")?.parse::<BareJid>()?;
                Ok(Some(Self::DiscoInfo {
                    room_id: room_id.into(),
                    info: RoomDiscoInfo::try_from(query)?,
                }))
            }
            _ => Ok(None),
        }
    }
}
