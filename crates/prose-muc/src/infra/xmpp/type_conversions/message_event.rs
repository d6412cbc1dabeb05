// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::Utc;
use minidom::Element;
use xmpp_parsers::delay::Delay;
use xmpp_parsers::message::{Message, MessageType};

use crate::domain::rooms::models::MessageEvent;
use crate::infra::xmpp::type_conversions::muc_user::MucUser;
use crate::infra::xmpp::{ns, ParseError};

impl TryFrom<&Element> for MessageEvent {
    type Error = ParseError;

    fn try_from(root: &Element) -> Result<Self, Self::Error> {
        MessageEvent::try_from(Message::try_from(root.clone())?)
    }
}

impl TryFrom<Message> for MessageEvent {
    type Error = ParseError;

    fn try_from(message: Message) -> Result<Self, Self::Error> {
        let Some(from) = message.from.clone() else {
            return Err(ParseError::Generic {
                msg: "Missing 'from' attribute in message.".to_string(),
            });
        };

        let mut event = MessageEvent::new(from);

        // An empty <subject/> clears the subject, so it must not be mapped to `None`.
        event.subject = message
            .get_best_subject(vec![])
            .map(|(_, subject)| subject.0.clone());
        event.body = message
            .get_best_body(vec![])
            .map(|(_, body)| body.0.clone())
            .filter(|body| !body.is_empty());

        if let Some(delay) = message
            .payloads
            .iter()
            .find(|payload| payload.is("delay", ns::DELAY))
        {
            let delay = Delay::try_from(delay.clone())?;
            event.delay = Some(delay.stamp.0.with_timezone(&Utc));
        }

        if let Some(muc_user) = MucUser::from_payloads(&message.payloads)? {
            event.status_codes = muc_user.status;
        }

        Ok(event)
    }
}

/// Whether `message` belongs to a room, i.e. is a groupchat message or carries a muc#user payload.
pub fn is_room_message(message: &Message) -> bool {
    message.type_ == MessageType::Groupchat
        || message
            .payloads
            .iter()
            .any(|payload| payload.is("x", ns::MUC_USER))
}
