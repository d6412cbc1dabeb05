// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::FullJid;
use minidom::Element;
use tracing::debug;
use xmpp_parsers::muc::user::{Item, Status};

use crate::domain::rooms::models::{MucStatus, MucStatuses};
use crate::infra::xmpp::{ns, ElementExt, ParseError};

/// The `<x xmlns='http://jabber.org/protocol/muc#user'/>` payload of a presence or a message.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MucUser {
    pub status: MucStatuses,
    pub items: Vec<Item>,
}

impl MucUser {
    /// Parses the first muc#user payload in `payloads`, if any.
    pub fn from_payloads(payloads: &[Element]) -> Result<Option<Self>, ParseError> {
        payloads
            .iter()
            .find(|payload| payload.is("x", ns::MUC_USER))
            .map(MucUser::try_from)
            .transpose()
    }
}

impl TryFrom<&Element> for MucUser {
    type Error = ParseError;

    fn try_from(root: &Element) -> Result<Self, Self::Error> {
        root.expect_is("x", ns::MUC_USER)?;

        let mut items = vec![];
        let mut status = vec![];

        for child in root.children() {
            match child {
                _ if child.is("item", ns::MUC_USER) => items.push(parse_item(child)?),
                _ if child.is("status", ns::MUC_USER) => status.push(parse_status(child)?),
                // Invitations, declines and room destruction do not affect the roster.
                _ => (),
            }
        }

        Ok(MucUser {
            status: status.into_iter().collect(),
            items,
        })
    }
}

fn parse_status(elem: &Element) -> Result<MucStatus, ParseError> {
    match Status::try_from(elem.clone()) {
        Ok(status) => Ok(MucStatus::from(status)),
        // Status codes outside of the registry xmpp_parsers knows about, e.g. 174.
        Err(_) => Ok(MucStatus::from(elem.attr_req("code")?.parse::<u16>()?)),
    }
}

fn parse_item(elem: &Element) -> Result<Item, ParseError> {
    let Some(jid) = elem.attr("jid") else {
        return Ok(Item::try_from(elem.clone())?);
    };

    if jid.parse::<FullJid>().is_ok() {
        return Ok(Item::try_from(elem.clone())?);
    }

    debug!("Ignoring real JID '{jid}' of occupant item since it is not a full JID.");

    let item = elem
        .attrs()
        .filter(|(name, _)| *name != "jid")
        .fold(
            Element::builder("item", ns::MUC_USER),
            |builder, (name, value)| builder.attr(name, value),
        )
        .append_all(elem.children().cloned())
        .build();

    Ok(Item::try_from(item)?)
}
