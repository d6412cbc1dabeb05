// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::Element;
use xmpp_parsers::disco::DiscoInfoResult;

use crate::domain::rooms::models::RoomDiscoInfo;
use crate::domain::shared::models::DataForm;
use crate::infra::xmpp::ParseError;

impl TryFrom<&Element> for RoomDiscoInfo {
    type Error = ParseError;

    fn try_from(root: &Element) -> Result<Self, Self::Error> {
        Ok(RoomDiscoInfo::from(DiscoInfoResult::try_from(root.clone())?))
    }
}

impl From<DiscoInfoResult> for RoomDiscoInfo {
    fn from(value: DiscoInfoResult) -> Self {
        let mut info = RoomDiscoInfo::default();
        info.set_features(value.features.iter().map(|feature| feature.var.as_str()));

        for form in value.extensions {
            info.set_form_data(&DataForm::from(form));
        }

        info
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;

    use crate::domain::rooms::models::Anonymity;

    use super::*;

    #[test]
    fn test_parse_disco_info() -> anyhow::Result<()> {
        let xml = r#"<query xmlns="http://jabber.org/protocol/disco#info">
          <identity category="conference" name="Lounge" type="text"/>
          <feature var="http://jabber.org/protocol/disco#info"/>
          <feature var="http://jabber.org/protocol/muc"/>
          <feature var="muc_public"/>
          <feature var="muc_open"/>
          <feature var="muc_nonanonymous"/>
          <feature var="muc_moderated"/>
          <x xmlns="jabber:x:data" type="result">
            <field var="FORM_TYPE" type="hidden"><value>http://jabber.org/protocol/muc#roominfo</value></field>
            <field var="muc#roominfo_lang" type="text-single"><value>en</value></field>
            <field var="muc#roomconfig_allowinvites" type="boolean"><value>1</value></field>
            <field var="muc#roominfo_contactjid" type="jid-multi"><value>owner@prose.org</value></field>
          </x>
        </query>"#;

        let info = RoomDiscoInfo::try_from(&Element::from_str(xml)?)?;

        assert!(info.public);
        assert!(info.open);
        assert!(info.moderated);
        assert!(!info.persistent);
        assert_eq!(info.anonymity, Some(Anonymity::NonAnonymous));
        assert_eq!(info.language.as_deref(), Some("en"));
        assert!(info.occupants_can_invite);
        assert_eq!(info.contact_jid.as_deref(), Some("owner@prose.org"));
        Ok(())
    }
}
