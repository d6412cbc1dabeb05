// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use minidom::Element;
use pretty_assertions::assert_eq;

use prose_muc::domain::rooms::models::{Anonymity, RemovalReason};
use prose_muc::test::RecordedEvents;
use prose_muc::{
    bare, Affiliation, AppConfig, Role, Room, RoomEvent, RoomManager, RoomsEventHandler,
};

struct Fixture {
    rooms: Arc<RoomManager>,
    handler: RoomsEventHandler,
    room: Room,
    events: RecordedEvents,
}

impl Fixture {
    fn new() -> Self {
        let rooms = Arc::new(RoomManager::new());
        let room = AppConfig::default().new_room(bare!("coven@chat.shakespeare.lit").into());
        assert!(rooms.add_room(room.clone()));
        let events = RecordedEvents::attach(&room);

        Self {
            handler: RoomsEventHandler::new(rooms.clone()),
            rooms,
            room,
            events,
        }
    }

    fn receive(&self, xml: &str) -> Result<bool> {
        Ok(self.handler.handle_stanza(&Element::from_str(xml)?)?)
    }
}

#[test]
fn test_join_room_and_receive_occupants() -> Result<()> {
    let fixture = Fixture::new();

    fixture.receive(
        r#"<presence xmlns="jabber:client" from="coven@chat.shakespeare.lit/firstwitch">
          <x xmlns="http://jabber.org/protocol/muc#user">
            <item affiliation="owner" role="moderator"/>
          </x>
        </presence>"#,
    )?;
    fixture.receive(
        r#"<presence xmlns="jabber:client" from="coven@chat.shakespeare.lit/thirdwitch">
          <x xmlns="http://jabber.org/protocol/muc#user">
            <item affiliation="member" role="participant" jid="hag66@shakespeare.lit/pda"/>
            <status code="100"/>
            <status code="110"/>
            <status code="170"/>
          </x>
        </presence>"#,
    )?;
    fixture.receive(
        r#"<message xmlns="jabber:client" from="coven@chat.shakespeare.lit/secondwitch" type="groupchat">
          <subject>Fire Burn and Cauldron Bubble!</subject>
        </message>"#,
    )?;

    let events = fixture.events.take();
    assert_eq!(events.len(), 4);
    assert!(matches!(&events[0], RoomEvent::OccupantJoined(o) if o.nickname() == "firstwitch"));
    assert!(matches!(&events[1], RoomEvent::SelfJoined(o) if o.nickname() == "thirdwitch"));
    assert!(matches!(events[2], RoomEvent::LoggingEnabled));
    assert!(matches!(&events[3], RoomEvent::SubjectReceived { subject } if subject == "Fire Burn and Cauldron Bubble!"));

    let room = &fixture.room;
    assert!(room.is_self_occupant_in_the_room());
    assert!(!room.is_self_occupant_an_owner());
    assert_eq!(room.roster().len(), 2);
    assert_eq!(
        room.roster().get_occupant("firstwitch").map(|o| o.role()),
        Some(Role::Moderator)
    );
    Ok(())
}

#[test]
fn test_occupant_renamed_and_banned() -> Result<()> {
    let fixture = Fixture::new();

    fixture.receive(
        r#"<presence xmlns="jabber:client" from="coven@chat.shakespeare.lit/oldhag">
          <x xmlns="http://jabber.org/protocol/muc#user">
            <item affiliation="member" role="participant"/>
          </x>
        </presence>"#,
    )?;
    fixture.receive(
        r#"<presence xmlns="jabber:client" from="coven@chat.shakespeare.lit/oldhag" type="unavailable">
          <x xmlns="http://jabber.org/protocol/muc#user">
            <item affiliation="member" role="participant" nick="wiccarocks"/>
            <status code="303"/>
          </x>
        </presence>"#,
    )?;
    fixture.receive(
        r#"<presence xmlns="jabber:client" from="coven@chat.shakespeare.lit/wiccarocks" type="unavailable">
          <x xmlns="http://jabber.org/protocol/muc#user">
            <item affiliation="outcast" role="none"/>
            <status code="301"/>
          </x>
        </presence>"#,
    )?;

    let events = fixture.events.take();
    assert_eq!(events.len(), 3);
    assert!(matches!(
        &events[1],
        RoomEvent::NicknameChanged { occupant, old_nickname }
            if occupant.nickname() == "wiccarocks" && old_nickname == "oldhag"
    ));
    assert!(matches!(
        &events[2],
        RoomEvent::OccupantRemoved { occupant, reason: RemovalReason::Banned }
            if occupant.affiliation() == Affiliation::Outcast
    ));
    assert!(fixture.room.roster().is_empty());
    Ok(())
}

#[test]
fn test_disco_info_and_unhandled_stanzas() -> Result<()> {
    let fixture = Fixture::new();

    let consumed = fixture.receive(
        r#"<iq xmlns="jabber:client" from="coven@chat.shakespeare.lit" id="ik3vs715" to="hag66@shakespeare.lit/pda" type="result">
          <query xmlns="http://jabber.org/protocol/disco#info">
            <identity category="conference" name="A Dark Cave" type="text"/>
            <feature var="http://jabber.org/protocol/disco#info"/>
            <feature var="http://jabber.org/protocol/muc"/>
            <feature var="muc_passwordprotected"/>
            <feature var="muc_hidden"/>
            <feature var="muc_temporary"/>
            <feature var="muc_open"/>
            <feature var="muc_unmoderated"/>
            <feature var="muc_nonanonymous"/>
          </query>
        </iq>"#,
    )?;
    assert!(consumed);

    let properties = fixture.room.properties();
    assert!(properties.password_protected);
    assert!(properties.open);
    assert!(!properties.public);
    assert!(!properties.persistent);
    assert_eq!(properties.anonymity, Some(Anonymity::NonAnonymous));

    assert!(!fixture.receive(
        r#"<iq xmlns="jabber:client" from="coven@chat.shakespeare.lit" id="1" type="get">
          <ping xmlns="urn:xmpp:ping"/>
        </iq>"#
    )?);
    Ok(())
}

#[test]
fn test_leaving_room_stops_routing() -> Result<()> {
    let fixture = Fixture::new();
    assert!(fixture.rooms.leave_room(fixture.room.id()));

    let result = fixture.receive(
        r#"<presence xmlns="jabber:client" from="coven@chat.shakespeare.lit/firstwitch">
          <x xmlns="http://jabber.org/protocol/muc#user">
            <item affiliation="owner" role="moderator"/>
          </x>
        </presence>"#,
    );
    assert!(result.is_err());
    assert!(fixture.events.take().is_empty());
    Ok(())
}

#[test]
fn test_contact_stanzas_are_not_consumed() -> Result<()> {
    let fixture = Fixture::new();

    assert!(!fixture.receive(
        r#"<presence xmlns="jabber:client" from="friend@prose.org/phone"><show>away</show></presence>"#
    )?);
    assert!(!fixture.receive(
        r#"<message xmlns="jabber:client" from="friend@prose.org/phone" type="chat"><body>Hi</body></message>"#
    )?);

    assert!(fixture.events.take().is_empty());
    assert!(fixture.room.roster().is_empty());
    Ok(())
}
