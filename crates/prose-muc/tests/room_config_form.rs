// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::str::FromStr;

use anyhow::Result;
use minidom::Element;
use pretty_assertions::assert_eq;

use prose_muc::domain::rooms::models::FieldValue;
use prose_muc::domain::shared::models::{DataForm, DataFormType, FieldType, FormField};
use prose_muc::{jid, AppConfig, RoomConfigForm};

fn form_data_by_var(form: &RoomConfigForm) -> HashMap<String, Vec<String>> {
    form.get_form_data()
        .into_iter()
        .filter_map(|f| Some((f.var?, f.values)))
        .collect()
}

#[test]
fn test_decodes_known_fields_and_keeps_vendor_fields() {
    let data_form = DataForm::new(DataFormType::Form).with_fields([
        FormField::new("muc#roomconfig_roomname", FieldType::TextSingle).with_value("My Room"),
        FormField::new("muc#roomconfig_persistentroom", FieldType::Boolean).with_value("true"),
        FormField::new("x-vendor-flag", FieldType::TextSingle).with_value("42"),
    ]);

    let form = RoomConfigForm::from(&data_form);

    assert_eq!(form.title, "My Room");
    assert!(form.persistent);
    assert_eq!(
        form_data_by_var(&form).get("x-vendor-flag"),
        Some(&vec!["42".to_string()])
    );
}

#[test]
fn test_round_trips_received_fields() -> Result<()> {
    let xml = r#"<x xmlns="jabber:x:data" type="form">
      <title>Configuration for "coven" Room</title>
      <field type="hidden" var="FORM_TYPE">
        <value>http://jabber.org/protocol/muc#roomconfig</value>
      </field>
      <field type="fixed"><value>Room Settings</value></field>
      <field label="Natural-Language Room Name" type="text-single" var="muc#roomconfig_roomname">
        <value>A Dark Cave</value>
      </field>
      <field label="Short Description of Room" type="text-single" var="muc#roomconfig_roomdesc">
        <value>The place for all good witches!</value>
      </field>
      <field label="Enable Public Logging?" type="boolean" var="muc#roomconfig_enablearchiving">
        <value>true</value>
      </field>
      <field label="Maximum Number of Occupants" type="list-single" var="muc#roomconfig_maxusers">
        <value>20</value>
        <option label="10"><value>10</value></option>
        <option label="20"><value>20</value></option>
        <option label="None"><value>none</value></option>
      </field>
      <field label="Roles for which Presence is Broadcasted" type="list-multi" var="muc#roomconfig_presencebroadcast">
        <value>moderator</value>
        <value>participant</value>
        <option label="Moderator"><value>moderator</value></option>
        <option label="Participant"><value>participant</value></option>
        <option label="Visitor"><value>visitor</value></option>
      </field>
      <field label="Room Owners" type="jid-multi" var="muc#roomconfig_roomowners">
        <value>wiccarocks@shakespeare.lit</value>
        <value>hecate@shakespeare.lit</value>
      </field>
      <field label="Vendor Retention" type="list-single" var="x-vendor-retention">
        <value>30d</value>
        <option><value>30d</value></option>
        <option><value>1y</value></option>
      </field>
    </x>"#;

    let data_form = DataForm::try_from(&Element::from_str(xml)?)?;
    let form = AppConfig::default().room_config_form(&data_form);

    assert!(form.logged);
    assert_eq!(form.max_occupants_number.current_value(), "20");
    assert_eq!(
        form.max_occupants_number.option_values(),
        vec!["10", "20", "none"]
    );
    assert_eq!(
        form.owners,
        vec![
            jid!("wiccarocks@shakespeare.lit"),
            jid!("hecate@shakespeare.lit")
        ]
    );

    let emitted = form_data_by_var(&form);
    for field in data_form.fields.iter().filter(|f| f.r#type != FieldType::Fixed) {
        let var = field.var.clone().unwrap();
        assert_eq!(emitted.get(&var), Some(&field.values), "field {var}");
    }

    let submit = form.submit_form();
    assert_eq!(submit.r#type, DataFormType::Submit);
    assert_eq!(
        submit.form_type.as_deref(),
        Some("http://jabber.org/protocol/muc#roomconfig")
    );
    assert!(submit.field("muc#roomconfig_enablelogging").is_none());
    assert!(submit.field("muc#roomconfig_enablearchiving").is_some());
    Ok(())
}

#[test]
fn test_invalid_jids_are_dropped() {
    let data_form = DataForm::new(DataFormType::Form).with_fields([FormField::new(
        "muc#roomconfig_roomadmins",
        FieldType::JidMulti,
    )
    .with_values(["crone1@shakespeare.lit", "@invalid", "crone2@shakespeare.lit"])]);

    let form = RoomConfigForm::from(&data_form);

    assert_eq!(
        form.admins,
        vec![
            jid!("crone1@shakespeare.lit"),
            jid!("crone2@shakespeare.lit")
        ]
    );
}

#[test]
fn test_edit_unknown_field_and_resubmit() {
    let data_form = DataForm::new(DataFormType::Form).with_fields([
        FormField::new("x-vendor-flag", FieldType::TextSingle).with_value("42"),
        FormField::new("x-vendor-tags", FieldType::TextMulti).with_values(["a", "b"]),
    ]);
    let mut form = RoomConfigForm::from(&data_form);

    form.update_field_value_by_name("x-vendor-flag", FieldValue::Text("43".to_string()));
    form.update_field_value_by_name("x-vendor-tags", FieldValue::Multi(vec!["c".to_string()]));
    form.update_field_value_by_name("x-missing", FieldValue::Bool(true));

    let emitted = form_data_by_var(&form);
    assert_eq!(emitted.get("x-vendor-flag"), Some(&vec!["43".to_string()]));
    assert_eq!(emitted.get("x-vendor-tags"), Some(&vec!["c".to_string()]));
    assert!(!emitted.contains_key("x-missing"));
}

#[test]
fn test_round_trips_aliases_and_empty_values() -> Result<()> {
    let xml = r#"<x xmlns="jabber:x:data" type="form">
      <field type="hidden" var="FORM_TYPE">
        <value>http://jabber.org/protocol/muc#roomconfig</value>
      </field>
      <field label="Allow Occupants to Invite Others" type="boolean" var="muc#roomconfig_allowinvites">
        <value>true</value>
      </field>
      <field label="Allow members to invite new members" type="boolean" var="{http://prosody.im/protocol/muc}roomconfig_allowmemberinvites">
        <value>false</value>
      </field>
      <field label="Enable Logging" type="boolean" var="muc#roomconfig_enablelogging">
        <value>false</value>
      </field>
      <field label="Archive messages" type="boolean" var="mam">
        <value>true</value>
      </field>
      <field label="Short Description of Room" type="text-single" var="muc#roomconfig_roomdesc">
        <value></value>
      </field>
    </x>"#;

    let data_form = DataForm::try_from(&Element::from_str(xml)?)?;
    let form = AppConfig::default().room_config_form(&data_form);

    assert!(form.occupants_can_invite);
    assert!(!form.logged);
    assert_eq!(form.description, "");

    let emitted = form_data_by_var(&form);
    for field in &data_form.fields {
        let var = field.var.clone().unwrap();
        assert_eq!(emitted.get(&var), Some(&field.values), "field {var}");
    }
    assert_eq!(
        emitted.get("muc#roomconfig_roomdesc"),
        Some(&vec![String::new()])
    );

    let submit = Element::from(&form.submit_form());
    let resubmitted = DataForm::try_from(&submit)?;
    assert_eq!(
        resubmitted
            .field("{http://prosody.im/protocol/muc}roomconfig_allowmemberinvites")
            .map(|f| f.values.clone()),
        Some(vec!["false".to_string()])
    );
    assert_eq!(
        resubmitted.field("mam").map(|f| f.values.clone()),
        Some(vec!["true".to_string()])
    );
    assert_eq!(
        resubmitted
            .field("muc#roomconfig_roomdesc")
            .map(|f| f.values.clone()),
        Some(vec![String::new()])
    );
    Ok(())
}
