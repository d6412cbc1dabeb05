// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub const DATA_FORMS: &str = "jabber:x:data";
pub const DELAY: &str = "urn:xmpp:delay";
pub const DISCO_INFO: &str = "http://jabber.org/protocol/disco#info";
pub const MUC_USER: &str = "http://jabber.org/protocol/muc#user";

/// https://xmpp.org/extensions/xep-0045.html#registrar-formtype-owner
pub mod roomconfig {
    /// Whether to Allow Occupants to Invite Others
    pub const ALLOW_INVITES: &str = "muc#roomconfig_allowinvites";
    /// Allow members to invite new members
    pub const ALLOW_MEMBER_INVITES: &str =
        "{http://prosody.im/protocol/muc}roomconfig_allowmemberinvites";
    /// Roles that May Send Private Messages
    pub const ALLOW_PM: &str = "muc#roomconfig_allowpm";
    /// ejabberd's variant of `ALLOW_PM`
    pub const ALLOW_PRIVATE_MESSAGES: &str = "allow_private_messages";
    /// Whether to Allow Occupants to Change Subject
    pub const CHANGE_SUBJECT: &str = "muc#roomconfig_changesubject";
    pub const ENABLE_ARCHIVING: &str = "muc#roomconfig_enablearchiving";
    /// Whether to Enable Public Logging of Room Conversations
    pub const ENABLE_LOGGING: &str = "muc#roomconfig_enablelogging";
    /// Roles and Affiliations that May Retrieve Member List
    pub const GET_MEMBER_LIST: &str = "muc#roomconfig_getmemberlist";
    /// Maximum number of history messages returned by room
    pub const HISTORY_LENGTH: &str = "muc#roomconfig_historylength";
    /// Natural Language for Room Discussions
    pub const LANG: &str = "muc#roomconfig_lang";
    /// Maximum Number of History Messages Returned by Room
    pub const MAX_HISTORY_FETCH: &str = "muc#maxhistoryfetch";
    /// Maximum Number of Room Occupants
    pub const MAX_USERS: &str = "muc#roomconfig_maxusers";
    /// Message archiving as announced by some servers
    pub const MAM: &str = "mam";
    /// Whether to Make Room Members-Only
    pub const MEMBERS_ONLY: &str = "muc#roomconfig_membersonly";
    /// Whether to Make Room Moderated
    pub const MODERATED_ROOM: &str = "muc#roomconfig_moderatedroom";
    /// Whether a Password is Required to Enter
    pub const PASSWORD_PROTECTED_ROOM: &str = "muc#roomconfig_passwordprotectedroom";
    /// Whether to Make Room Persistent
    pub const PERSISTENT_ROOM: &str = "muc#roomconfig_persistentroom";
    /// Roles for which Presence is Broadcasted
    pub const PRESENCE_BROADCAST: &str = "muc#roomconfig_presencebroadcast";
    /// Whether to Allow Public Searching for Room
    pub const PUBLIC_ROOM: &str = "muc#roomconfig_publicroom";
    /// XMPP URI of Associated Publish-Subscribe Node
    pub const PUBSUB: &str = "muc#roomconfig_pubsub";
    /// Full List of Room Admins
    pub const ROOM_ADMINS: &str = "muc#roomconfig_roomadmins";
    /// Short Description of Room
    pub const ROOM_DESC: &str = "muc#roomconfig_roomdesc";
    /// Natural-Language Room Name
    pub const ROOM_NAME: &str = "muc#roomconfig_roomname";
    /// Full List of Room Owners
    pub const ROOM_OWNERS: &str = "muc#roomconfig_roomowners";
    /// The Room Password
    pub const ROOM_SECRET: &str = "muc#roomconfig_roomsecret";
    /// Affiliations that May Discover Real JIDs of Occupants
    pub const WHOIS: &str = "muc#roomconfig_whois";
}

/// https://xmpp.org/extensions/xep-0045.html#registrar-formtype-roominfo
pub mod roominfo {
    pub const ALLOW_PM: &str = "muc#roomconfig_allowpm";
    pub const ALLOW_INVITES: &str = "muc#roomconfig_allowinvites";
    pub const ALLOW_MEMBER_INVITES: &str =
        "{http://prosody.im/protocol/muc}roomconfig_allowmemberinvites";
    /// Whether occupants may change the subject
    pub const CHANGE_SUBJECT: &str = "muc#roominfo_changesubject";
    /// Contact Addresses (normally, room owner or owners)
    pub const CONTACT_JID: &str = "muc#roominfo_contactjid";
    /// Short Description of Room
    pub const DESCRIPTION: &str = "muc#roominfo_description";
    pub const ENABLE_LOGGING: &str = "muc#roomconfig_enablelogging";
    /// Natural Language for Room Discussions
    pub const LANG: &str = "muc#roominfo_lang";
    /// Current Number of Occupants in Room
    pub const OCCUPANTS: &str = "muc#roominfo_occupants";
    pub const ROOM_NAME: &str = "muc#roomconfig_roomname";
}

/// https://xmpp.org/extensions/xep-0045.html#registrar-features
pub mod disco_feature {
    /// Hidden room in Multi-User Chat (MUC)
    pub const HIDDEN: &str = "muc_hidden";
    /// Members-only room in Multi-User Chat (MUC)
    pub const MEMBERS_ONLY: &str = "muc_membersonly";
    /// Moderated room in Multi-User Chat (MUC)
    pub const MODERATED: &str = "muc_moderated";
    /// Non-anonymous room in Multi-User Chat (MUC)
    pub const NON_ANONYMOUS: &str = "muc_nonanonymous";
    /// Open room in Multi-User Chat (MUC)
    pub const OPEN: &str = "muc_open";
    /// Password-protected room in Multi-User Chat (MUC)
    pub const PASSWORD_PROTECTED: &str = "muc_passwordprotected";
    /// Persistent room in Multi-User Chat (MUC)
    pub const PERSISTENT: &str = "muc_persistent";
    /// Public room in Multi-User Chat (MUC)
    pub const PUBLIC: &str = "muc_public";
    /// XEP-0077: In-Band Registration
    pub const REGISTER_IN_BAND: &str = "jabber:iq:register";
    /// https://xmpp.org/extensions/xep-0045.html#registrar-formtype-request
    pub const REQUEST: &str = "http://jabber.org/protocol/muc#request";
    /// Support for the muc#roomconfig FORM_TYPE
    pub const ROOM_CONFIG: &str = "http://jabber.org/protocol/muc#roomconfig";
    /// Support for the muc#roominfo FORM_TYPE
    pub const ROOM_INFO: &str = "http://jabber.org/protocol/muc#roominfo";
    /// Semi-anonymous room in Multi-User Chat (MUC)
    pub const SEMI_ANONYMOUS: &str = "muc_semianonymous";
    /// Temporary room in Multi-User Chat (MUC)
    pub const TEMPORARY: &str = "muc_temporary";
    /// Unmoderated room in Multi-User Chat (MUC)
    pub const UNMODERATED: &str = "muc_unmoderated";
    /// Unsecured room in Multi-User Chat (MUC)
    pub const UNSECURED: &str = "muc_unsecured";
}
