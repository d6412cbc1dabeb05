// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use xmpp_parsers::muc::user;

use crate::domain::rooms::models::{Affiliation, Role};

impl From<user::Affiliation> for Affiliation {
    fn from(value: user::Affiliation) -> Self {
        match value {
            user::Affiliation::Owner => Affiliation::Owner,
            user::Affiliation::Admin => Affiliation::Admin,
            user::Affiliation::Member => Affiliation::Member,
            user::Affiliation::Outcast => Affiliation::Outcast,
            user::Affiliation::None => Affiliation::None,
        }
    }
}

impl From<user::Role> for Role {
    fn from(value: user::Role) -> Self {
        match value {
            user::Role::Moderator => Role::Moderator,
            user::Role::Participant => Role::Participant,
            user::Role::Visitor => Role::Visitor,
            user::Role::None => Role::None,
        }
    }
}
