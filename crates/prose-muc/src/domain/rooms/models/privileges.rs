// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::rooms::models::{Affiliation, Role};

/// Capabilities granted by an affiliation (XEP-0045, 5.2.1).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AffiliationPrivilege {
    EnterOpenRoom,
    RegisterWithOpenRoom,
    RetrieveMemberList,
    EnterMembersOnlyRoom,
    BanMembersAndUnaffiliated,
    EditMemberList,
    AssignOrRemoveModerator,
    EditAdminList,
    EditOwnerList,
    ChangeRoomConfiguration,
    DestroyRoom,
}

/// Capabilities granted by a role (XEP-0045, 5.1.1).
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RolePrivilege {
    PresentInRoom,
    ReceiveMessages,
    ReceiveOccupantPresence,
    BroadcastPresence,
    ChangeAvailability,
    ChangeNickname,
    SendPrivateMessages,
    InviteOthers,
    SendMessagesToAll,
    ModifySubject,
    KickParticipantsAndVisitors,
    GrantVoice,
    RevokeVoice,
}

// Columns: Outcast, None, Member, Admin, Owner
pub(crate) const AFFILIATION_PRIVILEGES: [[bool; 5]; 11] = [
    [false, true, true, true, true],
    [false, true, false, false, false],
    [false, false, true, true, true],
    [false, false, true, true, true],
    [false, false, false, true, true],
    [false, false, false, true, true],
    [false, false, false, true, true],
    [false, false, false, false, true],
    [false, false, false, false, true],
    [false, false, false, false, true],
    [false, false, false, false, true],
];

// Columns: None, Visitor, Participant, Moderator
pub(crate) const ROLE_PRIVILEGES: [[bool; 4]; 13] = [
    [false, true, true, true],
    [false, true, true, true],
    [false, true, true, true],
    [false, true, true, true],
    [false, true, true, true],
    [false, true, true, true],
    [false, true, true, true],
    [false, true, true, true],
    [false, false, true, true],
    [false, false, true, true],
    [false, false, false, true],
    [false, false, false, true],
    [false, false, false, true],
];

/// The affiliation and role of an occupant, i.e. everything needed to decide what it may do
/// to another occupant.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct Standing {
    pub affiliation: Affiliation,
    pub role: Role,
}

impl Standing {
    pub fn new(affiliation: Affiliation, role: Role) -> Self {
        Self { affiliation, role }
    }

    pub fn can_change_affiliation(&self, target: &Standing) -> bool {
        match self.affiliation {
            Affiliation::Owner => true,
            Affiliation::Admin => !target.affiliation.is_moderator(),
            _ => false,
        }
    }

    pub fn can_change_role(&self, target: &Standing) -> bool {
        self.affiliation.is_moderator() && !target.affiliation.is_moderator()
    }

    pub fn can_kick(&self, target: &Standing) -> bool {
        if !self.role.can(RolePrivilege::KickParticipantsAndVisitors) {
            return false;
        }
        if !matches!(target.role, Role::Participant | Role::Visitor) {
            return false;
        }
        if self.affiliation.is_owner() {
            return !target.affiliation.is_owner();
        }
        !target.affiliation.is_moderator()
    }

    pub fn can_revoke_voice(&self, target: &Standing) -> bool {
        if target.affiliation.is_moderator() {
            return false;
        }
        self.role.is_moderator()
    }
}
