// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use jid::FullJid;
use parking_lot::RwLock;

use crate::domain::rooms::models::privileges::{AffiliationPrivilege, RolePrivilege, Standing};
use crate::domain::rooms::models::{Affiliation, Role};
use crate::domain::shared::models::PresenceStatus;

/// A participant of a room. Cloning an `Occupant` yields another handle to the same participant,
/// so that changes applied by the roster are visible to everyone holding it.
#[derive(Debug, Clone)]
pub struct Occupant {
    inner: Arc<RwLock<OccupantInfo>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OccupantInfo {
    /// The nickname of the occupant, unique within the room.
    pub nickname: String,
    /// The real JID of the occupant. Only available in non-anonymous rooms or to moderators.
    pub real_jid: Option<FullJid>,
    pub affiliation: Affiliation,
    pub role: Role,
    pub status: PresenceStatus,
}

impl Occupant {
    pub fn new(
        nickname: impl Into<String>,
        real_jid: Option<FullJid>,
        affiliation: Affiliation,
        role: Role,
        status: PresenceStatus,
    ) -> Self {
        Self {
            inner: Arc::new(RwLock::new(OccupantInfo {
                nickname: nickname.into(),
                real_jid,
                affiliation,
                role,
                status,
            })),
        }
    }

    /// Returns true if both handles refer to the same participant.
    pub fn ptr_eq(&self, other: &Occupant) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// A copy of the current state of the occupant.
    pub fn info(&self) -> OccupantInfo {
        self.inner.read().clone()
    }

    pub fn nickname(&self) -> String {
        self.inner.read().nickname.clone()
    }

    pub fn real_jid(&self) -> Option<FullJid> {
        self.inner.read().real_jid.clone()
    }

    pub fn affiliation(&self) -> Affiliation {
        self.inner.read().affiliation
    }

    pub fn role(&self) -> Role {
        self.inner.read().role
    }

    pub fn status(&self) -> PresenceStatus {
        self.inner.read().status.clone()
    }

    pub fn standing(&self) -> Standing {
        let info = self.inner.read();
        Standing::new(info.affiliation, info.role)
    }
}

impl Occupant {
    pub(crate) fn set_nickname(&self, nickname: impl Into<String>) {
        self.inner.write().nickname = nickname.into();
    }

    /// Replaces everything but the nickname.
    pub(crate) fn update(
        &self,
        real_jid: Option<FullJid>,
        affiliation: Affiliation,
        role: Role,
        status: PresenceStatus,
    ) {
        let mut info = self.inner.write();
        info.real_jid = real_jid;
        info.affiliation = affiliation;
        info.role = role;
        info.status = status;
    }

    pub fn update_status(&self, status: PresenceStatus) {
        self.inner.write().status = status;
    }

    pub fn change_role(&self, role: Role) {
        self.inner.write().role = role;
    }

    pub fn change_role_to_none(&self) {
        self.change_role(Role::None)
    }

    pub fn change_role_to_visitor(&self) {
        self.change_role(Role::Visitor)
    }

    pub fn change_role_to_participant(&self) {
        self.change_role(Role::Participant)
    }

    pub fn change_role_to_moderator(&self) {
        self.change_role(Role::Moderator)
    }

    pub fn change_affiliation(&self, affiliation: Affiliation) {
        self.inner.write().affiliation = affiliation;
    }

    pub fn change_affiliation_to_none(&self) {
        self.change_affiliation(Affiliation::None)
    }

    pub fn change_affiliation_to_member(&self) {
        self.change_affiliation(Affiliation::Member)
    }

    pub fn change_affiliation_to_admin(&self) {
        self.change_affiliation(Affiliation::Admin)
    }

    pub fn change_affiliation_to_owner(&self) {
        self.change_affiliation(Affiliation::Owner)
    }

    /// Same as changing the affiliation to outcast.
    pub fn ban(&self) {
        self.change_affiliation(Affiliation::Outcast)
    }
}

impl Occupant {
    pub fn has_affiliation_privilege(&self, privilege: AffiliationPrivilege) -> bool {
        self.affiliation().can(privilege)
    }

    pub fn has_role_privilege(&self, privilege: RolePrivilege) -> bool {
        self.role().can(privilege)
    }

    pub fn can_modify_subject(&self) -> bool {
        self.has_role_privilege(RolePrivilege::ModifySubject)
    }

    pub fn can_send_messages_to_all(&self) -> bool {
        self.has_role_privilege(RolePrivilege::SendMessagesToAll)
    }

    pub fn can_send_private_messages(&self) -> bool {
        self.has_role_privilege(RolePrivilege::SendPrivateMessages)
    }

    pub fn can_invite_others(&self) -> bool {
        self.has_role_privilege(RolePrivilege::InviteOthers)
    }

    pub fn can_grant_voice(&self) -> bool {
        self.has_role_privilege(RolePrivilege::GrantVoice)
    }

    pub fn can_change_room_configuration(&self) -> bool {
        self.has_affiliation_privilege(AffiliationPrivilege::ChangeRoomConfiguration)
    }

    pub fn can_destroy_room(&self) -> bool {
        self.has_affiliation_privilege(AffiliationPrivilege::DestroyRoom)
    }

    pub fn can_change_affiliation(&self, target: &Occupant) -> bool {
        self.standing().can_change_affiliation(&target.standing())
    }

    pub fn can_change_role(&self, target: &Occupant) -> bool {
        self.standing().can_change_role(&target.standing())
    }

    pub fn can_kick_occupant(&self, target: &Occupant) -> bool {
        self.standing().can_kick(&target.standing())
    }

    pub fn can_revoke_voice(&self, target: &Occupant) -> bool {
        self.standing().can_revoke_voice(&target.standing())
    }
}
