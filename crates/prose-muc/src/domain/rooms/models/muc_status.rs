// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// Status codes carried in `<x xmlns='http://jabber.org/protocol/muc#user'/>` (XEP-0045, 15.6).
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum MucStatus {
    /// Any occupant is allowed to see the user's full JID.
    JidPublic,
    /// The user's affiliation changed while not in the room.
    AffiliationChanged,
    /// The room now shows unavailable members.
    UnavailableShown,
    /// The room now does not show unavailable members.
    UnavailableNotShown,
    /// A non-privacy-related configuration change has occurred.
    ConfigurationChanged,
    /// The presence refers to the user itself.
    SelfPresence,
    RoomLoggingEnabled,
    RoomLoggingDisabled,
    RoomNonAnonymous,
    RoomSemiAnonymous,
    RoomFullyAnonymous,
    RoomCreated,
    /// The service has assigned or modified the user's nickname.
    NicknameAssigned,
    Banned,
    /// The occupant is changing its nickname.
    NewNickname,
    Kicked,
    RemovedBecauseAffiliationChanged,
    RemovedBecauseNotMember,
    RemovedBecauseShutdown,
    Other(u16),
}

impl From<u16> for MucStatus {
    fn from(code: u16) -> Self {
        match code {
            100 => Self::JidPublic,
            101 => Self::AffiliationChanged,
            102 => Self::UnavailableShown,
            103 => Self::UnavailableNotShown,
            104 => Self::ConfigurationChanged,
            110 => Self::SelfPresence,
            170 => Self::RoomLoggingEnabled,
            171 => Self::RoomLoggingDisabled,
            172 => Self::RoomNonAnonymous,
            173 => Self::RoomSemiAnonymous,
            174 => Self::RoomFullyAnonymous,
            201 => Self::RoomCreated,
            210 => Self::NicknameAssigned,
            301 => Self::Banned,
            303 => Self::NewNickname,
            307 => Self::Kicked,
            321 => Self::RemovedBecauseAffiliationChanged,
            322 => Self::RemovedBecauseNotMember,
            332 => Self::RemovedBecauseShutdown,
            other => Self::Other(other),
        }
    }
}

impl From<MucStatus> for u16 {
    fn from(status: MucStatus) -> Self {
        match status {
            MucStatus::JidPublic => 100,
            MucStatus::AffiliationChanged => 101,
            MucStatus::UnavailableShown => 102,
            MucStatus::UnavailableNotShown => 103,
            MucStatus::ConfigurationChanged => 104,
            MucStatus::SelfPresence => 110,
            MucStatus::RoomLoggingEnabled => 170,
            MucStatus::RoomLoggingDisabled => 171,
            MucStatus::RoomNonAnonymous => 172,
            MucStatus::RoomSemiAnonymous => 173,
            MucStatus::RoomFullyAnonymous => 174,
            MucStatus::RoomCreated => 201,
            MucStatus::NicknameAssigned => 210,
            MucStatus::Banned => 301,
            MucStatus::NewNickname => 303,
            MucStatus::Kicked => 307,
            MucStatus::RemovedBecauseAffiliationChanged => 321,
            MucStatus::RemovedBecauseNotMember => 322,
            MucStatus::RemovedBecauseShutdown => 332,
            MucStatus::Other(code) => code,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct MucStatuses(Vec<MucStatus>);

impl MucStatuses {
    /// Returns true if all of `statuses` are present.
    pub fn contains(&self, statuses: &[MucStatus]) -> bool {
        statuses.iter().all(|s| self.0.contains(s))
    }

    /// Returns true if at least one of `statuses` is present.
    pub fn contains_any(&self, statuses: &[MucStatus]) -> bool {
        statuses.iter().any(|s| self.0.contains(s))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MucStatus> {
        self.0.iter()
    }
}

impl FromIterator<MucStatus> for MucStatuses {
    fn from_iter<T: IntoIterator<Item = MucStatus>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&[u16]> for MucStatuses {
    fn from(codes: &[u16]) -> Self {
        codes.iter().copied().map(MucStatus::from).collect()
    }
}
