// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use xmpp_parsers::muc::user::Status;

use crate::domain::rooms::models::MucStatus;

impl From<Status> for MucStatus {
    fn from(value: Status) -> Self {
        match value {
            Status::NonAnonymousRoom => MucStatus::JidPublic,
            Status::AffiliationChange => MucStatus::AffiliationChanged,
            Status::ConfigShowsUnavailableMembers => MucStatus::UnavailableShown,
            Status::ConfigHidesUnavailableMembers => MucStatus::UnavailableNotShown,
            Status::ConfigNonPrivacyRelated => MucStatus::ConfigurationChanged,
            Status::SelfPresence => MucStatus::SelfPresence,
            Status::ConfigRoomLoggingEnabled => MucStatus::RoomLoggingEnabled,
            Status::ConfigRoomLoggingDisabled => MucStatus::RoomLoggingDisabled,
            Status::ConfigRoomNonAnonymous => MucStatus::RoomNonAnonymous,
            Status::ConfigRoomSemiAnonymous => MucStatus::RoomSemiAnonymous,
            Status::RoomHasBeenCreated => MucStatus::RoomCreated,
            Status::AssignedNick => MucStatus::NicknameAssigned,
            Status::Banned => MucStatus::Banned,
            Status::NewNick => MucStatus::NewNickname,
            Status::Kicked => MucStatus::Kicked,
            Status::RemovalFromRoom => MucStatus::RemovedBecauseAffiliationChanged,
            Status::ConfigMembersOnly => MucStatus::RemovedBecauseNotMember,
            Status::ServiceShutdown => MucStatus::RemovedBecauseShutdown,
            Status::ServiceErrorKick => MucStatus::Other(333),
        }
    }
}
