// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, NaiveDate, Utc};
use parking_lot::RwLock;

use crate::domain::shared::models::HistoryTimeZone;

/// A message that was sent before we joined the room and got replayed by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayedMessage {
    pub nickname: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// The delayed messages of a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelayedMessages {
    pub date: NaiveDate,
    pub messages: Vec<DelayedMessage>,
}

#[derive(Debug, Default)]
pub struct DiscussionHistory {
    time_zone: HistoryTimeZone,
    days: RwLock<Vec<DelayedMessages>>,
}

impl DiscussionHistory {
    pub fn new(time_zone: HistoryTimeZone) -> Self {
        Self {
            time_zone,
            days: Default::default(),
        }
    }

    /// Appends a message to the bucket of its day. Returns false and drops the message if it is
    /// not newer than the last message of that day.
    pub fn add_message(
        &self,
        nickname: impl Into<String>,
        message: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> bool {
        let date = self.time_zone.date_of(&timestamp);
        let message = DelayedMessage {
            nickname: nickname.into(),
            message: message.into(),
            timestamp,
        };

        let mut days = self.days.write();

        let Some(day) = days.iter_mut().find(|day| day.date == date) else {
            days.push(DelayedMessages {
                date,
                messages: vec![message],
            });
            return true;
        };

        if let Some(last) = day.messages.last() {
            if message.timestamp <= last.timestamp {
                return false;
            }
        }
        day.messages.push(message);
        true
    }

    pub fn has_history(&self) -> bool {
        !self.days.read().is_empty()
    }

    pub fn get_history(&self) -> Vec<DelayedMessages> {
        self.days.read().clone()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_buckets_by_day() {
        let history = DiscussionHistory::new(HistoryTimeZone::Utc);
        assert!(!history.has_history());

        assert!(history.add_message("alice", "hi", Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()));
        assert!(history.add_message("bob", "hey", Utc.with_ymd_and_hms(2024, 1, 1, 11, 0, 0).unwrap()));
        assert!(history.add_message("alice", "again", Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap()));

        let days = history.get_history();
        assert_eq!(days.len(), 2);
        assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(days[0].messages.len(), 2);
        assert_eq!(days[1].messages[0].message, "again");
    }

    #[test]
    fn test_drops_messages_not_after_last_of_day() {
        let history = DiscussionHistory::new(HistoryTimeZone::Utc);
        let ts = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();

        assert!(history.add_message("alice", "first", ts));
        assert!(!history.add_message("bob", "same time", ts));
        assert!(!history.add_message("bob", "earlier", Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()));

        assert_eq!(history.get_history()[0].messages.len(), 1);
    }
}
