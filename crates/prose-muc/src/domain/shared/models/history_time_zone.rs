// prose-core-client/prose-muc
//
// Copyright: 2024, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, FixedOffset, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The time zone in which calendar days are determined for the discussion history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoryTimeZone {
    #[default]
    Local,
    Utc,
    Fixed { offset_seconds: i32 },
}

impl HistoryTimeZone {
    /// The calendar day `timestamp` falls on. An out-of-range fixed offset falls back to UTC.
    pub fn date_of(&self, timestamp: &DateTime<Utc>) -> NaiveDate {
        match self {
            Self::Local => timestamp.with_timezone(&Local).date_naive(),
            Self::Utc => timestamp.date_naive(),
            Self::Fixed { offset_seconds } => FixedOffset::east_opt(*offset_seconds)
                .map(|offset| timestamp.with_timezone(&offset).date_naive())
                .unwrap_or_else(|| timestamp.date_naive()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_fixed_offset_moves_day() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 23, 30, 0).unwrap();
        let tz = HistoryTimeZone::Fixed {
            offset_seconds: 3600,
        };
        assert_eq!(tz.date_of(&ts), NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert_eq!(
            HistoryTimeZone::Utc.date_of(&ts),
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
        );
    }
}
