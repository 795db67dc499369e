//! Persisted timer state.
//!
//! The record on disk mirrors what earlier pomox versions wrote, so an
//! inactive timer keeps empty strings for its timestamps rather than nulls.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a timer is running, and when it ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerState {
    pub active: bool,
    #[serde(with = "empty_as_none", default)]
    pub start_time: Option<DateTime<Utc>>,
    /// Whole minutes, rounded up.
    #[serde(default)]
    pub duration: u64,
    #[serde(with = "empty_as_none", default)]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub daemon_pid: Option<u32>,
}

impl TimerState {
    pub fn empty() -> Self {
        Self {
            active: false,
            start_time: None,
            duration: 0,
            end_time: None,
            daemon_pid: None,
        }
    }

    pub fn running(
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        duration_minutes: u64,
    ) -> Self {
        Self {
            active: true,
            start_time: Some(start_time),
            duration: duration_minutes,
            end_time: Some(end_time),
            daemon_pid: None,
        }
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::empty()
    }
}

/// `""` <-> `None`, RFC 3339 otherwise.
mod empty_as_none {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => DateTime::parse_from_rfc3339(s)
                .map(|dt| Some(dt.with_timezone(&Utc)))
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn empty_state_serializes_blank_timestamps() {
        let json = serde_json::to_value(TimerState::empty()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "active": false,
                "startTime": "",
                "duration": 0,
                "endTime": "",
                "daemonPid": null,
            })
        );
    }

    #[test]
    fn running_state_roundtrips_through_iso_strings() {
        let start = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 15, 10, 25, 0).unwrap();
        let mut state = TimerState::running(start, end, 25);
        state.daemon_pid = Some(4242);

        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"endTime\":\"2024-01-15T10:25:00.000Z\""));
        let parsed: TimerState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn missing_fields_default_to_inactive() {
        let parsed: TimerState = serde_json::from_str(r#"{"active": false}"#).unwrap();
        assert_eq!(parsed, TimerState::empty());
    }
}
