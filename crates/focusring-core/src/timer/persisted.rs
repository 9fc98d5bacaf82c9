use serde::{Deserialize, Serialize};

/// Wire format of the timer snapshot written to the `timerState` key.
///
/// Field names are fixed by the persisted-record format. Records written by
/// earlier versions may omit `completedSessions` (treated as 0) or
/// `lastTimestamp` (no reconciliation possible).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedTimer {
    /// Seconds remaining in the period that was active when saved.
    pub current_time: u32,
    pub is_work_mode: bool,
    pub is_running: bool,
    /// Epoch milliseconds at the moment the snapshot was taken.
    #[serde(default)]
    pub last_timestamp: Option<i64>,
    #[serde(default)]
    pub completed_sessions: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_field_names_are_stable() {
        let record = PersistedTimer {
            current_time: 1200,
            is_work_mode: true,
            is_running: true,
            last_timestamp: Some(1_700_000_000_000),
            completed_sessions: 2,
        };
        let json = serde_json::to_string(&record).unwrap();
        for field in [
            "\"currentTime\"",
            "\"isWorkMode\"",
            "\"isRunning\"",
            "\"lastTimestamp\"",
            "\"completedSessions\"",
        ] {
            assert!(json.contains(field), "missing {field} in {json}");
        }
    }

    #[test]
    fn parses_record_without_completed_sessions() {
        let json = r#"{"currentTime":900,"isWorkMode":false,"isRunning":false,"lastTimestamp":1700000000000}"#;
        let record: PersistedTimer = serde_json::from_str(json).unwrap();
        assert_eq!(record.completed_sessions, 0);
        assert_eq!(record.current_time, 900);
    }

    #[test]
    fn parses_record_without_timestamp() {
        let json = r#"{"currentTime":42,"isWorkMode":true,"isRunning":true,"completedSessions":1}"#;
        let record: PersistedTimer = serde_json::from_str(json).unwrap();
        assert_eq!(record.last_timestamp, None);
    }

    #[test]
    fn roundtrip() {
        let record = PersistedTimer {
            current_time: 7,
            is_work_mode: false,
            is_running: true,
            last_timestamp: Some(12345),
            completed_sessions: 4,
        };
        let json = serde_json::to_string(&record).unwrap();
        let parsed: PersistedTimer = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
