use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

/// One entry in a decision's discussion thread.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: u64,
    pub author: String,
    pub message: String,
    /// Display string captured at creation; not meant to be parsed back.
    pub time: String,
}

impl Message {
    /// Render `at` as a wall-clock time in the local zone, e.g. `3:07:42 PM`.
    pub fn display_time(at: DateTime<Utc>) -> String {
        at.with_timezone(&Local).format("%-I:%M:%S %p").to_string()
    }
}
