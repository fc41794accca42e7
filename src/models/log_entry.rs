use serde::{Deserialize, Serialize};

/// One row of the internal activity log kept in the data file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogEntry {
    pub id: u64,
    pub date: String, // RFC 3339, local time
    pub operation: String,
    #[serde(default)]
    pub target: String,
    #[serde(default)]
    pub message: String,
}
