use serde::{Deserialize, Serialize};

use crate::models::{Employee, LogEntry};

/// On-disk layout of the data file.
///
/// Unknown top-level collections are ignored on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub log: Vec<LogEntry>,
}

impl Document {
    pub fn next_employee_id(&self) -> u64 {
        self.employees.iter().map(|e| e.id).max().map_or(1, |m| m + 1)
    }

    pub fn next_log_id(&self) -> u64 {
        self.log.iter().map(|l| l.id).max().map_or(1, |m| m + 1)
    }
}
