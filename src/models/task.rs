use serde::{Deserialize, Serialize};

use super::task_status::TaskStatus;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub status: TaskStatus,
}

impl Task {
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            status: TaskStatus::NotStarted,
        }
    }

    /// Build a checklist from a list of titles, numbering tasks from 1.
    pub fn from_template(titles: &[String]) -> Vec<Task> {
        titles
            .iter()
            .enumerate()
            .map(|(i, t)| Task::new(i as u64 + 1, t.clone()))
            .collect()
    }
}
