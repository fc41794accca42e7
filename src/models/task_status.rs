use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Tri-state status of an onboarding task.
///
/// There are no transition rules: any status may be set at any time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "Not started")]
    NotStarted,
    #[serde(rename = "In progress")]
    InProgress,
    #[serde(rename = "Completed")]
    Completed,
}

impl TaskStatus {
    /// Label as stored in the data file and shown in exports.
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not started",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Completed => "Completed",
        }
    }

    /// Parse user input: full labels (any case) or short codes.
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "not started" | "not-started" | "notstarted" | "todo" | "n" => {
                Some(TaskStatus::NotStarted)
            }
            "in progress" | "in-progress" | "inprogress" | "doing" | "p" => {
                Some(TaskStatus::InProgress)
            }
            "completed" | "done" | "c" => Some(TaskStatus::Completed),
            _ => None,
        }
    }

    /// RGB triple used when rendering the status in a PDF.
    pub fn pdf_rgb(&self) -> (f32, f32, f32) {
        match self {
            TaskStatus::Completed => (0.0, 128.0 / 255.0, 0.0),
            TaskStatus::InProgress => (1.0, 165.0 / 255.0, 0.0),
            TaskStatus::NotStarted => (0.0, 0.0, 0.0),
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for TaskStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskStatus::from_input(s).ok_or_else(|| AppError::InvalidStatus(s.to_string()))
    }
}
