use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::task::Task;
use super::task_status::TaskStatus;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

/// An employee record as stored in the data file.
///
/// Field names are camelCase on the wire (`startDate`) so existing
/// `db.json` documents load unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default)]
    pub id: u64,
    pub name: String,
    pub role: String,
    pub department: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Employee {
    pub fn completed_tasks(&self) -> usize {
        self.tasks.iter().filter(|t| t.status.is_completed()).count()
    }

    pub fn pending_tasks(&self) -> usize {
        self.tasks.len() - self.completed_tasks()
    }

    pub fn has_task_with_status(&self, status: TaskStatus) -> bool {
        self.tasks.iter().any(|t| t.status == status)
    }

    /// True when every task is completed (and there is at least one).
    pub fn is_fully_onboarded(&self) -> bool {
        !self.tasks.is_empty() && self.pending_tasks() == 0
    }

    /// Start date falls within `0..=window_days` days from `today`.
    pub fn is_upcoming(&self, today: NaiveDate, window_days: i64) -> bool {
        let diff = (self.start_date - today).num_days();
        (0..=window_days).contains(&diff)
    }

    pub fn next_task_id(&self) -> u64 {
        self.tasks.iter().map(|t| t.id).max().map_or(1, |m| m + 1)
    }

    pub fn task_mut(&mut self, task_id: u64) -> AppResult<&mut Task> {
        let employee = self.id;
        self.tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or(AppError::TaskNotFound {
                employee,
                task: task_id,
            })
    }

    /// Required text fields must be non-empty after trimming.
    pub fn validate(&self) -> AppResult<()> {
        require("name", &self.name)?;
        require("role", &self.role)?;
        require("department", &self.department)?;
        for task in &self.tasks {
            require("task title", &task.title)?;
        }
        Ok(())
    }
}

/// Create payload: everything but the id.
///
/// Text fields default to empty so that a missing field surfaces as a
/// validation error instead of a decoding error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub tasks: Option<Vec<Task>>,
}

impl NewEmployee {
    /// Validate and turn the payload into a record (id still unassigned).
    ///
    /// When no task list is supplied the checklist is built from `template`.
    pub fn into_employee(self, template: &[String]) -> AppResult<Employee> {
        let start_raw = self
            .start_date
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::MissingField("startDate".into()))?;
        let start_date =
            date::parse_date(start_raw).ok_or_else(|| AppError::InvalidDate(start_raw.into()))?;

        let tasks = match self.tasks {
            Some(tasks) => tasks,
            None => Task::from_template(template),
        };

        let employee = Employee {
            id: 0,
            name: self.name.trim().to_string(),
            role: self.role.trim().to_string(),
            department: self.department.trim().to_string(),
            start_date,
            archived: self.archived,
            tasks,
        };
        employee.validate()?;
        Ok(employee)
    }
}

/// Partial edit of the employee info block.
#[derive(Debug, Clone, Default)]
pub struct EmployeeEdit {
    pub name: Option<String>,
    pub role: Option<String>,
    pub department: Option<String>,
    pub start_date: Option<NaiveDate>,
}

impl EmployeeEdit {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.role.is_none()
            && self.department.is_none()
            && self.start_date.is_none()
    }

    pub fn apply(&self, emp: &mut Employee) -> AppResult<()> {
        if let Some(n) = &self.name {
            emp.name = n.trim().to_string();
        }
        if let Some(r) = &self.role {
            emp.role = r.trim().to_string();
        }
        if let Some(d) = &self.department {
            emp.department = d.trim().to_string();
        }
        if let Some(s) = self.start_date {
            emp.start_date = s;
        }
        emp.validate()
    }
}

fn require(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        Err(AppError::MissingField(field.to_string()))
    } else {
        Ok(())
    }
}
