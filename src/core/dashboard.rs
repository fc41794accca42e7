use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Employee, TaskStatus};

/// Counters behind the home/dashboard view.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub active_employees: usize,
    pub archived_employees: usize,
    pub starting_soon: usize,
    pub fully_onboarded: usize,
    pub not_started_tasks: usize,
    pub in_progress_tasks: usize,
    pub completed_tasks: usize,
}

impl Dashboard {
    /// Archived records only count toward `archived_employees`.
    pub fn build(employees: &[Employee], today: NaiveDate, window_days: i64) -> Self {
        let mut d = Dashboard::default();
        for e in employees {
            if e.archived {
                d.archived_employees += 1;
                continue;
            }
            d.active_employees += 1;
            if e.is_upcoming(today, window_days) {
                d.starting_soon += 1;
            }
            if e.is_fully_onboarded() {
                d.fully_onboarded += 1;
            }
            for t in &e.tasks {
                match t.status {
                    TaskStatus::NotStarted => d.not_started_tasks += 1,
                    TaskStatus::InProgress => d.in_progress_tasks += 1,
                    TaskStatus::Completed => d.completed_tasks += 1,
                }
            }
        }
        d
    }

    pub fn tasks_by_status(&self) -> [(TaskStatus, usize); 3] {
        [
            (TaskStatus::NotStarted, self.not_started_tasks),
            (TaskStatus::InProgress, self.in_progress_tasks),
            (TaskStatus::Completed, self.completed_tasks),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    #[test]
    fn counts_active_and_archived_separately() {
        let today = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        let mut done = Task::new(1, "a");
        done.status = TaskStatus::Completed;

        let soon = Employee {
            id: 1,
            name: "Soon".into(),
            role: "r".into(),
            department: "d".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 4, 3).unwrap(),
            archived: false,
            tasks: vec![done.clone(), Task::new(2, "b")],
        };
        let onboarded = Employee {
            id: 2,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            tasks: vec![done],
            ..soon.clone()
        };
        let gone = Employee {
            id: 3,
            archived: true,
            ..soon.clone()
        };

        let d = Dashboard::build(&[soon, onboarded, gone], today, 7);
        assert_eq!(d.active_employees, 2);
        assert_eq!(d.archived_employees, 1);
        assert_eq!(d.starting_soon, 1);
        assert_eq!(d.fully_onboarded, 1);
        assert_eq!(d.completed_tasks, 2);
        assert_eq!(d.not_started_tasks, 1);
    }
}
