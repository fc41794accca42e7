use chrono::NaiveDate;
use serde::Serialize;

use crate::models::Employee;

/// Report line for one employee.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub id: u64,
    pub name: String,
    pub role: String,
    pub department: String,
    pub start_date: NaiveDate,
    pub completed: usize,
    pub pending: usize,
}

impl From<&Employee> for ReportRow {
    fn from(e: &Employee) -> Self {
        Self {
            id: e.id,
            name: e.name.clone(),
            role: e.role.clone(),
            department: e.department.clone(),
            start_date: e.start_date,
            completed: e.completed_tasks(),
            pending: e.pending_tasks(),
        }
    }
}

/// Summary metrics over an (already filtered) list of employees.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total_employees: usize,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
}

impl ReportSummary {
    pub fn build<'a, I>(employees: I) -> Self
    where
        I: IntoIterator<Item = &'a Employee>,
    {
        let mut s = ReportSummary::default();
        for e in employees {
            s.total_employees += 1;
            s.total_tasks += e.tasks.len();
            s.completed_tasks += e.completed_tasks();
        }
        s.pending_tasks = s.total_tasks - s.completed_tasks;
        s
    }
}

pub fn rows<'a, I>(employees: I) -> Vec<ReportRow>
where
    I: IntoIterator<Item = &'a Employee>,
{
    employees.into_iter().map(ReportRow::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Task, TaskStatus};

    fn emp(statuses: &[TaskStatus]) -> Employee {
        Employee {
            id: 1,
            name: "N".into(),
            role: "R".into(),
            department: "D".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            archived: false,
            tasks: statuses
                .iter()
                .enumerate()
                .map(|(i, s)| Task {
                    id: i as u64,
                    title: "t".into(),
                    status: *s,
                })
                .collect(),
        }
    }

    #[test]
    fn pending_is_total_minus_completed() {
        use TaskStatus::*;
        let list = [emp(&[Completed, InProgress, NotStarted]), emp(&[Completed])];
        let s = ReportSummary::build(&list);
        assert_eq!(s.total_employees, 2);
        assert_eq!(s.total_tasks, 4);
        assert_eq!(s.completed_tasks, 2);
        assert_eq!(s.pending_tasks, 2);

        let r = rows(&list);
        assert_eq!((r[0].completed, r[0].pending), (1, 2));
    }

    #[test]
    fn empty_summary_is_zero() {
        let s = ReportSummary::build(&Vec::<Employee>::new());
        assert_eq!(s, ReportSummary::default());
    }
}
