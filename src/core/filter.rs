//! Employee list filtering.
//!
//! All criteria are combined with logical AND; an unset criterion matches
//! everything.

use chrono::NaiveDate;

use crate::errors::AppResult;
use crate::models::{Employee, TaskStatus};
use crate::utils::period::parse_period;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArchivedFilter {
    /// Hide archived records (default view).
    #[default]
    Active,
    /// Only archived records.
    Archived,
    /// Everything.
    All,
}

impl ArchivedFilter {
    pub fn from_flags(archived_only: bool, all: bool) -> Self {
        if all {
            ArchivedFilter::All
        } else if archived_only {
            ArchivedFilter::Archived
        } else {
            ArchivedFilter::Active
        }
    }

    fn matches(&self, archived: bool) -> bool {
        match self {
            ArchivedFilter::Active => !archived,
            ArchivedFilter::Archived => archived,
            ArchivedFilter::All => true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    pub search: Option<String>,
    pub department: Option<String>,
    pub status: Option<TaskStatus>,
    pub start_from: Option<NaiveDate>,
    pub start_to: Option<NaiveDate>,
    pub archived: ArchivedFilter,
}

impl EmployeeFilter {
    /// Restrict start dates to a period expression (see `parse_period`).
    pub fn with_period(mut self, period: Option<&str>) -> AppResult<Self> {
        if let Some(p) = period.map(str::trim).filter(|p| !p.is_empty()) {
            let (from, to) = parse_period(p)?;
            self.start_from = Some(from);
            self.start_to = Some(to);
        }
        Ok(self)
    }

    pub fn matches(&self, emp: &Employee) -> bool {
        let matches_name = match &self.search {
            Some(term) => emp.name.to_lowercase().contains(&term.to_lowercase()),
            None => true,
        };
        let matches_dept = match &self.department {
            Some(d) if !d.is_empty() => &emp.department == d,
            _ => true,
        };
        let matches_status = match self.status {
            Some(s) => emp.has_task_with_status(s),
            None => true,
        };
        let from_ok = self.start_from.is_none_or(|from| emp.start_date >= from);
        let to_ok = self.start_to.is_none_or(|to| emp.start_date <= to);

        matches_name
            && matches_dept
            && matches_status
            && from_ok
            && to_ok
            && self.archived.matches(emp.archived)
    }

    pub fn apply<'a>(&self, employees: &'a [Employee]) -> Vec<&'a Employee> {
        employees.iter().filter(|e| self.matches(e)).collect()
    }
}

/// Distinct departments in first-seen order.
pub fn departments(employees: &[Employee]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for e in employees {
        if !out.iter().any(|d| d == &e.department) {
            out.push(e.department.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    fn emp(id: u64, name: &str, dept: &str, start: &str, statuses: &[TaskStatus]) -> Employee {
        Employee {
            id,
            name: name.into(),
            role: "Role".into(),
            department: dept.into(),
            start_date: NaiveDate::parse_from_str(start, "%Y-%m-%d").unwrap(),
            archived: false,
            tasks: statuses
                .iter()
                .enumerate()
                .map(|(i, s)| Task {
                    id: i as u64 + 1,
                    title: format!("t{i}"),
                    status: *s,
                })
                .collect(),
        }
    }

    fn staff() -> Vec<Employee> {
        use TaskStatus::*;
        let mut archived = emp(4, "Dana Archive", "Sales", "2025-03-01", &[Completed]);
        archived.archived = true;
        vec![
            emp(1, "Alice Smith", "Engineering", "2025-01-10", &[NotStarted, Completed]),
            emp(2, "Bob Jones", "Sales", "2025-02-15", &[InProgress]),
            emp(3, "ALINA Petrova", "Engineering", "2025-06-01", &[Completed]),
            archived,
        ]
    }

    fn ids(v: Vec<&Employee>) -> Vec<u64> {
        v.into_iter().map(|e| e.id).collect()
    }

    #[test]
    fn name_search_is_case_insensitive_substring() {
        let all = staff();
        let f = EmployeeFilter {
            search: Some("aLi".into()),
            ..Default::default()
        };
        assert_eq!(ids(f.apply(&all)), vec![1, 3]);
    }

    #[test]
    fn status_filter_needs_at_least_one_matching_task() {
        let all = staff();
        let f = EmployeeFilter {
            status: Some(TaskStatus::Completed),
            ..Default::default()
        };
        assert_eq!(ids(f.apply(&all)), vec![1, 3]);

        let f = EmployeeFilter {
            status: Some(TaskStatus::InProgress),
            ..Default::default()
        };
        assert_eq!(ids(f.apply(&all)), vec![2]);
    }

    #[test]
    fn criteria_are_combined_with_and() {
        let all = staff();
        let f = EmployeeFilter {
            search: Some("a".into()),
            department: Some("Engineering".into()),
            status: Some(TaskStatus::NotStarted),
            ..Default::default()
        };
        assert_eq!(ids(f.apply(&all)), vec![1]);
    }

    #[test]
    fn start_bounds_are_inclusive() {
        let all = staff();
        let f = EmployeeFilter::default()
            .with_period(Some("2025-01-10:2025-02-15"))
            .unwrap();
        assert_eq!(ids(f.apply(&all)), vec![1, 2]);
    }

    #[test]
    fn archived_records_hidden_by_default() {
        let all = staff();
        assert_eq!(ids(EmployeeFilter::default().apply(&all)), vec![1, 2, 3]);

        let only = EmployeeFilter {
            archived: ArchivedFilter::Archived,
            ..Default::default()
        };
        assert_eq!(ids(only.apply(&all)), vec![4]);

        let every = EmployeeFilter {
            archived: ArchivedFilter::All,
            ..Default::default()
        };
        assert_eq!(every.apply(&all).len(), 4);
    }

    #[test]
    fn departments_are_distinct_in_order() {
        assert_eq!(departments(&staff()), vec!["Engineering", "Sales"]);
    }
}
