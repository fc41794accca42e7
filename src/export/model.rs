// src/export/model.rs

use serde::Serialize;

use crate::core::report::{ReportRow, ReportSummary};
use crate::models::{Employee, Task};

/// Flat row for the full employee report.
#[derive(Serialize, Clone, Debug)]
pub struct ReportExport {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Role")]
    pub role: String,
    #[serde(rename = "Department")]
    pub department: String,
    #[serde(rename = "Start Date")]
    pub start_date: String,
    #[serde(rename = "Completed")]
    pub completed: usize,
    #[serde(rename = "Pending")]
    pub pending: usize,
}

impl From<&ReportRow> for ReportExport {
    fn from(r: &ReportRow) -> Self {
        Self {
            name: r.name.clone(),
            role: r.role.clone(),
            department: r.department.clone(),
            start_date: r.start_date.format("%Y-%m-%d").to_string(),
            completed: r.completed,
            pending: r.pending,
        }
    }
}

/// Flat row for a single employee's task sheet.
#[derive(Serialize, Clone, Debug)]
pub struct TaskExport {
    #[serde(rename = "Task Title")]
    pub title: String,
    #[serde(rename = "Status")]
    pub status: String,
}

impl From<&Task> for TaskExport {
    fn from(t: &Task) -> Self {
        Self {
            title: t.title.clone(),
            status: t.status.label().to_string(),
        }
    }
}

/// JSON shape of the full report export.
#[derive(Serialize, Debug)]
pub struct ReportDocument<'a> {
    pub summary: &'a ReportSummary,
    pub employees: &'a [ReportRow],
}

pub(crate) const REPORT_HEADERS: [&str; 6] = [
    "Name",
    "Role",
    "Department",
    "Start Date",
    "Completed",
    "Pending",
];

/// Report columns holding counts; every other column is free text.
pub(crate) const REPORT_NUMERIC_COLUMNS: [usize; 2] = [4, 5];

pub(crate) const TASK_HEADERS: [&str; 2] = ["Task Title", "Status"];

pub(crate) fn report_to_table(rows: &[ReportExport]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|r| {
            vec![
                r.name.clone(),
                r.role.clone(),
                r.department.clone(),
                r.start_date.clone(),
                r.completed.to_string(),
                r.pending.to_string(),
            ]
        })
        .collect()
}

pub(crate) fn tasks_to_table(tasks: &[TaskExport]) -> Vec<Vec<String>> {
    tasks
        .iter()
        .map(|t| vec![t.title.clone(), t.status.clone()])
        .collect()
}

pub(crate) fn summary_lines(s: &ReportSummary) -> Vec<String> {
    vec![
        format!("Total Employees: {}", s.total_employees),
        format!("Total Tasks: {}", s.total_tasks),
        format!("Completed Tasks: {}", s.completed_tasks),
        format!("Pending Tasks: {}", s.pending_tasks),
    ]
}

/// Default file name for an employee's task sheet, e.g. `Ada_Lovelace_tasks`.
pub fn employee_file_stem(e: &Employee) -> String {
    let cleaned: String = e
        .name
        .trim()
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c } else { '_' })
        .collect();
    format!("{}_tasks", cleaned)
}
