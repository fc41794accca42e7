// src/export/logic.rs

use crate::core::filter::EmployeeFilter;
use crate::core::report::{self, ReportSummary};
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::{ensure_writable, write_bytes};
use crate::export::json_csv::{render_csv, render_json};
use crate::export::model::{
    REPORT_HEADERS, REPORT_NUMERIC_COLUMNS, ReportDocument, ReportExport, TASK_HEADERS, TaskExport, employee_file_stem,
    report_to_table, tasks_to_table,
};
use crate::export::pdf_export::{render_report_pdf, render_tasks_pdf};
use crate::export::xlsx::render_xlsx;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::Employee;
use crate::store::JsonStore;
use crate::ui::messages::{info, warning};
use std::path::{Path, PathBuf};

/// High-level export logic, shared by the CLI and the REST service.
pub struct ExportLogic;

impl ExportLogic {
    /// Render the full report for an already filtered list.
    pub fn report_bytes(format: ExportFormat, employees: &[&Employee]) -> AppResult<Vec<u8>> {
        let summary = ReportSummary::build(employees.iter().copied());
        let rows = report::rows(employees.iter().copied());
        let flat: Vec<ReportExport> = rows.iter().map(ReportExport::from).collect();

        match format {
            ExportFormat::Csv => render_csv(&flat, &REPORT_HEADERS),
            ExportFormat::Json => render_json(&ReportDocument {
                summary: &summary,
                employees: &rows,
            }),
            ExportFormat::Xlsx => render_xlsx(
                "Employee Report",
                &REPORT_HEADERS,
                &REPORT_NUMERIC_COLUMNS,
                &report_to_table(&flat),
            ),
            ExportFormat::Pdf => Ok(render_report_pdf(&summary, &flat)),
        }
    }

    /// Render one employee's task sheet.
    pub fn employee_bytes(format: ExportFormat, employee: &Employee) -> AppResult<Vec<u8>> {
        let tasks: Vec<TaskExport> = employee.tasks.iter().map(TaskExport::from).collect();

        match format {
            ExportFormat::Csv => render_csv(&tasks, &TASK_HEADERS),
            ExportFormat::Json => render_json(employee),
            ExportFormat::Xlsx => render_xlsx("Tasks", &TASK_HEADERS, &[], &tasks_to_table(&tasks)),
            ExportFormat::Pdf => Ok(render_tasks_pdf(employee)),
        }
    }

    /// Export the filtered report to `file` (default `employee_report.<ext>`).
    pub fn export_report(
        store: &JsonStore,
        filter: &EmployeeFilter,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = resolve_output(file, "employee_report", format)?;
        ensure_writable(&path, force)?;

        let selected = filter.apply(store.employees());
        if selected.is_empty() {
            warning("No employees match the selected filters; exporting an empty report.");
        }

        info(format!(
            "Exporting {} employee(s) to {}: {}",
            selected.len(),
            format.as_str().to_uppercase(),
            path.display()
        ));
        let bytes = Self::report_bytes(format, &selected)?;
        write_bytes(&path, &bytes)?;

        notify_export_success(&format.as_str().to_uppercase(), &path);
        Ok(path)
    }

    /// Export one employee's checklist to `file` (default `<name>_tasks.<ext>`).
    pub fn export_employee(
        store: &JsonStore,
        employee_id: u64,
        format: ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let employee = store.get(employee_id)?;
        let path = resolve_output(file, &employee_file_stem(employee), format)?;
        ensure_writable(&path, force)?;

        info(format!(
            "Exporting tasks of {} to {}: {}",
            employee.name,
            format.as_str().to_uppercase(),
            path.display()
        ));
        let bytes = Self::employee_bytes(format, employee)?;
        write_bytes(&path, &bytes)?;

        notify_export_success(&format.as_str().to_uppercase(), &path);
        Ok(path)
    }
}

/// Explicit paths must be absolute; otherwise the default name lands in the
/// current directory.
fn resolve_output(file: Option<&str>, default_stem: &str, format: ExportFormat) -> AppResult<PathBuf> {
    match file {
        Some(f) => {
            let path = Path::new(f);
            if !path.is_absolute() {
                return Err(AppError::Export(format!(
                    "Output file path must be absolute: {f}"
                )));
            }
            Ok(path.to_path_buf())
        }
        None => {
            let cwd = std::env::current_dir()?;
            Ok(cwd.join(format!("{default_stem}.{}", format.extension())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Task, TaskStatus};
    use chrono::NaiveDate;

    fn employee() -> Employee {
        let mut done = Task::new(2, "Laptop, monitor");
        done.status = TaskStatus::Completed;
        Employee {
            id: 7,
            name: "Ada Lovelace".into(),
            role: "Engineer".into(),
            department: "R&D".into(),
            start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
            archived: false,
            tasks: vec![Task::new(1, "Contract"), done],
        }
    }

    #[test]
    fn report_csv_has_counts() {
        let e = employee();
        let bytes = ExportLogic::report_bytes(ExportFormat::Csv, &[&e]).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "Name,Role,Department,Start Date,Completed,Pending\nAda Lovelace,Engineer,R&D,2025-04-01,1,1\n"
        );
    }

    #[test]
    fn employee_csv_lists_tasks() {
        let bytes = ExportLogic::employee_bytes(ExportFormat::Csv, &employee()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("Task Title,Status\n"));
        assert!(text.contains("Contract,Not started"));
        assert!(text.contains("\"Laptop, monitor\",Completed"));
    }

    #[test]
    fn report_json_carries_summary() {
        let e = employee();
        let bytes = ExportLogic::report_bytes(ExportFormat::Json, &[&e]).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(v["summary"]["totalTasks"], 2);
        assert_eq!(v["summary"]["pendingTasks"], 1);
        assert_eq!(v["employees"][0]["startDate"], "2025-04-01");
    }

    #[test]
    fn pdf_outputs_are_pdfs() {
        let e = employee();
        assert!(
            ExportLogic::employee_bytes(ExportFormat::Pdf, &e)
                .unwrap()
                .starts_with(b"%PDF")
        );
        assert!(
            ExportLogic::report_bytes(ExportFormat::Pdf, &[])
                .unwrap()
                .starts_with(b"%PDF")
        );
    }

    #[test]
    fn relative_output_path_is_rejected() {
        assert!(resolve_output(Some("out.csv"), "x", ExportFormat::Csv).is_err());
        let p = resolve_output(None, "employee_report", ExportFormat::Pdf).unwrap();
        assert!(p.ends_with("employee_report.pdf"));
    }

    #[test]
    fn export_employee_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonStore::open(dir.path().join("db.json")).unwrap();
        store.insert(employee()).unwrap();

        let out = dir.path().join("ada.csv");
        let written = ExportLogic::export_employee(
            &store,
            1,
            ExportFormat::Csv,
            Some(out.to_str().unwrap()),
            true,
        )
        .unwrap();
        assert_eq!(written, out);
        assert!(std::fs::read_to_string(&out).unwrap().contains("Contract"));
    }
}
