// src/export/pdf_export.rs

use crate::core::report::ReportSummary;
use crate::export::model::{REPORT_HEADERS, ReportExport, report_to_table, summary_lines};
use crate::export::pdf::PdfManager;
use crate::models::Employee;

/// Full report: title, summary block, then the per-employee table.
pub(crate) fn render_report_pdf(summary: &ReportSummary, rows: &[ReportExport]) -> Vec<u8> {
    let mut pdf = PdfManager::new();
    pdf.write_table(
        "Employee Report",
        &summary_lines(summary),
        &REPORT_HEADERS,
        &report_to_table(rows),
    );
    pdf.finish()
}

/// Task sheet: one line per task, colored by status.
pub(crate) fn render_tasks_pdf(employee: &Employee) -> Vec<u8> {
    let title = format!("{} - {}", employee.name, employee.role);
    let lines: Vec<(String, (f32, f32, f32))> = employee
        .tasks
        .iter()
        .map(|t| (format!("{} - {}", t.title, t.status), t.status.pdf_rgb()))
        .collect();

    let mut pdf = PdfManager::new();
    pdf.write_colored_lines(&title, &lines);
    pdf.finish()
}
