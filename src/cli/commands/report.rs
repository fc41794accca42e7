use super::{build_filter, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::departments;
use crate::core::paginate::paginate;
use crate::core::report::{ReportSummary, rows};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::table::Table;

/// Summary metrics over the filtered list, then one page of the table.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report { filter, page } = cmd {
        let store = open_store(cfg)?;
        let filter = build_filter(filter)?;
        let selected = filter.apply(store.employees());

        let summary = ReportSummary::build(selected.iter().copied());

        header("📊 Employee Report");
        println!("{:<17} {}", "Total Employees:", summary.total_employees);
        println!("{:<17} {}", "Total Tasks:", summary.total_tasks);
        println!("{:<17} {}", "Completed Tasks:", summary.completed_tasks);
        println!("{:<17} {}", "Pending Tasks:", summary.pending_tasks);

        let depts = departments(store.employees());
        if !depts.is_empty() {
            println!("{:<17} {}", "Departments:", depts.join(", "));
        }
        println!();

        if selected.is_empty() {
            info("No employees match the selected filters.");
            return Ok(());
        }

        let report_rows = rows(selected.iter().copied());
        let page = paginate(&report_rows, page.unwrap_or(1), cfg.page_size);

        let mut table = Table::new([
            "Name",
            "Role",
            "Department",
            "Start Date",
            "Completed",
            "Pending",
        ]);
        for r in &page.items {
            table.add_row(vec![
                r.name.clone(),
                r.role.clone(),
                r.department.clone(),
                r.start_date.to_string(),
                r.completed.to_string(),
                r.pending.to_string(),
            ]);
        }

        print!("{}", table.render());
        println!("\nPage {} of {}", page.page, page.total_pages);
    }

    Ok(())
}
