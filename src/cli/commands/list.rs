use super::{build_filter, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::paginate::paginate;
use crate::errors::AppResult;
use crate::models::Employee;
use crate::ui::messages::{header, info};
use crate::utils::date;
use crate::utils::table::Table;
use chrono::NaiveDate;

/// Handle the `list` command.
///
/// Without `--page` every matching employee is printed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { filter, page } = cmd {
        let store = open_store(cfg)?;
        let filter = build_filter(filter)?;
        let selected = filter.apply(store.employees());

        if selected.is_empty() {
            info("No employees match the selected filters.");
            return Ok(());
        }

        let (items, footer) = match page {
            Some(p) => {
                let page = paginate(&selected, *p, cfg.page_size);
                let footer = format!(
                    "Page {} of {} ({} employee(s))",
                    page.page, page.total_pages, page.total
                );
                (page.items, footer)
            }
            None => {
                let footer = format!("{} employee(s)", selected.len());
                (selected, footer)
            }
        };

        let today = date::today();
        let mut table = Table::new([
            "ID",
            "Name",
            "Role",
            "Department",
            "Start Date",
            "Tasks",
            "",
        ]);
        for e in &items {
            table.add_row(vec![
                e.id.to_string(),
                e.name.clone(),
                e.role.clone(),
                e.department.clone(),
                e.start_date.to_string(),
                format!("{}/{}", e.completed_tasks(), e.tasks.len()),
                row_note(e, today, cfg.upcoming_days),
            ]);
        }

        header("👥 Employees");
        print!("{}", table.render());
        println!("\n{footer}");
    }

    Ok(())
}

/// Trailing markers for a list row, space separated.
fn row_note(e: &Employee, today: NaiveDate, window: i64) -> String {
    let mut marks = Vec::new();
    if e.is_upcoming(today, window) {
        marks.push("🚀 Starting Soon!");
    }
    if e.archived {
        marks.push("(archived)");
    }
    marks.join(" ")
}
