use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::colorize_status;
use crate::utils::date;
use crate::utils::formatting::{pad_left, pad_right, progress_bar};

const TITLE_WIDTH: usize = 48;

/// Print one employee with the full checklist.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let store = open_store(cfg)?;
        let emp = store.get(*id)?;

        header(format!("👤 {} - {}", emp.name, emp.role));
        println!("{:<12} {}", "Id:", emp.id);
        println!("{:<12} {}", "Department:", emp.department);
        print!("{:<12} {}", "Start date:", emp.start_date);
        if emp.is_upcoming(date::today(), cfg.upcoming_days) {
            print!("  🚀 Starting Soon!");
        }
        println!();
        if emp.archived {
            println!("{:<12} yes", "Archived:");
        }
        println!(
            "{:<12} {}",
            "Progress:",
            progress_bar(emp.completed_tasks(), emp.tasks.len(), 20)
        );
        println!();

        if emp.tasks.is_empty() {
            println!("  (no onboarding tasks)");
            return Ok(());
        }

        let id_w = emp
            .tasks
            .iter()
            .map(|t| t.id.to_string().len())
            .max()
            .unwrap_or(1);

        for task in &emp.tasks {
            let lines = textwrap::wrap(&task.title, TITLE_WIDTH);
            let mut lines = lines.iter();
            let first = lines.next().map(|l| l.to_string()).unwrap_or_default();
            println!(
                "  {}  {}  {}",
                pad_left(&task.id.to_string(), id_w),
                pad_right(&first, TITLE_WIDTH),
                colorize_status(task.status)
            );
            for cont in lines {
                println!("  {}  {}", " ".repeat(id_w), cont);
            }
        }
    }

    Ok(())
}
