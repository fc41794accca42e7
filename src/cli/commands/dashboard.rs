use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::Dashboard;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::paint;
use crate::utils::colors::color_for_status;
use crate::utils::date;
use crate::utils::formatting::{pad_right, progress_bar};

const BAR_WIDTH: usize = 30;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard = cmd {
        let store = open_store(cfg)?;
        let d = Dashboard::build(store.employees(), date::today(), cfg.upcoming_days);

        header("🏠 Onboarding Dashboard");
        println!("{:<22} {}", "Active employees:", d.active_employees);
        println!("{:<22} {}", "Archived employees:", d.archived_employees);
        println!(
            "{:<22} {}",
            format!("Starting in {}d:", cfg.upcoming_days),
            d.starting_soon
        );
        println!(
            "{:<22} {}",
            "Fully onboarded:",
            d.fully_onboarded
        );
        println!(
            "{:<22} {}",
            "Onboarding progress:",
            progress_bar(d.fully_onboarded, d.active_employees, BAR_WIDTH)
        );

        println!();
        println!("Tasks by status");
        let total: usize = d.tasks_by_status().iter().map(|(_, n)| n).sum();
        for (status, count) in d.tasks_by_status() {
            println!(
                "  {} {:>4}  {}",
                paint(color_for_status(status), &pad_right(status.label(), 12)),
                count,
                progress_bar(count, total, BAR_WIDTH)
            );
        }
    }

    Ok(())
}
