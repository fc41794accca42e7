use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::onboarding::OnboardingLogic;
use crate::errors::AppResult;
use crate::models::TaskStatus;
use crate::ui::messages::success;
use crate::utils::colors::colorize_status;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status {
        id,
        task_id,
        status,
    } = cmd
    {
        let status: TaskStatus = status.parse()?;

        let mut store = open_store(cfg)?;
        let saved = OnboardingLogic::set_task_status(&mut store, *id, *task_id, status)?;

        success(format!(
            "{}: task #{} is now {} ({}/{} completed)",
            saved.name,
            task_id,
            colorize_status(status),
            saved.completed_tasks(),
            saved.tasks.len()
        ));
    }

    Ok(())
}
