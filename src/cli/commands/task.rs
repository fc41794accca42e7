use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::onboarding::OnboardingLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Task { id, title } = cmd {
        let mut store = open_store(cfg)?;
        let saved = OnboardingLogic::add_task(&mut store, *id, title)?;

        let added = saved.tasks.last().map(|t| t.id).unwrap_or_default();
        success(format!(
            "Task #{added} added to {}: {}",
            saved.name,
            title.trim()
        ));
    }

    Ok(())
}
