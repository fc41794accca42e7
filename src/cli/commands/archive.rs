use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::onboarding::OnboardingLogic;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Archive or restore an employee. Records are never deleted.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Archive { id, undo } = cmd {
        let mut store = open_store(cfg)?;
        let target = !*undo;

        if store.get(*id)?.archived == target {
            warning(format!(
                "Employee #{id} is already {}",
                if target { "archived" } else { "active" }
            ));
            return Ok(());
        }

        let saved = OnboardingLogic::set_archived(&mut store, *id, target)?;
        if target {
            success(format!("Employee #{} archived: {}", saved.id, saved.name));
        } else {
            success(format!("Employee #{} restored: {}", saved.id, saved.name));
        }
    }

    Ok(())
}
