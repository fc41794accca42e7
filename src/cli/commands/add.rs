use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::onboarding::OnboardingLogic;
use crate::errors::AppResult;
use crate::models::{NewEmployee, Task};
use crate::ui::messages::success;

/// Handle the `add` command.
///
/// Without `--task` the checklist comes from the configured template.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        role,
        department,
        start,
        tasks,
    } = cmd
    {
        let payload = NewEmployee {
            name: name.clone(),
            role: role.clone(),
            department: department.clone(),
            start_date: Some(start.clone()),
            archived: false,
            tasks: if tasks.is_empty() {
                None
            } else {
                Some(Task::from_template(tasks))
            },
        };

        let mut store = open_store(cfg)?;
        let saved = OnboardingLogic::add_employee(&mut store, cfg, payload)?;

        success(format!(
            "Employee #{} added: {} ({}, {}) starting {} with {} task(s)",
            saved.id,
            saved.name,
            saved.role,
            saved.department,
            saved.start_date,
            saved.tasks.len()
        ));
    }

    Ok(())
}
