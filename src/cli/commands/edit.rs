use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::onboarding::OnboardingLogic;
use crate::errors::{AppError, AppResult};
use crate::models::EmployeeEdit;
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        name,
        role,
        department,
        start,
    } = cmd
    {
        let start_date = match start.as_deref() {
            Some(s) => Some(date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.into()))?),
            None => None,
        };

        let edit = EmployeeEdit {
            name: name.clone(),
            role: role.clone(),
            department: department.clone(),
            start_date,
        };

        let mut store = open_store(cfg)?;
        let saved = OnboardingLogic::edit_info(&mut store, *id, &edit)?;
        success(format!(
            "Employee #{} updated: {} ({}, {}) starting {}",
            saved.id, saved.name, saved.role, saved.department, saved.start_date
        ));
    }

    Ok(())
}
