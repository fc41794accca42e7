//! Record-level operations: create, edit, status changes, archiving.
//!
//! Every operation loads the record, changes it, and overwrites the full
//! record in the store (last write wins).

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Employee, EmployeeEdit, NewEmployee, Task, TaskStatus};
use crate::store::JsonStore;
use crate::store::log::hrlog;

pub struct OnboardingLogic;

impl OnboardingLogic {
    pub fn add_employee(
        store: &mut JsonStore,
        cfg: &Config,
        payload: NewEmployee,
    ) -> AppResult<Employee> {
        let employee = payload.into_employee(&cfg.task_template)?;
        let saved = store.insert(employee)?;

        tracing::info!(id = saved.id, name = %saved.name, "employee added");
        hrlog(
            store,
            "add",
            &format!("employee {}", saved.id),
            &format!("{} ({}, {})", saved.name, saved.role, saved.department),
        );
        Ok(saved)
    }

    pub fn set_task_status(
        store: &mut JsonStore,
        employee_id: u64,
        task_id: u64,
        status: TaskStatus,
    ) -> AppResult<Employee> {
        let mut previous = TaskStatus::NotStarted;
        let saved = store.update(employee_id, |e| {
            let task = e.task_mut(task_id)?;
            previous = task.status;
            task.status = status;
            Ok(())
        })?;

        hrlog(
            store,
            "status",
            &format!("employee {employee_id} task {task_id}"),
            &format!("{previous} -> {status}"),
        );
        Ok(saved)
    }

    pub fn add_task(store: &mut JsonStore, employee_id: u64, title: &str) -> AppResult<Employee> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AppError::MissingField("title".into()));
        }

        let saved = store.update(employee_id, |e| {
            let id = e.next_task_id();
            e.tasks.push(Task::new(id, title));
            Ok(())
        })?;

        hrlog(store, "task", &format!("employee {employee_id}"), title);
        Ok(saved)
    }

    pub fn edit_info(
        store: &mut JsonStore,
        employee_id: u64,
        edit: &EmployeeEdit,
    ) -> AppResult<Employee> {
        if edit.is_empty() {
            return Err(AppError::InvalidRequest("nothing to edit".into()));
        }

        let saved = store.update(employee_id, |e| edit.apply(e))?;
        hrlog(
            store,
            "edit",
            &format!("employee {employee_id}"),
            &format!("{} ({}, {}, {})", saved.name, saved.role, saved.department, saved.start_date),
        );
        Ok(saved)
    }

    /// Soft delete: flips the flag, the record stays in the data file.
    pub fn set_archived(
        store: &mut JsonStore,
        employee_id: u64,
        archived: bool,
    ) -> AppResult<Employee> {
        let saved = store.update(employee_id, |e| {
            e.archived = archived;
            Ok(())
        })?;

        let op = if archived { "archive" } else { "unarchive" };
        hrlog(store, op, &format!("employee {employee_id}"), &saved.name);
        Ok(saved)
    }
}
