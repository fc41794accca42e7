pub mod employee;
pub mod log_entry;
pub mod task;
pub mod task_status;

pub use employee::{Employee, EmployeeEdit, NewEmployee};
pub use log_entry::LogEntry;
pub use task::Task;
pub use task_status::TaskStatus;
