pub mod backup;
pub mod config;
pub mod dashboard;
pub mod filter;
pub mod log;
pub mod onboarding;
pub mod paginate;
pub mod report;

pub use filter::{ArchivedFilter, EmployeeFilter};
pub use onboarding::OnboardingLogic;
pub use paginate::{Page, paginate};
pub use report::{ReportRow, ReportSummary};
