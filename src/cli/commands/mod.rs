pub mod add;
pub mod archive;
pub mod backup;
pub mod config;
pub mod dashboard;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod report;
pub mod serve;
pub mod show;
pub mod status;
pub mod task;

use crate::cli::parser::FilterArgs;
use crate::config::Config;
use crate::core::filter::{ArchivedFilter, EmployeeFilter};
use crate::errors::AppResult;
use crate::models::TaskStatus;
use crate::store::JsonStore;

/// Open the data file named by the configuration.
pub(crate) fn open_store(cfg: &Config) -> AppResult<JsonStore> {
    JsonStore::open(&cfg.data_file)
}

/// Turn the shared filter flags into an `EmployeeFilter`.
pub(crate) fn build_filter(args: &FilterArgs) -> AppResult<EmployeeFilter> {
    let status = args
        .status
        .as_deref()
        .map(str::parse::<TaskStatus>)
        .transpose()?;

    EmployeeFilter {
        search: args.search.clone(),
        department: args.department.clone(),
        status,
        archived: ArchivedFilter::from_flags(args.archived, args.all),
        ..Default::default()
    }
    .with_period(args.period.as_deref())
}
