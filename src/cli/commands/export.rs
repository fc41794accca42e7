use super::{build_filter, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        employee,
        filter,
        force,
    } = cmd
    {
        let store = open_store(cfg)?;

        match employee {
            Some(id) => {
                ExportLogic::export_employee(&store, *id, *format, file.as_deref(), *force)?;
            }
            None => {
                let filter = build_filter(filter)?;
                ExportLogic::export_report(&store, &filter, *format, file.as_deref(), *force)?;
            }
        }
    }
    Ok(())
}
