use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::server::{self, AppState};
use crate::store::JsonStore;

/// Start the REST service on a multi-threaded tokio runtime.
///
/// Command-line flags win over the configuration file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve {
        host,
        port,
        static_dir,
    } = cmd
    {
        let mut cfg = cfg.clone();
        if let Some(h) = host {
            cfg.host = h.clone();
        }
        if let Some(p) = port {
            cfg.port = *p;
        }
        if static_dir.is_some() {
            cfg.static_dir = static_dir.clone();
        }

        let store = JsonStore::open(&cfg.data_file)?;
        tracing::info!(data_file = %cfg.data_file, "data file loaded");

        let (host, port) = (cfg.host.clone(), cfg.port);
        let state = AppState::new(store, cfg);

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        runtime.block_on(server::serve(&host, port, state))?;
    }

    Ok(())
}
