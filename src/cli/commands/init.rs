use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::JsonStore;
use crate::store::log::hrlog;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty data file, unless one already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data.clone(), cli.test)?;

    println!("⚙️  Initializing hronboard…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Data file   : {}", cfg.data_file);

    let mut store = JsonStore::open(&cfg.data_file)?;
    let existing = store.employees().len();
    store.save()?;

    if existing > 0 {
        success(format!(
            "Existing data file kept ({existing} employee(s)): {}",
            cfg.data_file
        ));
    } else {
        success(format!("Data file initialized at {}", cfg.data_file));
    }

    hrlog(&mut store, "init", &cfg.data_file, "Data file initialized");

    println!("🎉 hronboard initialization completed!");
    Ok(())
}
