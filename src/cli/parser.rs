use crate::export::ExportFormat;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for hronboard
/// CLI application to track employee onboarding over a JSON data file
#[derive(Parser)]
#[command(
    name = "hronboard",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple onboarding tracker: employees, checklists, reports and exports over a JSON file",
    long_about = None
)]
pub struct Cli {
    /// Override data file path (useful for tests or a custom data set)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Filters shared by `list`, `report` and `export`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Case-insensitive substring of the employee name
    #[arg(long = "search", short = 's')]
    pub search: Option<String>,

    /// Only employees with at least one task in this status (todo, doing, done)
    #[arg(long = "status")]
    pub status: Option<String>,

    /// Exact department name
    #[arg(long = "department", short = 'd')]
    pub department: Option<String>,

    /// Start date period: YYYY, YYYY-MM, YYYY-MM-DD or a `start:end` range
    #[arg(long = "period", short = 'p')]
    pub period: Option<String>,

    /// Show archived employees only
    #[arg(long = "archived", conflicts_with = "all")]
    pub archived: bool,

    /// Show active and archived employees
    #[arg(long = "all")]
    pub all: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the data file and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal activity log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log")]
        print: bool,
    },

    /// Register a new employee
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        role: String,

        #[arg(long)]
        department: String,

        /// First working day (YYYY-MM-DD)
        #[arg(long = "start")]
        start: String,

        /// Checklist item; repeat to replace the configured template
        #[arg(long = "task")]
        tasks: Vec<String>,
    },

    /// List employees, marking those starting soon
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Page number (page size from the configuration)
        #[arg(long = "page")]
        page: Option<usize>,
    },

    /// Show one employee with the onboarding checklist
    Show {
        id: u64,
    },

    /// Edit employee info
    Edit {
        id: u64,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        role: Option<String>,

        #[arg(long)]
        department: Option<String>,

        /// New start date (YYYY-MM-DD)
        #[arg(long = "start")]
        start: Option<String>,
    },

    /// Change the status of one task
    Status {
        id: u64,

        task_id: u64,

        /// Not started | In progress | Completed (or todo, doing, done)
        status: String,
    },

    /// Append a task to an employee's checklist
    Task {
        id: u64,

        title: String,
    },

    /// Archive an employee (or restore with --undo)
    Archive {
        id: u64,

        #[arg(long = "undo", help = "Restore an archived employee")]
        undo: bool,
    },

    /// Summary metrics and the paged report table
    Report {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long = "page")]
        page: Option<usize>,
    },

    /// Home view counters
    Dashboard,

    /// Export the report or one employee's task sheet
    Export {
        #[arg(long, value_enum, help = "Export format: csv | json | xlsx | pdf")]
        format: ExportFormat,

        #[arg(long, help = "Absolute output file path")]
        file: Option<String>,

        #[arg(long = "employee", help = "Export this employee's tasks instead of the report")]
        employee: Option<u64>,

        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long, help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Backup the data file
    Backup {
        #[arg(long, help = "Absolute destination file path")]
        file: String,

        #[arg(long, help = "Compress the backup (zip on Windows, tar.gz elsewhere)")]
        compress: bool,

        #[arg(long, help = "Overwrite destination without confirmation")]
        force: bool,
    },

    /// Start the REST service
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,

        /// Directory of a prebuilt front-end bundle to serve
        #[arg(long = "static-dir")]
        static_dir: Option<String>,
    },
}
