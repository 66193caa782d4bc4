use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shiftsheet
#[derive(Parser)]
#[command(
    name = "shiftsheet",
    version = env!("CARGO_PKG_VERSION"),
    about = "Turn pasted shift reports into a timesheet: lanes, durations, exports and Pareto",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
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

        #[arg(long = "editor", help = "Editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Import a multi-lane report; date and shift are read from the text
    Import {
        /// Report file (reads stdin when omitted)
        #[arg(long, short = 'f', value_name = "FILE")]
        file: Option<String>,

        #[arg(long = "dry-run", help = "Show parsed rows without saving them")]
        dry_run: bool,
    },

    /// Import a report for a single lane with an explicit date
    Lane {
        #[arg(long, help = "Date stored on every row, e.g. \"05 October 2025\"")]
        date: String,

        #[arg(long, help = "Lane: A, B or Trucking")]
        lane: String,

        #[arg(long, help = "Shift label (default: unknown)")]
        shift: Option<String>,

        /// Report file (reads stdin when omitted)
        #[arg(long, short = 'f', value_name = "FILE")]
        file: Option<String>,

        #[arg(long = "dry-run", help = "Show parsed rows without saving them")]
        dry_run: bool,
    },

    /// List stored rows
    List {
        #[arg(long, help = "Only rows whose date matches exactly")]
        date: Option<String>,
    },

    /// Delete stored rows by date, or all of them
    Del {
        #[arg(long, conflicts_with = "date", help = "Delete every stored row")]
        all: bool,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,

        /// Exact date string as stored (see `list`)
        #[arg(required_unless_present = "all")]
        date: Option<String>,
    },

    /// Export stored rows
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (default from config)")]
        file: Option<String>,

        #[arg(
            long,
            value_name = "KEYWORD",
            num_args = 0..=1,
            default_missing_value = "",
            help = "Drop rows whose description contains KEYWORD (default: configured keyword)"
        )]
        exclude: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Hours per activity, largest first (rows with the configured keyword left out)
    Pareto {
        #[arg(
            long,
            value_name = "KEYWORD",
            num_args = 0..=1,
            default_missing_value = "",
            help = "Drop rows whose description contains KEYWORD instead of the configured keyword"
        )]
        exclude: Option<String>,

        #[arg(long, conflicts_with = "exclude", help = "Keep every row")]
        all: bool,

        #[arg(long = "by-lane", help = "One table per lane")]
        by_lane: bool,
    },
}
