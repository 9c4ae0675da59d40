use crate::core::export::ExportFormat;
use crate::core::report::ReportKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for presence-analyzer
#[derive(Parser)]
#[command(
    name = "presence-analyzer",
    version = env!("CARGO_PKG_VERSION"),
    about = "Weekday presence statistics from clock-in/clock-out logs, on the terminal or as a web API",
    long_about = None
)]
pub struct Cli {
    /// Override the presence CSV path
    #[arg(global = true, long = "data-csv", value_name = "FILE")]
    pub data_csv: Option<String>,

    /// Override the users XML path
    #[arg(global = true, long = "data-xml", value_name = "FILE")]
    pub data_xml: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Debug-level diagnostics on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration directory and default configuration file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $VISUAL, $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List users from the users XML
    Users,

    /// Mean presence time of a user grouped by weekday
    MeanTime {
        /// User id
        user_id: Option<u32>,

        #[command(flatten)]
        source: ReportSource,
    },

    /// Total presence time of a user grouped by weekday
    Presence {
        /// User id
        user_id: Option<u32>,

        #[command(flatten)]
        source: ReportSource,
    },

    /// Mean start and end time of a user grouped by weekday
    StartEnd {
        /// User id
        user_id: Option<u32>,

        #[command(flatten)]
        source: ReportSource,
    },

    /// Export a weekday report to a file
    Export {
        /// Report to export
        #[arg(long, value_enum)]
        report: ReportKind,

        /// User id
        #[arg(long = "user", value_name = "USER_ID")]
        user_id: u32,

        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file if it exists
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Serve the web API
    Serve {
        /// Listen host (default from config)
        #[arg(long)]
        host: Option<String>,

        /// Listen port (default from config)
        #[arg(long)]
        port: Option<u16>,
    },
}

/// Where a report's timetable comes from and how it is printed.
#[derive(clap::Args, Debug, Clone)]
pub struct ReportSource {
    /// Analyse a JSON timetable file (`{"YYYY-MM-DD": {"start": "HH:MM:SS", "end": "HH:MM:SS"}}`)
    /// instead of the presence CSV
    #[arg(
        long,
        value_name = "FILE",
        conflicts_with = "user_id",
        required_unless_present = "user_id"
    )]
    pub timetable: Option<String>,

    /// Print the web API JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl Commands {
    /// Report kind, user and source of the report subcommands.
    pub fn report_args(&self) -> Option<(ReportKind, Option<u32>, &ReportSource)> {
        match self {
            Commands::MeanTime { user_id, source } => Some((ReportKind::MeanTime, *user_id, source)),
            Commands::Presence { user_id, source } => Some((ReportKind::Presence, *user_id, source)),
            Commands::StartEnd { user_id, source } => Some((ReportKind::StartEnd, *user_id, source)),
            _ => None,
        }
    }
}
