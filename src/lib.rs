//! presence-analyzer library root.
//! Exposes the weekday aggregation core, the data sources, the web API and
//! the CLI dispatcher.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod http;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Users => cli::commands::users::handle(cfg),
        Commands::MeanTime { .. } | Commands::Presence { .. } | Commands::StartEnd { .. } => {
            cli::commands::report::handle(&cli.command, cfg)
        }
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Serve { .. } => cli::commands::serve::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    let mut cfg = Config::load()?;

    // command-line overrides win over the config file
    if let Some(csv) = &cli.data_csv {
        cfg.data_csv = csv.clone();
    }
    if let Some(xml) = &cli.data_xml {
        cfg.data_xml = xml.clone();
    }

    dispatch(&cli, &cfg)
}
