use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

pub fn handle(cli: &Cli) -> AppResult<()> {
    let file = Config::config_file();

    if file.exists() && !cli.test {
        warning(format!("Config file already exists: {}", file.display()));
        return Ok(());
    }

    let path = Config::init_all(cli.test)?;

    if cli.test {
        info("Test mode: configuration file not written");
    } else {
        success(format!("Config file: {}", path.display()));
    }

    let cfg = Config::default();
    info(format!("Presence CSV: {}", cfg.data_csv));
    info(format!("Users XML:    {}", cfg.data_xml));
    Ok(())
}
