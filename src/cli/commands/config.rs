use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            if path.exists() {
                ConfigLogic::print(&path)?;
            } else {
                warning(format!(
                    "No configuration file at {}; effective defaults:",
                    path.display()
                ));
                print!("{}", serde_yaml::to_string(cfg).unwrap_or_default());
            }
        }

        if *edit_config {
            if !path.exists() {
                Config::init_all(false)?;
            }
            ConfigLogic::edit(&path, editor)?;
        }
    }
    Ok(())
}
