use crate::config::Config;
use crate::data::get_users;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::table::Table;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let users = get_users(&cfg.data_xml_path())?;

    if users.is_empty() {
        warning("No users found");
        return Ok(());
    }

    let mut table = Table::new(["ID", "Name", "Avatar"]);
    for user in users.values() {
        table.add_row(vec![user.id.to_string(), user.name.clone(), user.avatar.clone()]);
    }

    print!("{}", table.render());
    Ok(())
}
