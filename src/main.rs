//! presence-analyzer main entrypoint.

use presence_analyzer::run;
use presence_analyzer::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
