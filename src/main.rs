//! rBiccame main entrypoint.

use rbiccame::run;
use rbiccame::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
