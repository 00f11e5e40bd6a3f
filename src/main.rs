//! rWorkHistory main entrypoint.

use rworkhistory::run;

fn main() {
    if let Err(e) = run() {
        rworkhistory::ui::messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
