//! rabsen main entrypoint.

use rabsen::run;
use rabsen::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
