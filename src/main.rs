//! stockform main entrypoint.

use stockform::run;
use stockform::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
