//! NEONBEATS - music catalog web app

use neon_web::{config, App};

fn main() {
    if let Err(e) = dioxus::logger::init(config::log_level()) {
        eprintln!("Failed to initialize logging: {e}");
    }
    dioxus::launch(App);
}
