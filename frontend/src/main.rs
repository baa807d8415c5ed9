//! Frontend application entry point.

use dioxus::logger::tracing::Level;
use frontend::app::App;

fn main() {
    #[cfg(debug_assertions)]
    let level = Level::DEBUG;
    #[cfg(not(debug_assertions))]
    let level = Level::INFO;
    if let Err(e) = dioxus::logger::init(level) {
        eprintln!("logger failed to init: {e}");
    }

    dioxus::launch(App);
}
