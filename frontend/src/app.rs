use dioxus::prelude::*;
use dioxus::logger::tracing;

use common::api_config::{API_BASE_ENV, ApiConfig};

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::session::use_session_provider;
use crate::routes::Route;
const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    let config = use_context_provider(ApiConfig::from_build_env);
    use_hook(move || tracing::info!("backend: {} (set {} at build time to change)", config.base_url, API_BASE_ENV));
    use_session_provider();

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        GlobalErrorBoundary {
            boundary_name: "App".to_string(),
            Router::<Route> {}
        }
    }
}
