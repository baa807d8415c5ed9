//! Page layout: title bar with the session controls above the routed page.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_file_icons::MdFolder;
use dioxus_free_icons::Icon;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::components::session_bar::SessionBar;
use crate::routes::Route;

#[component]
pub fn PageShell() -> Element {
    rsx! {
        div {
            id: "x-page-shell",
            style: "
                display:flex;
                flex-direction: column;
                width: 100%;
                height: 100%;
            ",

            div {
                id: "x-title-bar",
                style: "
                    display:flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 12px;
                    height: 64px;
                    padding: 0 24px;
                    background-color: #1C212D;
                    color: white;
                    flex-shrink: 0;
                ",
                Link {
                    to: Route::RootFolderPage {},
                    div {
                        style: "display:flex; align-items:center; gap: 8px; color: white; font-size: 22px; font-weight: 500;",
                        Icon { icon: MdFolder, style: "width: 28px; height: 28px;" }
                        "Document Manager"
                    }
                }
                // empty space
                div { style: "flex-grow:1;" }
                SessionBar {}
            }

            div {
                id: "x-page-container",
                style: "flex-grow:1; overflow: auto;",
                GlobalErrorBoundary {
                    boundary_name: "PageShell".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}
