//! List of file versions with download and history actions.

use common::{
    api_config::ApiConfig,
    file_version::FileVersionRecord,
    version_entry::{VersionEntryView, version_entries},
};
use dioxus::prelude::*;
use dioxus_free_icons::{Icon, icons::{md_action_icons::MdHistory, md_file_icons::MdFileDownload}};

use crate::components::version_history_panel::VersionHistoryPanel;

/// Renders `records` in the order given. Holds no data of its own.
#[component]
pub fn VersionListView(records: ReadSignal<Vec<FileVersionRecord>>) -> Element {
    let config = use_context::<ApiConfig>();
    let entries = version_entries(&records.read(), &config);

    rsx! {
        div {
            id: "x-version-list",
            style: "
                display: flex;
                flex-direction: column;
                gap: 10px;
                width: 100%;
            ",
            for entry in entries {
                VersionEntryCard { key: "{entry.id}", entry: entry.clone() }
            }
        }
    }
}

#[component]
fn VersionEntryCard(entry: ReadSignal<VersionEntryView>) -> Element {
    let mut show_history = use_signal(|| false);
    let VersionEntryView { id, heading, version_number, version_text, download_href } = entry.read().clone();

    rsx! {
        div {
            class: "file-version",
            style: "
                display: flex;
                flex-direction: column;
                gap: 6px;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 8px;
                padding: 12px 16px;
            ",
            h2 {
                style: "font-size: 20px; font-weight: 500; margin: 0;",
                "{heading}"
            }
            p {
                style: "margin: 0; color: rgba(0, 0, 0, 0.7);",
                "{version_text}"
            }
            div {
                style: "display: flex; flex-direction: row; gap: 8px;",
                a {
                    class: "doc-manager-hover-shadow",
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 6px;
                        padding: 6px 12px;
                        border-radius: 8px;
                        background: #4F46E5;
                        color: white;
                        text-decoration: none;
                    ",
                    href: "{download_href}",
                    Icon { icon: MdFileDownload, style: "width: 18px; height: 18px;" }
                    "Download"
                }
                button {
                    class: "doc-manager-hover-shadow",
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 6px;
                        padding: 6px 12px;
                        border-radius: 8px;
                        border: 1px solid #D1D5DB;
                        background: white;
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        *show_history.write() ^= true;
                    },
                    Icon { icon: MdHistory, style: "width: 18px; height: 18px;" }
                    if show_history() { "Hide history" } else { "History" }
                }
            }
            if show_history() {
                VersionHistoryPanel { id, version_number }
            }
        }
    }
}
