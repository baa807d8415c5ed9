//! All versions of one logical file, with content comparison.

use client::{
    FilesApiClient,
    api::files::{compare_file_versions, list_versions_of_file},
};
use common::{
    api_config::ApiConfig,
    file_version::FileVersionId,
    version_entry::comparison_label,
};
use dioxus::{logger::tracing, prelude::*};

use crate::components::{error_boundary::ComponentErrorDisplay, loading_indicator::LoadingIndicator};
use crate::data_definitions::session::use_session;

#[component]
pub fn VersionHistoryPanel(id: ReadSignal<FileVersionId>, version_number: ReadSignal<u64>) -> Element {
    let session = use_session();
    let config = use_context::<ApiConfig>();

    let mut history = use_resource(move || {
        let id = id();
        let credential = session.credential.read().clone();
        let config = config.clone();
        async move {
            let credential = credential?;
            let api = FilesApiClient::new(config, credential);
            Some(list_versions_of_file(&api, id).await)
        }
    });

    let versions = match &*history.read() {
        Some(Some(Ok(versions))) => versions.clone(),
        Some(Some(Err(e))) => return rsx! {
            ComponentErrorDisplay {
                title: e.headline("load the version history"),
                error_txt: e.to_string(),
                button {
                    onclick: move |_| history.restart(),
                    "Retry"
                }
            }
        },
        Some(None) => return rsx! {
            span { style: "color: rgba(0, 0, 0, 0.6);", "Enter an API token to see the version history." }
        },
        None => return rsx! { LoadingIndicator {} },
    };

    rsx! {
        ul {
            style: "
                list-style: none;
                margin: 4px 0 0 0;
                padding: 8px 12px;
                border-left: 3px solid #C7D2FE;
                display: flex;
                flex-direction: column;
                gap: 6px;
            ",
            for version in versions {
                li {
                    key: "{version.id}",
                    style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                    span { "{version.display_name()}" }
                    span { style: "color: rgba(0, 0, 0, 0.6);", "Version: {version.version_number}" }
                    if version.version_number == version_number() {
                        span { style: "font-style: italic; color: rgba(0, 0, 0, 0.5);", "this version" }
                    } else {
                        CompareWithVersion { id: id(), other_version: version.version_number }
                    }
                }
            }
        }
    }
}

#[component]
fn CompareWithVersion(id: ReadSignal<FileVersionId>, other_version: ReadSignal<u64>) -> Element {
    let session = use_session();
    let config = use_context::<ApiConfig>();
    let mut outcome = use_signal(|| None::<Result<&'static str, String>>);

    let do_compare = move |_| {
        let Some(credential) = session.credential.read().clone() else {
            outcome.set(Some(Err("Enter an API token first.".to_string())));
            return;
        };
        let api = FilesApiClient::new(config.clone(), credential);
        let id = id();
        let other_version = other_version();
        spawn(async move {
            let result = compare_file_versions(&api, id, other_version).await;
            if let Err(e) = &result {
                tracing::error!("compare {} with version {}: {}", id, other_version, e);
            }
            outcome.set(Some(result.map(comparison_label).map_err(|e| e.to_string())));
        });
    };

    let outcome_view = match outcome() {
        Some(Ok(label)) => rsx! { span { "{label}" } },
        Some(Err(e)) => rsx! { span { style: "color: darkred;", "{e}" } },
        None => rsx! {},
    };

    rsx! {
        button {
            style: "padding: 2px 10px; border-radius: 6px; border: 1px solid #D1D5DB; background: white; cursor: pointer;",
            onclick: do_compare,
            "Compare"
        }
        {outcome_view}
    }
}
