//! Folder page: the file versions stored under the current location.

use client::{FilesApiClient, api::files::list_folder};
use common::{
    api_config::ApiConfig,
    folder_listing::{ListingResponse, folder_heading, version_count_heading},
    location::Location,
};
use dioxus::{logger::tracing, prelude::*};

use crate::components::{
    error_boundary::{ComponentErrorBoundary, ComponentErrorDisplay},
    loading_indicator::LoadingIndicator,
    upload_form::UploadForm,
    version_list_view::VersionListView,
};
use crate::data_definitions::session::use_session;

/// Folder page for `/`
#[component]
pub fn RootFolderPage() -> Element {
    rsx! {
        FolderPage { segments: Vec::new() }
    }
}

/// Folder page for any other path
#[component]
pub fn FolderPage(segments: Vec<String>) -> Element {
    let location = Location::from_segments(&segments);
    rsx! {
        Title { "Document Manager - {location}" }
        FolderPageRootComponent { location }
    }
}

#[component]
fn FolderPageRootComponent(location: ReadSignal<Location>) -> Element {
    let session = use_session();
    let config = use_context::<ApiConfig>();

    // re-runs whenever the location or the credential changes; restarting
    // drops the request still in flight for the previous values
    let mut listing = use_resource(move || {
        let location = location.read().clone();
        let credential = session.credential.read().clone();
        let config = config.clone();
        async move {
            let credential = credential?;
            tracing::info!("folder page: listing {}", location);
            let api = FilesApiClient::new(config, credential);
            let result = list_folder(&api, location.clone()).await;
            Some(ListingResponse::new(location, result))
        }
    });
    let refresh_listing = use_callback(move |_: ()| listing.restart());

    let current_location = location.read().clone();
    let mut record_count = 0;
    let body = match &*listing.read() {
        None => rsx! { LoadingIndicator {} },
        Some(None) => rsx! { CredentialRequired {} },
        Some(Some(response)) => match response.current_for(&current_location) {
            // answered for a location the user already left
            None => rsx! { LoadingIndicator {} },
            Some(Ok(folder)) => {
                record_count = folder.len();
                rsx! {
                    ComponentErrorBoundary {
                        VersionListView { records: folder.records.clone() }
                    }
                }
            }
            Some(Err(e)) => rsx! {
                ComponentErrorDisplay {
                    title: e.headline("list the file versions"),
                    error_txt: e.to_string(),
                    button {
                        style: "font-size: 16px; border: 1px solid blue; color: blue; padding: 6px 10px; border-radius: 5px; margin: 10px; background: white; cursor: pointer;",
                        onclick: move |_| refresh_listing.call(()),
                        "Try Again"
                    }
                }
            },
        },
    };

    rsx! {
        div {
            id: "x-folder-page-root-component",
            style: "
                display: flex;
                flex-direction: column;
                gap: 8px;
                max-width: 960px;
                margin: 0 auto;
                padding: 24px 32px;
            ",
            h1 {
                style: "font-size: 28px; font-weight: 500; margin: 0;",
                "{folder_heading(&current_location)}"
            }
            h2 {
                style: "font-size: 20px; font-weight: 300; color: rgb(75, 87, 112); margin: 0 0 12px 0;",
                "{version_count_heading(record_count)}"
            }
            UploadForm { location: current_location.clone(), on_uploaded: refresh_listing }
            {body}
        }
    }
}

#[component]
fn CredentialRequired() -> Element {
    rsx! {
        div {
            style: "
                padding: 16px;
                border: 1px dashed #9CA3AF;
                border-radius: 8px;
                color: #374151;
                background: white;
            ",
            "Enter an API token in the title bar to list the files in this folder."
        }
    }
}
