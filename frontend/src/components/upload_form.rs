//! Upload form for adding a file version to the current location.

use client::{FilesApiClient, api::files::upload_file_version};
use common::{
    api_config::ApiConfig,
    location::Location,
    upload::{UploadIntent, UploadStatus},
};
use dioxus::{html::FileData, logger::tracing, prelude::*};
use dioxus_free_icons::{Icon, icons::md_file_icons::MdFileUpload};

use crate::data_definitions::session::use_session;

#[component]
pub fn UploadForm(location: ReadSignal<Location>, on_uploaded: Callback<()>) -> Element {
    let session = use_session();
    let config = use_context::<ApiConfig>();
    let mut selected_file = use_signal(|| None::<FileData>);
    let mut status = use_signal(UploadStatus::default);
    // bumped to remount the file input, which is the only way to clear it
    let mut input_generation = use_signal(|| 0_u64);

    let handle_change = move |evt: FormEvent| {
        let file = evt.files().into_iter().next();
        if let Some(file) = &file {
            tracing::debug!("upload: selected {}", file.name());
        }
        selected_file.set(file);
        status.set(UploadStatus::Idle);
    };

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if status.read().is_in_flight() {
            return;
        }
        let file = selected_file.read().clone();
        // busy before the first await, so a second click is ignored
        status.set(UploadStatus::begin(file.as_ref().map(|f| f.name())));
        let Some(file) = file else {
            return;
        };
        let location = location.read().clone();
        let credential = session.credential.read().clone();
        let config = config.clone();

        spawn(async move {
            let bytes = match file.read_bytes().await {
                Ok(bytes) => bytes.to_vec(),
                Err(e) => {
                    tracing::error!("upload: could not read {}: {}", file.name(), e);
                    status.set(UploadStatus::Failed { message: format!("Could not read {}: {}", file.name(), e) });
                    return;
                }
            };
            let intent = match UploadIntent::from_selection(Some((file.name(), bytes)), location) {
                Ok(intent) => intent,
                Err(e) => {
                    status.set(UploadStatus::rejected(&e));
                    return;
                }
            };
            let Some(credential) = credential else {
                status.set(UploadStatus::Failed { message: "Enter an API token before uploading.".to_string() });
                return;
            };

            let file_name = intent.file_name.clone();
            status.set(UploadStatus::Uploading { file_name: file_name.clone() });
            let api = FilesApiClient::new(config, credential);
            let outcome = upload_file_version(&api, intent).await;
            if let Err(e) = &outcome {
                tracing::error!("upload: {} failed: {}", file_name, e);
            }

            let next = UploadStatus::from_outcome(&file_name, &outcome);
            if next.should_refresh_listing() {
                selected_file.set(None);
                *input_generation.write() += 1;
                on_uploaded.call(());
            }
            status.set(next);
        });
    };

    let can_submit = status.read().can_submit(selected_file.read().is_some());
    let status_message = status.read().message();
    let status_color = if status.read().is_error() { "darkred" } else { "rgba(0, 0, 0, 0.7)" };

    rsx! {
        div {
            class: "file-upload",
            style: "
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 8px;
                padding: 12px 16px;
                margin-bottom: 16px;
            ",
            form {
                style: "display: flex; flex-direction: column; gap: 10px;",
                onsubmit: handle_submit,
                h3 { style: "margin: 0; font-size: 18px; font-weight: 500;", "Upload file" }
                div {
                    style: "display: flex; flex-direction: row; align-items: center; gap: 12px;",
                    // keyed so a new generation replaces the element
                    for generation in std::iter::once(input_generation()) {
                        input {
                            key: "{generation}",
                            r#type: "file",
                            multiple: false,
                            onchange: handle_change,
                        }
                    }
                    button {
                        r#type: "submit",
                        class: "doc-manager-hover-shadow",
                        disabled: !can_submit,
                        style: "
                            display: flex;
                            align-items: center;
                            gap: 6px;
                            padding: 6px 12px;
                            border-radius: 8px;
                            border: none;
                            background: #4F46E5;
                            color: white;
                            cursor: pointer;
                        ",
                        Icon { icon: MdFileUpload, style: "width: 18px; height: 18px;" }
                        "Upload"
                    }
                }
                if let Some(message) = status_message {
                    div { style: "color: {status_color};", "{message}" }
                }
            }
        }
    }
}
