//! Multipart upload of a new file version.

use common::upload::{FILE_FIELD, LOCATION_FIELD, UploadIntent};
use reqwest::multipart::{Form, Part};

use crate::{error::ApiError, http_utils::files_api_client::FilesApiClient};

/// Sends `intent` to the backend. The intent is consumed: a failed upload is
/// not retried from here.
pub async fn upload_file_version(client: &FilesApiClient, intent: UploadIntent) -> Result<(), ApiError> {
    let url = client.config().files_url();
    let UploadIntent { file_name, bytes, location } = intent;
    tracing::info!("POST {}: {} ({} bytes) to {}", url, file_name, bytes.len(), location);

    let part = Part::bytes(bytes)
        .file_name(file_name.clone())
        .mime_str("application/octet-stream")
        .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;
    let form = Form::new()
        .part(FILE_FIELD, part)
        .text(LOCATION_FIELD, location.as_str().to_string());

    // the response body (the stored record) is not used
    client.send(&url, client.post(&url).multipart(form)).await?;
    tracing::info!("upload_file_version: {} accepted", file_name);
    Ok(())
}
