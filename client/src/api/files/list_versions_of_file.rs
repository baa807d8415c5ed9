//! Every version of the logical file a record belongs to.

use common::file_version::{FileVersionId, FileVersionRecord};

use crate::{error::ApiError, http_utils::files_api_client::FilesApiClient};

/// The backend groups versions by location, file name and extension.
pub async fn list_versions_of_file(client: &FilesApiClient, id: FileVersionId) -> Result<Vec<FileVersionRecord>, ApiError> {
    let url = client.config().versions_url(id);
    let versions: Vec<FileVersionRecord> = client.get_json(&url).await?;
    tracing::info!("list_versions_of_file: {} has {} versions", id, versions.len());
    Ok(versions)
}
