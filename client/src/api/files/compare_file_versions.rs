use common::file_version::{FileComparison, FileVersionId};

use crate::{error::ApiError, http_utils::files_api_client::FilesApiClient};

/// Compares the content of record `id` with another version of the same file.
/// An unknown `version_number` comes back as [`ApiError::Rejected`].
pub async fn compare_file_versions(client: &FilesApiClient, id: FileVersionId, version_number: u64) -> Result<FileComparison, ApiError> {
    let url = client.config().compare_url(id, version_number);
    client.get_json(&url).await
}
