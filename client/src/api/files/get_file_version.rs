use common::file_version::{FileVersionId, FileVersionRecord};

use crate::{error::ApiError, http_utils::files_api_client::FilesApiClient};

pub async fn get_file_version(client: &FilesApiClient, id: FileVersionId) -> Result<FileVersionRecord, ApiError> {
    let url = client.config().detail_url(id);
    client.get_json(&url).await
}
