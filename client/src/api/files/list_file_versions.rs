//! Listing of file versions, optionally scoped to a location.

use common::{
    file_query::FileListQuery,
    file_version::FileVersionRecord,
    folder_listing::FolderListing,
    location::Location,
};

use crate::{error::ApiError, http_utils::files_api_client::FilesApiClient};

pub async fn list_file_versions(client: &FilesApiClient, query: &FileListQuery) -> Result<Vec<FileVersionRecord>, ApiError> {
    let url = client.config().list_url(query);
    let records: Vec<FileVersionRecord> = client.get_json(&url).await?;
    tracing::info!("list_file_versions: {} records", records.len());
    Ok(records)
}

/// Fetches the records stored under `location`, tagged with that location so
/// the caller can drop the result if the user has moved on meanwhile.
pub async fn list_folder(client: &FilesApiClient, location: Location) -> Result<FolderListing, ApiError> {
    let records = list_file_versions(client, &FileListQuery::for_location(location.clone())).await?;
    Ok(FolderListing::new(location, records))
}
