//! The file versions fetched for one location.

use crate::{file_version::FileVersionRecord, location::Location};

#[derive(Debug, Clone, PartialEq)]
pub struct FolderListing {
    pub location: Location,
    pub records: Vec<FileVersionRecord>,
}

impl FolderListing {
    pub fn new(location: Location, records: Vec<FileVersionRecord>) -> Self {
        Self { location, records }
    }

    /// A listing fetched for another location is stale and must not be shown.
    pub fn is_current_for(&self, location: &Location) -> bool {
        &self.location == location
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Outcome of one listing request, tagged with the location it was issued
/// for. Failures carry no listing, so the tag is what lets them go stale too.
#[derive(Debug)]
pub struct ListingResponse<E> {
    pub location: Location,
    pub result: Result<FolderListing, E>,
}

impl<E> ListingResponse<E> {
    pub fn new(location: Location, result: Result<FolderListing, E>) -> Self {
        Self { location, result }
    }

    /// The outcome, or `None` when it answers a location the page already left.
    pub fn current_for(&self, location: &Location) -> Option<&Result<FolderListing, E>> {
        let current = &self.location == location
            && match &self.result {
                Ok(listing) => listing.is_current_for(location),
                Err(_) => true,
            };
        current.then_some(&self.result)
    }
}

pub fn folder_heading(location: &Location) -> String {
    format!("Current Folder: {}", location)
}

pub fn version_count_heading(count: usize) -> String {
    format!("Found {} File Versions", count)
}
