//! Upload intents and the status shown by the upload form.

use std::fmt::Display;

use thiserror::Error;

use crate::location::Location;

/// Multipart field carrying the file bytes.
pub const FILE_FIELD: &str = "file";
/// Multipart field carrying the target location.
pub const LOCATION_FIELD: &str = "location";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("no file selected")]
    NoFileSelected,
    #[error("the selected file has no name")]
    EmptyFileName,
    #[error("{file_name} is empty")]
    EmptyFile { file_name: String },
}

/// A selected file bound to the location it will be uploaded to.
/// Consumed by a single upload request.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadIntent {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub location: Location,
}

impl UploadIntent {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>, location: Location) -> Result<Self, UploadError> {
        let file_name = file_name.into();
        if file_name.trim().is_empty() {
            return Err(UploadError::EmptyFileName);
        }
        if bytes.is_empty() {
            return Err(UploadError::EmptyFile { file_name });
        }
        Ok(Self { file_name, bytes, location })
    }

    /// Same as [`UploadIntent::new`] for a selection that may be missing.
    pub fn from_selection(selection: Option<(String, Vec<u8>)>, location: Location) -> Result<Self, UploadError> {
        let (file_name, bytes) = selection.ok_or(UploadError::NoFileSelected)?;
        Self::new(file_name, bytes, location)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    /// The selected file is being read into memory before the request is built.
    Reading { file_name: String },
    Uploading { file_name: String },
    Succeeded { file_name: String },
    Failed { message: String },
}

impl UploadStatus {
    pub fn from_outcome<E: Display>(file_name: &str, outcome: &Result<(), E>) -> Self {
        match outcome {
            Ok(()) => UploadStatus::Succeeded { file_name: file_name.to_string() },
            Err(e) => UploadStatus::Failed { message: format!("Upload of {file_name} failed: {e}") },
        }
    }

    pub fn rejected(error: &UploadError) -> Self {
        UploadStatus::Failed { message: error.to_string() }
    }

    /// First transition of a submission, taken before any await point so a
    /// second submit sees the form busy.
    pub fn begin(selected_file_name: Option<String>) -> Self {
        match selected_file_name {
            Some(file_name) => UploadStatus::Reading { file_name },
            None => UploadStatus::rejected(&UploadError::NoFileSelected),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, UploadStatus::Reading { .. } | UploadStatus::Uploading { .. })
    }

    /// The listing is re-fetched only after the server accepted the file.
    pub fn should_refresh_listing(&self) -> bool {
        matches!(self, UploadStatus::Succeeded { .. })
    }

    pub fn can_submit(&self, has_selection: bool) -> bool {
        has_selection && !self.is_in_flight()
    }

    pub fn message(&self) -> Option<String> {
        match self {
            UploadStatus::Idle => None,
            UploadStatus::Reading { file_name } => Some(format!("Reading {file_name}...")),
            UploadStatus::Uploading { file_name } => Some(format!("Uploading {file_name}...")),
            UploadStatus::Succeeded { file_name } => Some(format!("Uploaded {file_name}")),
            UploadStatus::Failed { message } => Some(message.clone()),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, UploadStatus::Failed { .. })
    }
}
