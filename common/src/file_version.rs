//! File version records as served by the document backend.

use std::fmt::Display;

use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileVersionId(pub u64);

impl Display for FileVersionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One immutable snapshot of a file. The server assigns `id` and `version_number`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileVersionRecord {
    pub id: FileVersionId,
    pub file_name: String,
    pub extension: String,
    pub version_number: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_md5: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl FileVersionRecord {
    pub fn new(id: u64, file_name: impl Into<String>, extension: impl Into<String>, version_number: u64) -> Self {
        Self {
            id: FileVersionId(id),
            file_name: file_name.into(),
            extension: extension.into(),
            version_number,
            location: None,
            content_md5: None,
            created_at: None,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{}.{}", self.file_name, self.extension)
    }
}

/// Answer of the compare endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileComparison {
    pub is_diff: bool,
}

/// Error payload the backend attaches to rejected requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerMessage {
    pub message: String,
}
