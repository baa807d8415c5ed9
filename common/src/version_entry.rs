//! Display model for one entry of the version list.

use crate::{
    api_config::ApiConfig,
    file_version::{FileComparison, FileVersionId, FileVersionRecord},
};

#[derive(Debug, Clone, PartialEq)]
pub struct VersionEntryView {
    pub id: FileVersionId,
    pub heading: String,
    pub version_number: u64,
    pub version_text: String,
    pub download_href: String,
}

impl VersionEntryView {
    pub fn from_record(record: &FileVersionRecord, config: &ApiConfig) -> Self {
        Self {
            id: record.id,
            heading: record.display_name(),
            version_number: record.version_number,
            version_text: format!("Version: {}", record.version_number),
            download_href: config.download_url(record.id),
        }
    }
}

/// One view per record, in the order the backend returned them.
pub fn version_entries(records: &[FileVersionRecord], config: &ApiConfig) -> Vec<VersionEntryView> {
    records.iter().map(|r| VersionEntryView::from_record(r, config)).collect()
}

pub fn comparison_label(comparison: FileComparison) -> &'static str {
    if comparison.is_diff { "Content differs" } else { "Same content" }
}
