//! Filters accepted by the file listing endpoint.

use crate::location::Location;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FileListQuery {
    pub location: Option<Location>,
    pub file_name: Option<String>,
    pub extension: Option<String>,
    pub content_md5: Option<String>,
}

impl FileListQuery {
    pub fn for_location(location: Location) -> Self {
        Self { location: Some(location), ..Default::default() }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    pub fn with_content_md5(mut self, content_md5: impl Into<String>) -> Self {
        self.content_md5 = Some(content_md5.into());
        self
    }

    /// Non-empty filters in a stable order. The backend ignores blank values,
    /// so they are never sent.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let location = self.location.as_ref().map(|l| l.as_str().to_string());
        [
            ("location", location),
            ("file_name", self.file_name.clone()),
            ("extension", self.extension.clone()),
            ("content_md5", self.content_md5.clone()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.filter(|v| !v.is_empty()).map(|v| (key, v)))
        .collect()
    }

    pub fn to_query_string(&self) -> String {
        self.query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}
