//! Backend address and REST endpoint construction.

use crate::{file_query::FileListQuery, file_version::FileVersionId};

pub const DEFAULT_API_BASE: &str = "http://localhost:8001";
pub const API_BASE_ENV: &str = "DOC_MANAGER_API_BASE";

const FILES_PATH: &str = "/api/files/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self { base_url: base_url.trim_end_matches('/').to_string() }
    }

    /// Reads the backend address baked in at build time. A wasm bundle has
    /// no process environment, so the override must be known when compiling.
    pub fn from_build_env() -> Self {
        Self::from_override(option_env!("DOC_MANAGER_API_BASE"))
    }

    pub fn from_override(base_url: Option<&str>) -> Self {
        match base_url.map(str::trim).filter(|s| !s.is_empty()) {
            Some(base_url) => Self::new(base_url),
            None => Self::default(),
        }
    }

    /// `POST` target for uploads, and `GET` target for listings without filters.
    pub fn files_url(&self) -> String {
        format!("{}{}", self.base_url, FILES_PATH)
    }

    pub fn list_url(&self, query: &FileListQuery) -> String {
        let query_string = query.to_query_string();
        if query_string.is_empty() {
            self.files_url()
        } else {
            format!("{}?{}", self.files_url(), query_string)
        }
    }

    pub fn detail_url(&self, id: FileVersionId) -> String {
        format!("{}{}{}/", self.base_url, FILES_PATH, id)
    }

    pub fn download_url(&self, id: FileVersionId) -> String {
        format!("{}download/", self.detail_url(id))
    }

    pub fn versions_url(&self, id: FileVersionId) -> String {
        format!("{}versions/", self.detail_url(id))
    }

    pub fn compare_url(&self, id: FileVersionId, version_number: u64) -> String {
        format!("{}compare/{}/", self.detail_url(id), version_number)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}
