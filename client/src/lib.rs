//! Typed client for the document manager's file REST API.

pub mod api;
pub mod error;
pub mod http_utils;

pub use error::ApiError;
pub use http_utils::files_api_client::FilesApiClient;
