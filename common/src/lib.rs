//! Common library exports shared between the API client and the frontend.

extern crate serde;


pub mod api_config;
pub mod credential;
pub mod file_query;
pub mod file_version;
pub mod folder_listing;
pub mod location;
pub mod upload;
pub mod version_entry;
