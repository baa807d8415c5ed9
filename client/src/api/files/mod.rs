//! File version endpoints and module exports.

mod list_file_versions;
pub use list_file_versions::{list_file_versions, list_folder};

mod upload_file_version;
pub use upload_file_version::upload_file_version;

mod get_file_version;
pub use get_file_version::get_file_version;

mod list_versions_of_file;
pub use list_versions_of_file::list_versions_of_file;

mod compare_file_versions;
pub use compare_file_versions::compare_file_versions;
