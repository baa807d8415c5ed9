//! REST endpoints grouped by resource.

pub mod files;
