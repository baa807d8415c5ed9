//! Location strings scoping which file versions are listed and where uploads land.

use std::fmt::Display;

pub const ROOT_LOCATION: &str = "/";

/// Opaque path-like scope. Only compared by string equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Location(String);

impl Location {
    /// Builds a location from a page path; an empty path means the root.
    pub fn from_path(path: impl Into<String>) -> Self {
        let path = path.into();
        if path.is_empty() {
            Self::root()
        } else {
            Location(path)
        }
    }

    /// Builds a location from router catch-all segments.
    ///
    /// A trailing empty segment keeps its trailing slash, so `/test/` and `/test`
    /// stay distinct just as they are in the browser address bar.
    pub fn from_segments(segments: &[String]) -> Self {
        if segments.iter().all(|s| s.is_empty()) && segments.len() <= 1 {
            return Self::root();
        }
        Location(format!("/{}", segments.join("/")))
    }

    pub fn root() -> Self {
        Location(ROOT_LOCATION.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits the location back into router segments, inverse of [`Location::from_segments`].
    pub fn to_segments(&self) -> Vec<String> {
        if self.0 == ROOT_LOCATION {
            return vec![];
        }
        self.0.trim_start_matches('/').split('/').map(|s| s.to_string()).collect()
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::root()
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Location {
    fn from(value: &str) -> Self {
        Location::from_path(value)
    }
}
