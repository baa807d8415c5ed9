//! Failure modes of a backend call.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, CORS, ...).
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("the backend rejected the credential (HTTP {status})")]
    Unauthorized { status: u16 },

    /// 400 with a `{"message": ...}` payload.
    #[error("the backend rejected the request: {message}")]
    Rejected { message: String },

    #[error("the backend answered HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode the response from {url}: {source}")]
    MalformedBody {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not build the request: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }

    /// Panel title for a failed `action`, e.g. "list the file versions".
    /// A rejected credential gets its own title so the user knows to replace it.
    pub fn headline(&self, action: &str) -> String {
        if self.is_unauthorized() {
            "The API token was rejected".to_string()
        } else {
            format!("Could not {action}")
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { status } | ApiError::Status { status, .. } => Some(*status),
            ApiError::Rejected { .. } => Some(400),
            _ => None,
        }
    }
}
