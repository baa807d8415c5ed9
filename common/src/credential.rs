//! Bearer credential presented on every backend request.

pub const AUTHORIZATION_SCHEME: &str = "Token";

/// Opaque API token. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Accepts a token as typed by a user: surrounding whitespace is dropped,
    /// a pasted `Token ` prefix is stripped, and blank input yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let token = trimmed
            .strip_prefix(AUTHORIZATION_SCHEME)
            .filter(|rest| rest.starts_with(char::is_whitespace))
            .map(str::trim_start)
            .unwrap_or(trimmed);
        if token.is_empty() {
            None
        } else {
            Some(Credential(token.to_string()))
        }
    }

    pub fn secret(&self) -> &str {
        &self.0
    }

    pub fn authorization_header_value(&self) -> String {
        format!("{} {}", AUTHORIZATION_SCHEME, self.0)
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Credential(***)")
    }
}
