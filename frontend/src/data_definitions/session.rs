//! Session context holding the credential used for backend calls.

use common::credential::Credential;
use dioxus::logger::tracing;
use dioxus::prelude::*;

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
const CREDENTIAL_STORAGE_KEY: &str = "doc_manager.credential";

/// Shared by every component that talks to the backend. Replacing the
/// credential re-runs the requests that read it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionContext {
    pub credential: Signal<Option<Credential>>,
}

impl SessionContext {
    pub fn sign_in(mut self, credential: Credential) {
        store_credential(Some(&credential));
        self.credential.set(Some(credential));
        tracing::info!("session: credential set");
    }

    pub fn sign_out(mut self) {
        store_credential(None);
        self.credential.set(None);
        tracing::info!("session: credential cleared");
    }

    pub fn is_signed_in(&self) -> bool {
        self.credential.read().is_some()
    }
}

pub fn use_session_provider() -> SessionContext {
    use_context_provider(|| SessionContext { credential: Signal::new(load_stored_credential()) })
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

// the credential only lives as long as the browser tab's session storage
#[cfg(target_arch = "wasm32")]
fn session_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

#[cfg(target_arch = "wasm32")]
fn load_stored_credential() -> Option<Credential> {
    let stored = session_storage()?.get_item(CREDENTIAL_STORAGE_KEY).ok().flatten()?;
    Credential::parse(&stored)
}

#[cfg(not(target_arch = "wasm32"))]
fn load_stored_credential() -> Option<Credential> {
    None
}

#[cfg(target_arch = "wasm32")]
fn store_credential(credential: Option<&Credential>) {
    let Some(storage) = session_storage() else {
        tracing::warn!("session: no session storage, credential kept in memory only");
        return;
    };
    let result = match credential {
        Some(credential) => storage.set_item(CREDENTIAL_STORAGE_KEY, credential.secret()),
        None => storage.remove_item(CREDENTIAL_STORAGE_KEY),
    };
    if let Err(e) = result {
        tracing::warn!("session: could not update session storage: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn store_credential(_credential: Option<&Credential>) {}
