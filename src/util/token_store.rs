//! Durable storage for the session token.
//!
//! One fixed `localStorage` key. Requires a browser environment; on the
//! server (and in native tests) reads report an absent token and writes are
//! no-ops, so callers degrade instead of crashing.

use crate::state::session::SessionError;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "attendance_auth_token";

#[cfg(feature = "hydrate")]
fn storage() -> Result<web_sys::Storage, SessionError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(SessionError::StorageUnavailable)
}

/// Read the persisted token. `Ok(None)` when no token is stored;
/// `Err(StorageUnavailable)` when storage itself cannot be reached.
pub fn read() -> Result<Option<String>, SessionError> {
    #[cfg(feature = "hydrate")]
    {
        let storage = storage()?;
        storage
            .get_item(STORAGE_KEY)
            .map_err(|_| SessionError::StorageUnavailable)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(None)
    }
}

/// Persist the token. Storage failures are logged and swallowed; the
/// in-memory session stays authoritative for this process.
pub fn write(token: &str) {
    #[cfg(feature = "hydrate")]
    {
        match storage() {
            Ok(storage) => {
                if storage.set_item(STORAGE_KEY, token).is_err() {
                    leptos::logging::warn!("token store: write failed");
                }
            }
            Err(e) => leptos::logging::warn!("token store: {e}"),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
    }
}

/// Erase the persisted token. Idempotent.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Ok(storage) = storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}
