//! Browser `sessionStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! OAuth login is a full-page round trip through the provider, which wipes
//! in-memory state. The pending redirect target is parked here before
//! leaving and taken back once the callback is handled.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Key holding the post-login redirect target across the OAuth round trip.
pub const PENDING_REDIRECT_KEY: &str = "gamerblog_pending_redirect";

/// Save a JSON value to `sessionStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Load and remove a JSON value from `sessionStorage`.
pub fn take_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        let _ = storage.remove_item(key);
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}
