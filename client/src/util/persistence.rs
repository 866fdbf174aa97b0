//! Browser `localStorage` helpers for persisted client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session flags and the theme choice survive reloads through these
//! helpers. Reads and writes are best effort: outside the browser (SSR,
//! unit tests) loads return `None` and saves are no-ops.

use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Load a raw string value from `localStorage` for `key`.
pub fn load_raw(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a raw string value to `localStorage` for `key`.
pub fn save_raw(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.set_item(key, value);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Load a JSON value from `localStorage` for `key`.
///
/// A stored value that no longer parses is treated as absent.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = load_raw(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    save_raw(key, &raw);
}
