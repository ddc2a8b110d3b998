//! localStorage helpers for small UI state (JSON values)

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save a value as JSON under `key`
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    match serde_json::to_string(value) {
        Ok(json) => {
            let _ = storage.set_item(key, &json);
        }
        Err(e) => log::warn!("Failed to serialize {}: {}", key, e),
    }
}

/// Load a JSON value; missing or unreadable entries give `None`
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = get_local_storage()?.get_item(key).ok()??;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Discarding stored {}: {}", key, e);
            None
        }
    }
}

pub fn remove(key: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(key);
    }
}
