//! Browser `localStorage` persistence for the history log and theme flag.
//!
//! All failures (private mode, quota, blocked storage) are logged and
//! otherwise ignored; the app keeps working from memory.

use crate::config::{HISTORY_KEY, THEME_KEY};
use crate::history::History;
use log::{debug, warn};
use web_sys::Storage;

fn local_storage() -> Option<Storage> {
    match gloo_utils::window().local_storage() {
        Ok(Some(storage)) => Some(storage),
        Ok(None) => {
            warn!("localStorage is not available");
            None
        }
        Err(e) => {
            warn!("localStorage access denied: {:?}", e);
            None
        }
    }
}

fn read(key: &str) -> Option<String> {
    local_storage()?.get_item(key).unwrap_or_else(|e| {
        warn!("Failed to read '{}': {:?}", key, e);
        None
    })
}

fn write(key: &str, value: &str) {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.set_item(key, value) {
            warn!("Failed to write '{}': {:?}", key, e);
        }
    }
}

fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.remove_item(key) {
            warn!("Failed to remove '{}': {:?}", key, e);
        }
    }
}

pub fn load_history() -> History {
    let history = History::from_stored(read(HISTORY_KEY).as_deref());
    debug!("Loaded {} history entries", history.len());
    history
}

/// Overwrite the stored log; an empty log removes the key.
pub fn save_history(history: &History) {
    if history.is_empty() {
        remove(HISTORY_KEY);
        return;
    }
    match history.to_json() {
        Ok(json) => write(HISTORY_KEY, &json),
        Err(e) => warn!("Failed to serialize history: {}", e),
    }
}

/// Decode a stored theme flag. `null`, missing or malformed values mean
/// "no preference".
pub fn parse_theme_flag(raw: Option<&str>) -> Option<bool> {
    serde_json::from_str::<Option<bool>>(raw?).unwrap_or_else(|e| {
        warn!("Ignoring unreadable theme flag: {}", e);
        None
    })
}

pub fn load_theme() -> Option<bool> {
    parse_theme_flag(read(THEME_KEY).as_deref())
}

pub fn save_theme(dark: bool) {
    match serde_json::to_string(&dark) {
        Ok(json) => write(THEME_KEY, &json),
        Err(e) => warn!("Failed to serialize theme flag: {}", e),
    }
}

/// Whether the platform asks for a dark color scheme.
pub fn prefers_dark() -> bool {
    gloo_utils::window()
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false)
}

/// Stored theme, falling back to the platform preference.
pub fn initial_theme() -> bool {
    load_theme().unwrap_or_else(prefers_dark)
}

/// Set `data-theme` on the root element.
pub fn apply_theme(dark: bool) {
    let theme = if dark { "dark" } else { "light" };
    match gloo_utils::document().document_element() {
        Some(root) => {
            if let Err(e) = root.set_attribute("data-theme", theme) {
                warn!("Failed to apply theme: {:?}", e);
            }
        }
        None => warn!("Document has no root element"),
    }
}
