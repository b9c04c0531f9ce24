//! Theme preference for the viewer chrome.
//!
//! The preference lives in `localStorage` and is applied as a `data-theme`
//! attribute on `<html>`. Without a stored value the system color scheme
//! decides. SSR paths no-op so server output stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "notebook_viewer_dark";

/// `data-theme` value for a dark-mode flag.
pub fn theme_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Interpret a stored preference. Anything unexpected counts as unset.
pub fn parse_stored(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Stored preference, else the system preference, else light.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let stored = window
            .local_storage()
            .ok()
            .flatten()
            .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
            .and_then(|value| parse_stored(&value));
        stored.unwrap_or_else(|| {
            window
                .match_media("(prefers-color-scheme: dark)")
                .ok()
                .flatten()
                .is_some_and(|mq| mq.matches())
        })
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element());
        if let Some(root) = root {
            let _ = root.set_attribute("data-theme", theme_name(dark));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = dark;
    }
}

/// Flip the theme, apply it and persist the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            if storage.set_item(STORAGE_KEY, if next { "true" } else { "false" }).is_err() {
                log::warn!("could not persist theme preference");
            }
        }
    }
    next
}
