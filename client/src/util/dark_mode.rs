//! Dark mode preference and theme attribute.
//!
//! The preference lives in `localStorage`; without one the system color
//! scheme decides. The theme is applied as `data-theme` on `<html>`, which the
//! stylesheet keys its palette on.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! no-op so server rendering stays deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::util::storage;

pub const STORAGE_KEY: &str = "marketplace_admin_dark";

/// Stored preference, else the system `prefers-color-scheme`.
pub fn read_preference() -> bool {
    if let Some(stored) = storage::load_string(STORAGE_KEY) {
        return stored == "true";
    }
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Set `data-theme` on the document element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Flip, apply and persist; returns the new value.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::save_string(STORAGE_KEY, if next { "true" } else { "false" });
    next
}
