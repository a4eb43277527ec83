//! Theme initialization and toggle.
//!
//! Reads the stored preference from `localStorage` and applies it as the
//! `data-theme` attribute on the `<html>` element. Toggle writes back to
//! `localStorage` and updates that attribute. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Preference persistence is best-effort browser-only behavior; SSR paths
//! safely no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::ui::Theme;
use crate::util::storage;

/// `localStorage` key holding `"light"` or `"dark"`.
pub const STORAGE_KEY: &str = "theme";

/// Read the theme preference, defaulting to light.
pub fn read_preference() -> Theme {
    storage::load_text(STORAGE_KEY).map_or(Theme::Light, |raw| Theme::parse(&raw))
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme, apply it, and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    storage::save_text(STORAGE_KEY, next.as_str());
    next
}
