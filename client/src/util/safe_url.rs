//! Gate for navigating to backend-supplied job URLs.
//!
//! Job URLs come straight from scraped pages. Only `http`/`https` targets are
//! ever opened; anything else (`javascript:`, `data:`, relative paths, empty
//! strings) is dropped without navigation.

#[cfg(test)]
#[path = "safe_url_test.rs"]
mod safe_url_test;

/// Return the trimmed URL if its scheme is `http` or `https`.
pub fn navigable_url(raw: &str) -> Option<&str> {
    let url = raw.trim();
    let (scheme, rest) = url.split_once(':')?;
    let allowed = scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https");
    let host = rest.strip_prefix("//")?;
    (allowed && !host.is_empty()).then_some(url)
}

/// Open `raw` in a new browsing context if it passes [`navigable_url`].
///
/// Returns `true` when a navigation was issued.
pub fn open_in_new_tab(raw: &str) -> bool {
    let Some(url) = navigable_url(raw) else {
        leptos::logging::log!("refusing to open job url with unsupported scheme");
        return false;
    };
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if let Err(e) = window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer") {
            leptos::logging::warn!("window.open failed: {e:?}");
            return false;
        }
        true
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = url;
        true
    }
}
