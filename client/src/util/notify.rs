//! User-facing notifications.
//!
//! Blocking notices use `window.alert`; the message is always logged too so
//! failures stay visible in the console after the dialog is dismissed.

/// Show a blocking notice to the user.
pub fn alert(message: &str) {
    leptos::logging::log!("notify: {message}");
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
}
