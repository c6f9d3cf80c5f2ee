//! Full-page navigation helpers.

/// Send the browser to `path` with a full page load.
///
/// The authenticated area is a separate application, so this bypasses the
/// client router. No-op outside the browser.
pub fn redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().set_href(path) {
                log::warn!("redirect to {path} failed: {e:?}");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
