//! Viewport width lookup for the responsive sidebar.
//!
//! Browser-only; server rendering has no viewport and always reports `None`
//! so the sidebar renders expanded.

/// Current `window.innerWidth` in CSS pixels.
pub fn width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.inner_width().ok()?.as_f64()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Go back one entry in the browser history.
pub fn history_back() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(history) = web_sys::window().and_then(|w| w.history().ok()) {
            let _ = history.back();
        }
    }
}

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;
