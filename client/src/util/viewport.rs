//! Viewport width classification and resize subscription.
//!
//! The gallery switches to its mobile layout at or below
//! [`MOBILE_BREAKPOINT_PX`]. Width reads and the resize listener need a
//! browser; SSR and native test builds fall back to "unknown width".

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

#[cfg(feature = "hydrate")]
use leptos::prelude::*;

/// Widest viewport (CSS px) that still gets the mobile layout.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

pub fn is_mobile_width(width: f64) -> bool {
    width <= MOBILE_BREAKPOINT_PX
}

/// Current `window.innerWidth`, if it can be read.
pub fn current_width() -> Option<f64> {
    #[cfg(feature = "hydrate")]
    {
        match web_sys::window()?.inner_width() {
            Ok(width) => width.as_f64(),
            Err(e) => {
                leptos::logging::warn!("viewport: innerWidth unavailable: {e:?}");
                None
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Call `on_mobile` with the mobile classification now and after every
/// window resize. The listener is removed when the current reactive owner is
/// cleaned up.
#[cfg(feature = "hydrate")]
pub fn watch_mobile(on_mobile: impl Fn(bool) + Send + Sync + 'static) {
    if let Some(width) = current_width() {
        on_mobile(is_mobile_width(width));
    }

    let handle = window_event_listener(leptos::ev::resize, move |_| {
        if let Some(width) = current_width() {
            on_mobile(is_mobile_width(width));
        }
    });
    on_cleanup(move || handle.remove());
}
