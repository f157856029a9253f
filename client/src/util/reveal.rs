//! Reveal-on-scroll for gallery cards.
//!
//! Each card owns one `IntersectionObserver`. The first time the card is at
//! least [`REVEAL_THRESHOLD`] visible the observer fires its callback once and
//! disconnects; reveal is never reverted. Dropping the watcher disconnects it,
//! so an unmounted card stops being observed.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
#[cfg(feature = "hydrate")]
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Fraction of a card that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// Class added to a card once it has been revealed.
pub const REVEALED_CLASS: &str = "project-card--revealed";

/// Whether a batch of intersection reports should reveal the card.
pub fn should_reveal(intersecting: impl IntoIterator<Item = bool>) -> bool {
    intersecting.into_iter().any(|hit| hit)
}

#[cfg(feature = "hydrate")]
type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Live observer for one card.
#[cfg(feature = "hydrate")]
pub struct RevealWatcher {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

#[cfg(feature = "hydrate")]
impl RevealWatcher {
    /// Start observing `target`. Returns `None` if the browser refuses to
    /// build an observer; callers should reveal immediately in that case.
    pub fn observe(target: &Element, on_reveal: impl Fn() + 'static) -> Option<Self> {
        let callback: ObserverCallback = Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            let hits = entries
                .iter()
                .map(|entry| entry.unchecked_into::<IntersectionObserverEntry>().is_intersecting());
            if should_reveal(hits) {
                on_reveal();
                observer.disconnect();
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
            Ok(observer) => observer,
            Err(e) => {
                leptos::logging::warn!("reveal: IntersectionObserver unavailable: {e:?}");
                return None;
            }
        };
        observer.observe(target);

        Some(Self { observer, _callback: callback })
    }
}

#[cfg(feature = "hydrate")]
impl Drop for RevealWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
