//! Gallery display state (pagination, mobile mode, image overrides).
//!
//! DESIGN
//! ======
//! Every event the gallery reacts to maps onto one method here. The page
//! component forwards browser events and owns the cooldown timer; everything
//! it renders is derived from this struct and the project slice.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use std::collections::HashMap;
use std::ops::Range;

/// Cards per desktop page, and cards shown on mobile while collapsed.
pub const PROJECTS_PER_PAGE: usize = 3;

/// Delay before page navigation is re-enabled after a page change.
pub const TRANSITION_COOLDOWN_MS: u32 = 500;

/// Number of desktop pages needed for `count` projects.
pub fn total_pages(count: usize) -> usize {
    count.div_ceil(PROJECTS_PER_PAGE)
}

/// Desktop page navigation direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageDirection {
    Prev,
    Next,
}

/// Component-local state for the project gallery.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    /// Zero-based desktop page index.
    pub current_page: usize,
    /// Mobile only: show the whole list instead of the first page.
    pub show_all: bool,
    pub is_mobile: bool,
    /// Set while a desktop page transition is in flight.
    pub is_animating: bool,
    /// Title -> image source recorded after a load failure. Entries are never
    /// removed for the lifetime of the state.
    image_overrides: HashMap<String, String>,
}

impl GalleryState {
    /// Desktop state showing `page`, with no transition in flight.
    pub fn desktop_at(page: usize) -> Self {
        Self { current_page: page, ..Self::default() }
    }

    /// Mobile state, collapsed or expanded.
    pub fn mobile(show_all: bool) -> Self {
        Self { is_mobile: true, show_all, ..Self::default() }
    }

    /// Index range of the projects currently on screen.
    pub fn visible_range(&self, count: usize) -> Range<usize> {
        if self.is_mobile {
            let end = if self.show_all { count } else { count.min(PROJECTS_PER_PAGE) };
            return 0..end;
        }
        let start = self.current_page.saturating_mul(PROJECTS_PER_PAGE).min(count);
        let end = start.saturating_add(PROJECTS_PER_PAGE).min(count);
        start..end
    }

    /// The on-screen subset of `items`.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[self.visible_range(items.len())]
    }

    pub fn at_first_page(&self) -> bool {
        self.current_page == 0
    }

    pub fn at_last_page(&self, count: usize) -> bool {
        self.current_page + 1 >= total_pages(count)
    }

    pub fn can_navigate(&self, direction: PageDirection, count: usize) -> bool {
        if self.is_animating {
            return false;
        }
        match direction {
            PageDirection::Prev => !self.at_first_page(),
            PageDirection::Next => !self.at_last_page(count),
        }
    }

    /// Move one page in `direction` and start the transition cooldown.
    ///
    /// Returns `false` (leaving the state untouched) when navigation is not
    /// permitted; the caller schedules [`Self::finish_transition`] only on
    /// `true`.
    pub fn navigate(&mut self, direction: PageDirection, count: usize) -> bool {
        if !self.can_navigate(direction, count) {
            return false;
        }
        self.is_animating = true;
        match direction {
            PageDirection::Prev => self.current_page -= 1,
            PageDirection::Next => self.current_page += 1,
        }
        true
    }

    /// [`Self::navigate`], returning the cooldown in milliseconds after which
    /// [`Self::finish_transition`] must run, or `None` if nothing moved.
    pub fn begin_page_change(&mut self, direction: PageDirection, count: usize) -> Option<u32> {
        self.navigate(direction, count).then_some(TRANSITION_COOLDOWN_MS)
    }

    /// Clear the transition guard once the cooldown elapses.
    pub fn finish_transition(&mut self) {
        self.is_animating = false;
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
    }

    /// Apply a viewport classification. Page index and show-all are kept as
    /// they are; both remain valid for a fixed project list.
    ///
    /// Returns whether the mode changed.
    pub fn set_mobile(&mut self, is_mobile: bool) -> bool {
        let changed = self.is_mobile != is_mobile;
        self.is_mobile = is_mobile;
        changed
    }

    /// Whether the desktop arrows and page indicator are rendered.
    pub fn shows_page_controls(&self, count: usize) -> bool {
        !self.is_mobile && total_pages(count) > 1
    }

    /// Whether the mobile "See More" / "See Less" toggle is rendered.
    pub fn shows_more_toggle(&self, count: usize) -> bool {
        self.is_mobile && count > PROJECTS_PER_PAGE
    }

    pub fn image_override(&self, title: &str) -> Option<&str> {
        self.image_overrides.get(title).map(String::as_str)
    }

    /// Pin `src` as the image for `title`. The first recorded override wins.
    pub fn record_image_override(&mut self, title: &str, src: impl Into<String>) {
        self.image_overrides
            .entry(title.to_owned())
            .or_insert_with(|| src.into());
    }
}
