//! Gallery navigation chrome: desktop arrows, page indicator, and the mobile
//! "See More" toggle.

#[cfg(test)]
#[path = "gallery_controls_test.rs"]
mod gallery_controls_test;

use leptos::prelude::*;

use crate::state::gallery::{GalleryState, PageDirection, total_pages};

pub fn arrow_label(direction: PageDirection) -> &'static str {
    match direction {
        PageDirection::Prev => "Previous projects",
        PageDirection::Next => "Next projects",
    }
}

fn arrow_glyph(direction: PageDirection) -> &'static str {
    match direction {
        PageDirection::Prev => "‹",
        PageDirection::Next => "›",
    }
}

/// Class list for an arrow; the `disabled` modifier marks the page bound only.
pub fn arrow_class(direction: PageDirection, at_bound: bool) -> String {
    let side = match direction {
        PageDirection::Prev => "left",
        PageDirection::Next => "right",
    };
    let mut class = format!("gallery__nav-arrow gallery__nav-arrow--{side}");
    if at_bound {
        class.push_str(" gallery__nav-arrow--disabled");
    }
    class
}

fn at_bound(state: &GalleryState, direction: PageDirection, count: usize) -> bool {
    match direction {
        PageDirection::Prev => state.at_first_page(),
        PageDirection::Next => state.at_last_page(count),
    }
}

/// One-based "current / total" pair shown between the arrows.
pub fn page_indicator(state: &GalleryState, count: usize) -> (usize, usize) {
    (state.current_page + 1, total_pages(count))
}

pub fn see_more_label(show_all: bool) -> &'static str {
    if show_all { "See Less" } else { "See More" }
}

/// Desktop page arrow. Disabled at its bound and while a transition runs.
#[component]
pub fn NavArrow(
    direction: PageDirection,
    gallery: RwSignal<GalleryState>,
    count: usize,
    on_navigate: Callback<PageDirection>,
) -> impl IntoView {
    view! {
        <button
            class=move || gallery.with(|g| arrow_class(direction, at_bound(g, direction, count)))
            disabled=move || gallery.with(|g| !g.can_navigate(direction, count))
            aria-label=arrow_label(direction)
            on:click=move |_| on_navigate.run(direction)
        >
            <span aria-hidden="true">{arrow_glyph(direction)}</span>
        </button>
    }
}

/// "X / Y" page indicator.
#[component]
pub fn PageIndicator(gallery: RwSignal<GalleryState>, count: usize) -> impl IntoView {
    let current = move || gallery.with(|g| page_indicator(g, count).0);
    let total = total_pages(count);

    view! {
        <div class="gallery__page-indicator">
            <span class="gallery__current-page">{current}</span>
            <span class="gallery__page-separator">"/"</span>
            <span class="gallery__total-pages">{total}</span>
        </div>
    }
}

/// Mobile toggle between the first page and the full list.
#[component]
pub fn SeeMoreToggle(gallery: RwSignal<GalleryState>) -> impl IntoView {
    view! {
        <div class="gallery__see-more">
            <button
                class="gallery__see-more-button"
                on:click=move |_| gallery.update(GalleryState::toggle_show_all)
            >
                {move || see_more_label(gallery.with(|g| g.show_all))}
            </button>
        </div>
    }
}
