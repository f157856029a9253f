//! Portfolio page: the paginated project gallery.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page owns the gallery state for its lifetime. It subscribes to
//! viewport resizes, runs the page-transition cooldown, and renders cards for
//! the visible slice of the bundled project list. Browser-only wiring is
//! compiled out for SSR, which renders the first desktop page.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

use leptos::prelude::*;

use crate::components::gallery_controls::{NavArrow, PageIndicator, SeeMoreToggle};
use crate::components::project_card::ProjectCard;
use crate::state::gallery::{GalleryState, PageDirection};
use crate::state::projects::{Project, bundled_projects};
use crate::util::image_source::FallbackImages;

/// A card in the visible slice, keyed so a page change re-mounts cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibleCard {
    pub key: String,
    pub project: Project,
}

pub fn card_key(page: usize, index: usize, title: &str) -> String {
    format!("{page}-{index}-{title}")
}

pub fn visible_cards(state: &GalleryState, projects: &[Project]) -> Vec<VisibleCard> {
    state
        .visible(projects)
        .iter()
        .enumerate()
        .map(|(index, project)| VisibleCard {
            key: card_key(state.current_page, index, &project.title),
            project: project.clone(),
        })
        .collect()
}

pub fn grid_class(is_animating: bool) -> &'static str {
    if is_animating { "gallery__content gallery__content--animating" } else { "gallery__content" }
}

/// Log the fallback keys against project titles at debug level and warn for
/// keys that no longer match any project.
fn audit_fallback_images(fallbacks: &FallbackImages, projects: &[Project]) {
    #[cfg(feature = "hydrate")]
    {
        log::debug!("fallback images: {:?}", fallbacks.titles());
        log::debug!("projects: {:?}", projects.iter().map(|p| p.title.as_str()).collect::<Vec<_>>());
    }
    for key in fallbacks.unmatched_titles(projects) {
        leptos::logging::warn!("fallback image key {key:?} matches no project title");
    }
}

/// Clear the transition guard after `cooldown_ms`. A timer still pending when
/// the page is torn down finds the signal disposed and does nothing.
#[cfg(feature = "hydrate")]
fn schedule_transition_end(gallery: RwSignal<GalleryState>, cooldown_ms: u32) {
    gloo_timers::callback::Timeout::new(cooldown_ms, move || {
        gallery.try_update(GalleryState::finish_transition);
    })
    .forget();
}

#[cfg(not(feature = "hydrate"))]
fn schedule_transition_end(_gallery: RwSignal<GalleryState>, _cooldown_ms: u32) {}

/// Project gallery section. Renders nothing when there are no projects.
#[component]
pub fn PortfolioPage() -> impl IntoView {
    let projects = bundled_projects();
    if projects.is_empty() {
        return ().into_any();
    }
    let count = projects.len();
    let gallery = RwSignal::new(GalleryState::default());

    Effect::new(move || audit_fallback_images(FallbackImages::bundled(), projects));

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            crate::util::viewport::watch_mobile(move |is_mobile| {
                gallery.update(|g| {
                    g.set_mobile(is_mobile);
                });
            });
        });
    }

    let on_navigate = Callback::new(move |direction: PageDirection| {
        if let Some(Some(cooldown_ms)) = gallery.try_update(|g| g.begin_page_change(direction, count)) {
            schedule_transition_end(gallery, cooldown_ms);
        }
    });

    let show_page_controls = move || gallery.with(|g| g.shows_page_controls(count));
    let show_more_toggle = move || gallery.with(|g| g.shows_more_toggle(count));

    view! {
        <section id="portfolio" class="portfolio">
            <div class="portfolio__container">
                <h2 class="portfolio__title">"Projects"</h2>

                <div class="gallery">
                    <Show when=show_page_controls>
                        <NavArrow direction=PageDirection::Prev gallery=gallery count=count on_navigate=on_navigate/>
                    </Show>

                    <div class=move || grid_class(gallery.with(|g| g.is_animating))>
                        <div class="gallery__grid">
                            <For
                                each=move || gallery.with(|g| visible_cards(g, projects))
                                key=|card: &VisibleCard| card.key.clone()
                                children=move |card: VisibleCard| view! { <ProjectCard project=card.project gallery=gallery/> }
                            />
                        </div>

                        <Show when=show_page_controls>
                            <PageIndicator gallery=gallery count=count/>
                        </Show>
                    </div>

                    <Show when=show_page_controls>
                        <NavArrow direction=PageDirection::Next gallery=gallery count=count on_navigate=on_navigate/>
                    </Show>
                </div>

                <Show when=show_more_toggle>
                    <SeeMoreToggle gallery=gallery/>
                </Show>
            </div>
        </section>
    }
    .into_any()
}
