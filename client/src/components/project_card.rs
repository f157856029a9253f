//! Card for a single portfolio project.
//!
//! SYSTEM CONTEXT
//! ==============
//! Cards read the gallery's image overrides to pick their image and write a
//! new override when their `<img>` fails. Load-failure and reveal state are
//! per card and die with it.

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;

use leptos::prelude::*;

use crate::state::gallery::GalleryState;
use crate::state::projects::Project;
#[cfg(feature = "hydrate")]
use crate::util::image_source::load_already_failed;
use crate::util::image_source::{
    FallbackImages, ImageErrorAction, ImageLoadGuard, PLACEHOLDER_IMAGE, resolve_image_source,
};
use crate::util::reveal::REVEALED_CLASS;
#[cfg(feature = "hydrate")]
use crate::util::reveal::RevealWatcher;

/// Kind of outbound project link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkKind {
    Demo,
    Source,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Demo => "Live Demo",
            Self::Source => "Source Code",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Demo => "↗",
            Self::Source => "</>",
        }
    }

    fn modifier(self) -> &'static str {
        match self {
            Self::Demo => "demo",
            Self::Source => "source",
        }
    }
}

/// An outbound link rendered on a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectLink {
    pub kind: LinkKind,
    pub href: String,
}

/// Demo then source link, each only when the record has its URL.
pub fn project_links(project: &Project) -> Vec<ProjectLink> {
    [
        (LinkKind::Demo, project.demo_url.as_ref()),
        (LinkKind::Source, project.repo_url.as_ref()),
    ]
    .into_iter()
    .filter_map(|(kind, href)| href.map(|href| ProjectLink { kind, href: href.clone() }))
    .collect()
}

pub fn card_class(revealed: bool) -> String {
    if revealed {
        format!("project-card glass-card {REVEALED_CLASS}")
    } else {
        "project-card glass-card".to_owned()
    }
}

/// Source currently shown by a card's `<img>`.
pub fn displayed_image_src(project: &Project, gallery: &GalleryState, placeholder_forced: bool) -> String {
    if placeholder_forced {
        return PLACEHOLDER_IMAGE.to_owned();
    }
    resolve_image_source(project, gallery.image_override(&project.title), FallbackImages::bundled())
        .src()
        .to_owned()
}

/// Run the load-failure policy for the source `project`'s card is showing,
/// recording any fallback as the title's override in `gallery`.
pub fn handle_image_error(
    project: &Project,
    gallery: &mut GalleryState,
    guard: &mut ImageLoadGuard,
    placeholder_forced: bool,
) -> ImageErrorAction {
    let failed_src = displayed_image_src(project, gallery, placeholder_forced);
    let action = guard.on_error(&project.title, &failed_src, FallbackImages::bundled());
    if let Some(src) = action.override_src() {
        gallery.record_image_override(&project.title, src);
    }
    action
}

/// Project card: image with hover links, category, title, description,
/// technology tags and action links.
#[component]
pub fn ProjectCard(project: Project, gallery: RwSignal<GalleryState>) -> impl IntoView {
    let card_ref = NodeRef::<leptos::html::Div>::new();
    let image_ref = NodeRef::<leptos::html::Img>::new();
    let revealed = RwSignal::new(false);
    let load_guard = RwSignal::new(ImageLoadGuard::default());
    let placeholder_forced = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        // Disposed with the card's owner; dropping the watcher disconnects it.
        let watcher = StoredValue::new_local(None::<RevealWatcher>);
        Effect::new(move || {
            let Some(card) = card_ref.get() else {
                return;
            };
            if revealed.get_untracked() {
                return;
            }
            match RevealWatcher::observe(card.as_ref(), move || revealed.set(true)) {
                Some(active) => watcher.set_value(Some(active)),
                None => revealed.set(true),
            }
        });
    }

    let image_src = {
        let project = project.clone();
        move || gallery.with(|g| displayed_image_src(&project, g, placeholder_forced.get()))
    };

    let on_image_error = {
        let project = project.clone();
        Callback::new(move |()| {
            let forced = placeholder_forced.get_untracked();
            let Some(action) = load_guard
                .try_update(|guard| gallery.try_update(|g| handle_image_error(&project, g, guard, forced)))
                .flatten()
            else {
                return;
            };
            match &action {
                ImageErrorAction::UseFallback(src) => {
                    leptos::logging::log!("image failed for {:?}; using bundled fallback {src}", project.title);
                }
                ImageErrorAction::PinFailedFallback(src) => {
                    leptos::logging::log!("bundled fallback {src} failed for {:?}; using placeholder", project.title);
                }
                ImageErrorAction::UsePlaceholder => {
                    leptos::logging::log!("image failed for {:?}; no fallback, using placeholder", project.title);
                }
                ImageErrorAction::Ignore => {}
            }
            if action.shows_placeholder() {
                placeholder_forced.set(true);
            }
        })
    };

    // Server-rendered images may fail before hydration attaches `on:error`.
    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let Some(img) = image_ref.get() else {
                return;
            };
            if load_already_failed(img.complete(), img.natural_width()) {
                on_image_error.run(());
            }
        });
    }

    let links = project_links(&project);
    let overlay_links = links
        .iter()
        .map(|link| {
            view! {
                <a
                    href=link.href.clone()
                    class=format!("project-card__icon-link project-card__icon-link--{}", link.kind.modifier())
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label=link.kind.label()
                >
                    <span aria-hidden="true">{link.kind.icon()}</span>
                </a>
            }
        })
        .collect::<Vec<_>>();
    let action_links = links
        .into_iter()
        .map(|link| {
            view! {
                <a
                    href=link.href
                    class=format!("project-card__action project-card__action--{}", link.kind.modifier())
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    <span aria-hidden="true">{link.kind.icon()}</span>
                    " "
                    {link.kind.label()}
                </a>
            }
        })
        .collect::<Vec<_>>();

    let tags = project
        .tech_tags()
        .into_iter()
        .map(str::to_owned)
        .collect::<Vec<_>>();
    let tag_list = (!tags.is_empty()).then(|| {
        view! {
            <div class="project-card__tech-tags">
                {tags
                    .into_iter()
                    .map(|tag| view! { <span class="project-card__tech-tag">{tag}</span> })
                    .collect::<Vec<_>>()}
            </div>
        }
    });

    let Project { title, category, description, .. } = project;

    view! {
        <div class=move || card_class(revealed.get()) node_ref=card_ref>
            <div class="project-card__image">
                <img
                    src=image_src
                    alt=title.clone()
                    loading="lazy"
                    node_ref=image_ref
                    on:error=move |_| on_image_error.run(())
                />
                <div class="project-card__overlay">
                    <div class="project-card__links">{overlay_links}</div>
                </div>
            </div>

            <div class="project-card__content">
                <span class="project-card__category">{category}</span>
                <h3>{title}</h3>
                <p>{description}</p>
                {tag_list}
                <div class="project-card__actions">{action_links}</div>
            </div>
        </div>
    }
}
