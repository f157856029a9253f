use super::*;
use crate::state::gallery::GalleryState;
use crate::state::projects::bundled_projects;

fn project(title: &str, image: Option<&str>) -> Project {
    Project {
        title: title.to_owned(),
        category: String::new(),
        description: String::new(),
        technologies: None,
        demo_url: None,
        repo_url: None,
        image: image.map(str::to_owned),
    }
}

fn fallbacks() -> FallbackImages {
    FallbackImages::from_pairs([("Mapped", "/assets/projects/mapped.jpg")])
}

// =============================================================
// Resolution chain
// =============================================================

#[test]
fn override_wins_over_everything() {
    let fb = fallbacks();
    let p = project("Mapped", Some("https://img.example.com/a.jpg"));
    let resolved = resolve_image_source(&p, Some("/cached.jpg"), &fb);
    assert_eq!(resolved, ImageSource::Override("/cached.jpg"));
    assert_eq!(resolved.src(), "/cached.jpg");
}

#[test]
fn fallback_wins_over_record_image() {
    let fb = fallbacks();
    let p = project("Mapped", Some("https://img.example.com/a.jpg"));
    assert_eq!(
        resolve_image_source(&p, None, &fb),
        ImageSource::Fallback("/assets/projects/mapped.jpg")
    );
}

#[test]
fn record_image_used_without_fallback() {
    let fb = fallbacks();
    let p = project("Unmapped", Some("https://img.example.com/b.jpg"));
    assert_eq!(
        resolve_image_source(&p, None, &fb),
        ImageSource::Record("https://img.example.com/b.jpg")
    );
}

#[test]
fn placeholder_when_nothing_matches() {
    let fb = fallbacks();
    let p = project("Unmapped", None);
    let resolved = resolve_image_source(&p, None, &fb);
    assert_eq!(resolved, ImageSource::Placeholder);
    assert_eq!(resolved.src(), PLACEHOLDER_IMAGE);
}

#[test]
fn fallback_lookup_is_exact_match() {
    let fb = fallbacks();
    for title in ["mapped", "Mapped ", " Mapped", "Mapped!"] {
        let p = project(title, None);
        assert_eq!(resolve_image_source(&p, None, &fb), ImageSource::Placeholder, "title {title:?}");
    }
}

#[test]
fn placeholder_is_inline_svg() {
    assert!(PLACEHOLDER_IMAGE.starts_with("data:image/svg+xml;base64,"));
}

// =============================================================
// Load-failure handling
// =============================================================

#[test]
fn failing_mapped_image_records_fallback_as_override() {
    let fb = fallbacks();
    let p = project("Mapped", Some("https://img.example.com/a.jpg"));
    let mut state = GalleryState::default();
    let mut guard = ImageLoadGuard::default();

    let displayed = resolve_image_source(&p, state.image_override(&p.title), &fb).src();
    assert_eq!(displayed, "/assets/projects/mapped.jpg");

    let action = guard.on_error(&p.title, displayed, &fb);
    assert_eq!(action, ImageErrorAction::PinFailedFallback("/assets/projects/mapped.jpg".to_owned()));
    assert!(action.shows_placeholder());
    if let Some(src) = action.override_src() {
        state.record_image_override(&p.title, src);
    }

    for _ in 0..3 {
        let resolved = resolve_image_source(&p, state.image_override(&p.title), &fb);
        assert_eq!(resolved, ImageSource::Override("/assets/projects/mapped.jpg"));
    }
    assert!(guard.is_exhausted());
    assert_eq!(guard.on_error(&p.title, PLACEHOLDER_IMAGE, &fb), ImageErrorAction::Ignore);
}

#[test]
fn fallback_differing_from_failed_source_is_substituted() {
    let fb = fallbacks();
    let mut guard = ImageLoadGuard::default();

    let action = guard.on_error("Mapped", "https://img.example.com/stale.jpg", &fb);
    assert_eq!(action, ImageErrorAction::UseFallback("/assets/projects/mapped.jpg".to_owned()));
    assert_eq!(action.override_src(), Some("/assets/projects/mapped.jpg"));
    assert!(!action.shows_placeholder());
    assert_eq!(guard, ImageLoadGuard::FallbackApplied);
}

#[test]
fn failed_image_without_fallback_settles_on_placeholder() {
    let fb = fallbacks();
    let p = project("Unmapped", Some("https://img.example.com/b.jpg"));
    let mut guard = ImageLoadGuard::default();

    let displayed = resolve_image_source(&p, None, &fb).src();
    let action = guard.on_error(&p.title, displayed, &fb);
    assert_eq!(action, ImageErrorAction::UsePlaceholder);
    assert_eq!(action.override_src(), None);
    assert!(guard.is_exhausted());
    assert_eq!(guard.on_error(&p.title, PLACEHOLDER_IMAGE, &fb), ImageErrorAction::Ignore);
    assert_eq!(guard.on_error(&p.title, PLACEHOLDER_IMAGE, &fb), ImageErrorAction::Ignore);
}

#[test]
fn failing_fallback_falls_through_to_placeholder_once() {
    let fb = fallbacks();
    let mut guard = ImageLoadGuard::default();

    assert!(matches!(
        guard.on_error("Mapped", "https://img.example.com/stale.jpg", &fb),
        ImageErrorAction::UseFallback(_)
    ));
    assert_eq!(
        guard.on_error("Mapped", "/assets/projects/mapped.jpg", &fb),
        ImageErrorAction::UsePlaceholder
    );
    assert_eq!(
        guard.on_error("Mapped", PLACEHOLDER_IMAGE, &fb),
        ImageErrorAction::Ignore
    );
}

#[test]
fn every_bundled_project_recovers_on_first_failure() {
    let fb = FallbackImages::bundled();
    for p in bundled_projects() {
        let mut state = GalleryState::default();
        let mut guard = ImageLoadGuard::default();
        let displayed = resolve_image_source(p, None, fb).src().to_owned();

        let action = guard.on_error(&p.title, &displayed, fb);
        assert_ne!(action, ImageErrorAction::Ignore, "{}", p.title);
        if let Some(src) = action.override_src() {
            state.record_image_override(&p.title, src);
        }

        match fb.get(&p.title) {
            Some(fallback) => assert_eq!(state.image_override(&p.title), Some(fallback), "{}", p.title),
            None => assert!(action.shows_placeholder(), "{}", p.title),
        }
    }
}

#[test]
fn load_already_failed_needs_complete_and_no_pixels() {
    assert!(load_already_failed(true, 0));
    assert!(!load_already_failed(true, 800));
    assert!(!load_already_failed(false, 0));
}

// =============================================================
// Bundled fallback map
// =============================================================

#[test]
fn bundled_fallbacks_live_under_asset_prefix() {
    let bundled = FallbackImages::bundled();
    assert_eq!(bundled.titles().len(), BUNDLED_FALLBACKS.len());
    for title in bundled.titles() {
        let src = bundled.get(title).unwrap_or_default();
        assert!(src.starts_with(PROJECT_ASSET_PREFIX), "{title}: {src}");
    }
}

#[test]
fn bundled_fallback_keys_all_match_bundled_titles() {
    let unmatched = FallbackImages::bundled().unmatched_titles(bundled_projects());
    assert!(unmatched.is_empty(), "fallback keys without a project: {unmatched:?}");
}

#[test]
fn unmatched_titles_reports_renamed_projects() {
    let fb = FallbackImages::from_pairs([("Old Name", "/a.jpg"), ("Kept", "/b.jpg")]);
    let projects = vec![project("New Name", None), project("Kept", None)];
    assert_eq!(fb.unmatched_titles(&projects), vec!["Old Name"]);
}

#[test]
fn bundled_fallback_files_are_shipped() {
    let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("public");
    for title in FallbackImages::bundled().titles() {
        let src = FallbackImages::bundled().get(title).unwrap_or_default();
        let path = public.join(src.trim_start_matches('/'));
        assert!(path.is_file(), "{title}: missing {}", path.display());
    }
}

#[test]
fn titles_are_sorted() {
    let fb = FallbackImages::from_pairs([("b", "/b"), ("a", "/a"), ("c", "/c")]);
    assert_eq!(fb.titles(), vec!["a", "b", "c"]);
}
