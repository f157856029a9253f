//! Image source resolution for project cards.
//!
//! Each card resolves its image through a fixed chain, first match wins:
//! recorded override, bundled fallback keyed by title, the record's own
//! `image` URL, then an inline placeholder. Load failures are handled per
//! `<img>` element by [`ImageLoadGuard`], which allows at most one fallback
//! substitution before settling on the placeholder.

#[cfg(test)]
#[path = "image_source_test.rs"]
mod image_source_test;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::state::projects::Project;

/// Inline SVG reading "Project Image" on a dark background.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iNDAwIiBoZWlnaHQ9IjMwMCIgeG1sbnM9Imh0dHA6Ly93d3cudzMub3JnLzIwMDAvc3ZnIj48cmVjdCB3aWR0aD0iMTAwJSIgaGVpZ2h0PSIxMDAlIiBmaWxsPSIjMjEyNDJjIi8+PHRleHQgeD0iNTAlIiB5PSI1MCUiIGZvbnQtZmFtaWx5PSJBcmlhbCIgZm9udC1zaXplPSIyNCIgZmlsbD0iI2ZmZiIgdGV4dC1hbmNob3I9Im1pZGRsZSIgZHk9Ii4zZW0iPlByb2plY3QgSW1hZ2U8L3RleHQ+PC9zdmc+";

/// URL prefix under which bundled project images are served.
pub const PROJECT_ASSET_PREFIX: &str = "/assets/projects/";

// Keys must match `title` in data/projects.json exactly.
const BUNDLED_FALLBACKS: &[(&str, &str)] = &[
    ("TravelEase - Vehicle Booking Platform", "travel-ease.svg"),
    ("WarmPaws - Pet Care in Winter", "warm-paws.svg"),
    ("AppSphere - Modern App Discovery Platform", "app-sphere.svg"),
    ("Live Crime Reporting System", "crime-report.svg"),
    ("eCommerce Website", "ecommerce.svg"),
    ("Personal Portfolio", "portfolio.svg"),
    ("Emergency Service", "emergency-service.svg"),
    ("Green Earth: Dynamic Tree Planting App", "green-earth.svg"),
    ("Customer Support System", "customer-support.svg"),
];

static BUNDLED: LazyLock<FallbackImages> = LazyLock::new(|| {
    FallbackImages::from_pairs(
        BUNDLED_FALLBACKS
            .iter()
            .map(|(title, file)| (*title, format!("{PROJECT_ASSET_PREFIX}{file}"))),
    )
});

/// Locally packaged images keyed by exact project title.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FallbackImages {
    by_title: HashMap<String, String>,
}

impl FallbackImages {
    /// The fallback map shipped with the site.
    pub fn bundled() -> &'static Self {
        &BUNDLED
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            by_title: pairs
                .into_iter()
                .map(|(title, src)| (title.into(), src.into()))
                .collect(),
        }
    }

    pub fn get(&self, title: &str) -> Option<&str> {
        self.by_title.get(title).map(String::as_str)
    }

    /// All keys, sorted.
    pub fn titles(&self) -> Vec<&str> {
        let mut titles = self.by_title.keys().map(String::as_str).collect::<Vec<_>>();
        titles.sort_unstable();
        titles
    }

    /// Keys that match no project title, sorted. A non-empty result means a
    /// title was renamed without updating its fallback.
    pub fn unmatched_titles(&self, projects: &[Project]) -> Vec<&str> {
        self.titles()
            .into_iter()
            .filter(|key| !projects.iter().any(|p| p.title == *key))
            .collect()
    }
}

/// Which step of the resolution chain produced an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSource<'a> {
    Override(&'a str),
    Fallback(&'a str),
    Record(&'a str),
    Placeholder,
}

impl<'a> ImageSource<'a> {
    pub fn src(&self) -> &'a str {
        match *self {
            Self::Override(src) | Self::Fallback(src) | Self::Record(src) => src,
            Self::Placeholder => PLACEHOLDER_IMAGE,
        }
    }
}

/// Resolve the image for `project`. `override_src` is the entry recorded for
/// the project's title after an earlier load failure, if any.
pub fn resolve_image_source<'a>(
    project: &'a Project,
    override_src: Option<&'a str>,
    fallbacks: &'a FallbackImages,
) -> ImageSource<'a> {
    if let Some(src) = override_src {
        return ImageSource::Override(src);
    }
    if let Some(src) = fallbacks.get(&project.title) {
        return ImageSource::Fallback(src);
    }
    if let Some(src) = project.image.as_deref() {
        return ImageSource::Record(src);
    }
    ImageSource::Placeholder
}

/// What a card should do after its `<img>` fires `error`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ImageErrorAction {
    /// Record `src` as the title's override; the element reloads from it.
    UseFallback(String),
    /// Record `src` as the title's override. It is the source that just
    /// failed, so reloading would not help: this element shows the
    /// placeholder instead.
    PinFailedFallback(String),
    /// Show the placeholder on this element only.
    UsePlaceholder,
    /// Error handling is already exhausted for this element.
    Ignore,
}

impl ImageErrorAction {
    /// Source to record as the title's override, if any.
    pub fn override_src(&self) -> Option<&str> {
        match self {
            Self::UseFallback(src) | Self::PinFailedFallback(src) => Some(src),
            Self::UsePlaceholder | Self::Ignore => None,
        }
    }

    /// Whether the failing element switches to the placeholder.
    pub fn shows_placeholder(&self) -> bool {
        matches!(self, Self::PinFailedFallback(_) | Self::UsePlaceholder)
    }
}

/// Per-element load-failure state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageLoadGuard {
    #[default]
    Armed,
    FallbackApplied,
    Exhausted,
}

impl ImageLoadGuard {
    /// Decide how to recover from a failed load of `failed_src`.
    ///
    /// Only the fallback map is consulted. A found fallback is always
    /// recorded; the element itself gets at most one fallback substitution.
    pub fn on_error(&mut self, title: &str, failed_src: &str, fallbacks: &FallbackImages) -> ImageErrorAction {
        match *self {
            Self::Exhausted => ImageErrorAction::Ignore,
            Self::FallbackApplied => {
                *self = Self::Exhausted;
                ImageErrorAction::UsePlaceholder
            }
            Self::Armed => match fallbacks.get(title) {
                Some(src) if src != failed_src => {
                    *self = Self::FallbackApplied;
                    ImageErrorAction::UseFallback(src.to_owned())
                }
                Some(src) => {
                    *self = Self::Exhausted;
                    ImageErrorAction::PinFailedFallback(src.to_owned())
                }
                None => {
                    *self = Self::Exhausted;
                    ImageErrorAction::UsePlaceholder
                }
            },
        }
    }

    pub fn is_exhausted(self) -> bool {
        self == Self::Exhausted
    }
}

/// Whether an `<img>` had already failed before an error handler could see
/// it: the load finished (`complete`) without producing any pixels.
pub fn load_already_failed(complete: bool, natural_width: u32) -> bool {
    complete && natural_width == 0
}
