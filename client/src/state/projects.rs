//! Project records shown in the portfolio gallery.
//!
//! SYSTEM CONTEXT
//! ==============
//! The list is compiled into the client from `data/projects.json`; there is no
//! fetch path. Titles double as lookup keys for bundled fallback images, so
//! they must be unique.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Deserializer};

const BUNDLED_PROJECTS_JSON: &str = include_str!("../../data/projects.json");

static BUNDLED_PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| match parse_projects(BUNDLED_PROJECTS_JSON) {
    Ok(projects) => projects,
    Err(e) => {
        leptos::logging::warn!("bundled project data rejected: {e}");
        Vec::new()
    }
});

/// Errors produced while decoding project data.
#[derive(Debug, thiserror::Error)]
pub enum ProjectDataError {
    /// The payload is not a JSON array of project records.
    #[error("project data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two records share a title, which would make fallback lookup ambiguous.
    #[error("duplicate project title: {0:?}")]
    DuplicateTitle(String),
}

/// A single portfolio entry.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    /// Comma-separated technology names.
    #[serde(default, deserialize_with = "non_blank")]
    pub technologies: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub demo_url: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub repo_url: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub image: Option<String>,
}

impl Project {
    /// Technology tags in declaration order, trimmed, empties dropped.
    pub fn tech_tags(&self) -> Vec<&str> {
        self.technologies.as_deref().map_or_else(Vec::new, |raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .collect()
        })
    }
}

/// Decode a project list. `null` decodes to an empty list.
///
/// # Errors
///
/// Returns [`ProjectDataError::Parse`] for malformed JSON and
/// [`ProjectDataError::DuplicateTitle`] when two records share a title.
pub fn parse_projects(raw: &str) -> Result<Vec<Project>, ProjectDataError> {
    let projects = serde_json::from_str::<Option<Vec<Project>>>(raw)?.unwrap_or_default();

    let mut seen = HashSet::with_capacity(projects.len());
    for project in &projects {
        if !seen.insert(project.title.as_str()) {
            return Err(ProjectDataError::DuplicateTitle(project.title.clone()));
        }
    }
    Ok(projects)
}

/// The project list bundled with the client. Empty if the bundled data is
/// malformed.
pub fn bundled_projects() -> &'static [Project] {
    &BUNDLED_PROJECTS
}

fn non_blank<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|value| !value.trim().is_empty()))
}
