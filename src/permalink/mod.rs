//! Canonical output paths for content units.
//!
//! The pagination generator asks a [`PermalinkFactory`] for the page-1 path
//! of a source and rewrites it for later pages.
//!
//! # Patterns
//!
//! | Pattern    | `blog/hello.md`           | `blog/index.md`    |
//! |------------|---------------------------|--------------------|
//! | `none`     | `blog/hello.html`         | `blog/index.html`  |
//! | `pretty`   | `blog/hello/index.html`   | `blog/index.html`  |
//! | `:year/:basename/` (date `2024-03-01`) | `2024/hello/index.html` | `2024/index/index.html` |
//!
//! A unit's own `permalink` metadata is used as its pattern when present.
//! Patterns ending in `/` get `index.html` appended.

mod pattern;

pub use pattern::PermalinkPattern;

use crate::content::ContentUnit;
use crate::utils::slug::sanitize_text;

/// File name that maps to a directory URL.
const INDEX_FILE: &str = "index.html";

/// Output location of a content unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permalink {
    relative_file_path: String,
    relative_url_path: String,
}

impl Permalink {
    /// Build from a relative file path (`blog/index.html`).
    pub fn from_file_path(path: impl Into<String>) -> Self {
        let relative_file_path = path.into();
        let url = relative_file_path
            .strip_suffix(INDEX_FILE)
            .unwrap_or(&relative_file_path);
        let relative_url_path = format!("/{}", url.trim_start_matches('/'));

        Self {
            relative_file_path,
            relative_url_path,
        }
    }

    /// Output file path relative to the output root, e.g. `blog/index.html`.
    pub fn relative_file_path(&self) -> &str {
        &self.relative_file_path
    }

    /// URL path relative to the site root, e.g. `/blog/`.
    pub fn relative_url_path(&self) -> &str {
        &self.relative_url_path
    }
}

/// Produces canonical permalinks.
pub trait PermalinkFactory: Send + Sync {
    fn create(&self, unit: &ContentUnit) -> Permalink;
}

/// Permalink factory driven by a site-wide pattern.
#[derive(Debug, Clone, Default)]
pub struct SourcePermalinkFactory {
    default_pattern: PermalinkPattern,
}

impl SourcePermalinkFactory {
    pub const fn new(default_pattern: PermalinkPattern) -> Self {
        Self { default_pattern }
    }
}

impl PermalinkFactory for SourcePermalinkFactory {
    fn create(&self, unit: &ContentUnit) -> Permalink {
        let path = match unit.data().permalink() {
            Some(own) => PermalinkPattern::parse(own).expand(unit),
            None => self.default_pattern.expand(unit),
        };

        let mut path = path
            .trim_start_matches('/')
            .split('/')
            .map(sanitize_text)
            .collect::<Vec<_>>()
            .join("/");
        if path.is_empty() || path.ends_with('/') {
            path.push_str(INDEX_FILE);
        }

        Permalink::from_file_path(path)
    }
}
