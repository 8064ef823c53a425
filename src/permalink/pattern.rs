//! Permalink patterns and placeholder expansion.

use crate::content::ContentUnit;
use crate::utils::slug::slugify;
use chrono::NaiveDate;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// How a source path maps to an output path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PermalinkPattern {
    /// Keep the source path, swap the extension for `.html` (default).
    #[default]
    None,
    /// Nest every non-index source under its own directory.
    Pretty,
    /// Template with `:folder`, `:basename`, `:filename`, `:title`,
    /// `:year`, `:month` and `:day` placeholders.
    Custom(String),
}

impl PermalinkPattern {
    pub fn parse(pattern: &str) -> Self {
        match pattern {
            "none" => Self::None,
            "pretty" => Self::Pretty,
            custom => Self::Custom(custom.to_owned()),
        }
    }

    /// Expand the pattern for `unit`.
    ///
    /// The result may end in `/`; callers append the index file.
    pub fn expand(&self, unit: &ContentUnit) -> String {
        let parts = SourceParts::new(unit.relative_path());
        match self {
            Self::None => format!("{}{}.html", parts.folder, parts.basename),
            Self::Pretty if parts.basename == "index" => format!("{}index.html", parts.folder),
            Self::Pretty => format!("{}{}/", parts.folder, parts.basename),
            Self::Custom(pattern) => collapse_slashes(&expand_placeholders(pattern, unit, &parts)),
        }
    }
}

impl From<String> for PermalinkPattern {
    fn from(pattern: String) -> Self {
        Self::parse(&pattern)
    }
}

impl From<PermalinkPattern> for String {
    fn from(pattern: PermalinkPattern) -> Self {
        match pattern {
            PermalinkPattern::None => "none".into(),
            PermalinkPattern::Pretty => "pretty".into(),
            PermalinkPattern::Custom(custom) => custom,
        }
    }
}

/// Components of a source path: `blog/hello.md` → (`blog/`, `hello.md`, `hello`).
struct SourceParts<'a> {
    /// Parent directory with trailing slash, empty at the root
    folder: &'a str,
    filename: &'a str,
    basename: &'a str,
}

impl<'a> SourceParts<'a> {
    fn new(path: &'a str) -> Self {
        let path = path.trim_start_matches('/');
        let (folder, filename) = match path.rfind('/') {
            Some(pos) => (&path[..=pos], &path[pos + 1..]),
            None => ("", path),
        };
        let basename = match filename.rfind('.') {
            Some(pos) if pos > 0 => &filename[..pos],
            _ => filename,
        };

        Self {
            folder,
            filename,
            basename,
        }
    }
}

fn expand_placeholders(pattern: &str, unit: &ContentUnit, parts: &SourceParts) -> String {
    static RE_PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r":(?P<name>folder|basename|filename|title|year|month|day)").unwrap()
    });

    let date = unit.data().get_str("date").and_then(parse_date);

    RE_PLACEHOLDER
        .replace_all(pattern, |caps: &Captures| match &caps["name"] {
            "folder" => parts.folder.to_owned(),
            "basename" => parts.basename.to_owned(),
            "filename" => parts.filename.to_owned(),
            "title" => unit
                .data()
                .get_str("title")
                .map_or_else(|| parts.basename.to_owned(), slugify),
            "year" => date.map(|d| d.format("%Y").to_string()).unwrap_or_default(),
            "month" => date.map(|d| d.format("%m").to_string()).unwrap_or_default(),
            "day" => date.map(|d| d.format("%d").to_string()).unwrap_or_default(),
            _ => String::new(),
        })
        .into_owned()
}

/// Parse the date part of `YYYY-MM-DD` or an RFC 3339 timestamp.
fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.get(..10)?, "%Y-%m-%d").ok()
}

/// Collapse `//` left behind by empty placeholders.
fn collapse_slashes(path: &str) -> String {
    let mut result = String::with_capacity(path.len());
    for c in path.chars() {
        if c == '/' && result.ends_with('/') {
            continue;
        }
        result.push(c);
    }
    result
}
