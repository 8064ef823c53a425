//! Output paths for pages 2..N.
//!
//! | Canonical (page 1)  | Page N                     |
//! |---------------------|----------------------------|
//! | `index.html`        | `page/N/index.html`        |
//! | `blog/index.html`   | `blog/page/N/index.html`   |
//! | `blog.html`         | `blog/page/N.html`         |
//! | `archive`           | `archive/page/N.html`      |

/// Extension used when the canonical path has none.
const FALLBACK_EXT: &str = "html";

/// Classified basename of a canonical path.
#[derive(Debug, PartialEq, Eq)]
enum Basename<'a> {
    /// `<stem>.<ext>`, split at the first dot after the first character.
    Matched { stem: &'a str, ext: &'a str },
    Unmatched(&'a str),
}

impl<'a> Basename<'a> {
    fn parse(basename: &'a str) -> Self {
        let dot = basename
            .char_indices()
            .skip(1)
            .find_map(|(pos, c)| (c == '.').then_some(pos));

        match dot {
            Some(pos) if pos + 1 < basename.len() => Self::Matched {
                stem: &basename[..pos],
                ext: &basename[pos + 1..],
            },
            _ => Self::Unmatched(basename),
        }
    }
}

/// Derive the path of page `page_number` from the canonical page-1 path.
///
/// Only meaningful for `page_number >= 2`; page 1 keeps its canonical path.
pub fn rewrite(canonical: &str, page_number: usize) -> String {
    let (dir, basename) = split_path(canonical);

    let tail = match Basename::parse(basename) {
        Basename::Matched { stem: "index", ext } => format!("page/{page_number}/index.{ext}"),
        Basename::Matched { stem, ext } => format!("{stem}/page/{page_number}.{ext}"),
        Basename::Unmatched(name) => format!("{name}/page/{page_number}.{FALLBACK_EXT}"),
    };

    let path = if dir.ends_with('/') {
        format!("{dir}{tail}")
    } else {
        format!("{dir}/{tail}")
    };
    strip_dot_prefix(&path).to_owned()
}

/// Split into directory and basename, ignoring trailing slashes.
///
/// A path without a directory part has directory `.`.
fn split_path(path: &str) -> (&str, &str) {
    let trimmed = path.trim_end_matches('/');
    match trimmed.rfind('/') {
        Some(0) => ("/", &trimmed[1..]),
        Some(pos) => (&trimmed[..pos], &trimmed[pos + 1..]),
        None => (".", trimmed),
    }
}

/// Remove a leading `./`.
pub fn strip_dot_prefix(path: &str) -> &str {
    path.strip_prefix("./").unwrap_or(path)
}
