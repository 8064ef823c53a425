//! Metadata bag attached to every content unit.
//!
//! The bag is semi-typed: the keys the pagination engine writes are real
//! fields, everything else lives in an insertion-ordered extension map.
//!
//! | Key           | Storage                       |
//! |---------------|-------------------------------|
//! | `permalink`   | [`Metadata::permalink`]       |
//! | `pagination`  | config in `extra`, derived page info in [`PageInfo`] |
//! | anything else | `extra`                       |

use super::item::Slice;
use serde_json::{Map, Value};

/// Reserved key holding a source's pagination config.
pub const PAGINATION_KEY: &str = "pagination";

/// Reserved key holding an explicit permalink.
pub const PERMALINK_KEY: &str = "permalink";

/// Pagination metadata carried by a generated page.
///
/// Neighbours are indices into the page set the unit was generated with.
#[derive(Debug, Clone, PartialEq)]
pub struct PageInfo {
    /// Items on this page, keys preserved from the source collection.
    pub items: Slice,
    /// 1-based page number.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub previous_page: Option<usize>,
    pub next_page: Option<usize>,
}

/// Key/value metadata of a content unit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    permalink: Option<String>,
    pagination: Option<PageInfo>,
    extra: Map<String, Value>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON object, lifting `permalink` into its typed slot.
    pub fn from_map(mut extra: Map<String, Value>) -> Self {
        let permalink = match extra.remove(PERMALINK_KEY) {
            Some(Value::String(permalink)) => Some(permalink),
            Some(other) => {
                // Non-string permalinks stay visible to templates untouched
                extra.insert(PERMALINK_KEY.to_owned(), other);
                None
            }
            None => None,
        };

        Self {
            permalink,
            pagination: None,
            extra,
        }
    }

    /// Read an extension entry.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Write an extension entry, returning the previous value.
    pub fn set(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.extra.insert(key.into(), value)
    }

    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    pub fn permalink(&self) -> Option<&str> {
        self.permalink.as_deref()
    }

    pub fn set_permalink(&mut self, permalink: impl Into<String>) {
        self.permalink = Some(permalink.into());
    }

    pub const fn pagination(&self) -> Option<&PageInfo> {
        self.pagination.as_ref()
    }

    pub fn pagination_mut(&mut self) -> Option<&mut PageInfo> {
        self.pagination.as_mut()
    }

    pub fn set_pagination(&mut self, info: PageInfo) {
        self.pagination = Some(info);
    }

    /// Read a string entry, used for dates and titles.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }
}
