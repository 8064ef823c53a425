//! Items flowing out of data providers.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Field under which an item may nest its metadata (`{ "meta": { ... } }`).
const META_FIELD: &str = "meta";

/// One element of a provider sequence.
///
/// Items are arbitrary JSON values. Objects expose their fields as metadata,
/// either directly or through a nested `meta` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(Value);

impl Item {
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// The empty item substituted for an empty `data.*` provider.
    pub const fn placeholder() -> Self {
        Self(Value::String(String::new()))
    }

    pub const fn value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Read the item's metadata entry at `key`.
    ///
    /// A nested `meta` object takes precedence over top-level fields; keys it
    /// does not hold fall back to the top level.
    pub fn meta(&self, key: &str) -> Option<&Value> {
        let object = self.0.as_object()?;
        object
            .get(META_FIELD)
            .and_then(Value::as_object)
            .and_then(|meta| meta.get(key))
            .or_else(|| object.get(key))
    }
}

impl From<Value> for Item {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Key an item had in the collection it was taken from.
///
/// Sequences yield positional keys, keyed maps yield their field names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemKey {
    Index(usize),
    Name(String),
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => f.write_str(name),
        }
    }
}

/// Ordered run of keyed items, the contents of one page.
pub type Slice = Vec<(ItemKey, Item)>;

/// Attach positional keys to a plain sequence.
pub fn indexed(items: Vec<Item>) -> Slice {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| (ItemKey::Index(index), item))
        .collect()
}
