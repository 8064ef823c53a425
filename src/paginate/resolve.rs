//! Provider references and data resolution.
//!
//! # Grammar
//!
//! | Reference                         | Data                                   |
//! |-----------------------------------|----------------------------------------|
//! | `data.<name>`                     | all items of provider `<name>`         |
//! | `page.<key>`                      | the source's own `<key>` metadata, including its `permalink` |
//! | `filtered.<name>.<key>.<value>`   | items of `<name>` whose `<key>` matches |
//!
//! Only the first three dot-separated tokens after `filtered.` are read, so a
//! value containing dots is truncated to its first token.

use super::error::PaginationError;
use super::filter::filter;
use crate::content::{ContentUnit, Item, ItemKey, PERMALINK_KEY, Slice, indexed};
use crate::provider::DataProviderManager;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

/// A parsed provider reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderRef {
    Data { name: String },
    Page { key: String },
    Filtered { name: String, key: String, value: String },
}

impl ProviderRef {
    /// Parse a reference string.
    ///
    /// Returns `Ok(None)` when no grammar matches; the caller treats the
    /// source as unpaginated.
    pub fn parse(reference: &str) -> Result<Option<Self>, PaginationError> {
        static RE_PROVIDER: LazyLock<Regex> = LazyLock::new(|| {
            Regex::new(r"^(?P<kind>data|page|filtered)\.(?P<rest>.+)$").unwrap()
        });

        let Some(caps) = RE_PROVIDER.captures(reference) else {
            return Ok(None);
        };
        let rest = &caps["rest"];

        let parsed = match &caps["kind"] {
            "data" => Self::Data {
                name: rest.to_owned(),
            },
            "page" => Self::Page {
                key: rest.to_owned(),
            },
            _ => {
                let mut parts = rest.split('.');
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(name), Some(key), Some(value)) => Self::Filtered {
                        name: name.to_owned(),
                        key: key.to_owned(),
                        value: value.to_owned(),
                    },
                    _ => return Err(PaginationError::MalformedFilterReference(reference.to_owned())),
                }
            }
        };

        Ok(Some(parsed))
    }
}

/// Resolve a reference to the keyed items to paginate.
///
/// `None` means there is nothing to paginate (e.g. `page.<key>` is unset).
pub fn resolve(
    reference: &ProviderRef,
    source: &ContentUnit,
    providers: &DataProviderManager,
) -> Result<Option<Slice>, PaginationError> {
    let items = match reference {
        ProviderRef::Data { name } => {
            let mut data = providers.data_provider(name)?.provide_data();
            if data.is_empty() {
                // Empty providers still produce one (empty) page
                data.push(Item::placeholder());
            }
            indexed(data)
        }
        ProviderRef::Page { key } => match source.data().get(key) {
            Some(value) if !value.is_null() => keyed_items(value),
            // A string permalink lives in its typed slot; as a scalar it has no items
            _ if key == PERMALINK_KEY && source.data().permalink().is_some() => Vec::new(),
            _ => return Ok(None),
        },
        ProviderRef::Filtered { name, key, value } => {
            indexed(filter(providers.data_provider(name)?, key, value))
        }
    };

    Ok(Some(items))
}

/// Iterate a metadata value the way a collection is iterated.
///
/// Scalars have nothing to iterate and yield no items.
fn keyed_items(value: &Value) -> Slice {
    match value {
        Value::Array(values) => values
            .iter()
            .enumerate()
            .map(|(index, v)| (ItemKey::Index(index), Item::new(v.clone())))
            .collect(),
        Value::Object(map) => map
            .iter()
            .map(|(k, v)| (ItemKey::Name(k.clone()), Item::new(v.clone())))
            .collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Metadata;
    use crate::provider::StaticProvider;
    use serde_json::json;

    fn source(data: Value) -> ContentUnit {
        let data = Metadata::from_map(data.as_object().cloned().unwrap_or_default());
        ContentUnit::new("blog.md", "blog.md", data)
    }

    fn providers() -> DataProviderManager {
        let mut providers = DataProviderManager::new();
        providers.register(
            "posts",
            StaticProvider::new([
                Item::new(json!({ "title": "A", "draft": true })),
                Item::new(json!({ "title": "B", "draft": false })),
            ]),
        );
        providers.register("empty", StaticProvider::default());
        providers
    }

    // ========================================================================
    // ProviderRef::parse
    // ========================================================================

    #[test]
    fn test_parse_data() {
        assert_eq!(
            ProviderRef::parse("data.posts").unwrap(),
            Some(ProviderRef::Data { name: "posts".into() })
        );
    }

    #[test]
    fn test_parse_page() {
        assert_eq!(
            ProviderRef::parse("page.photos").unwrap(),
            Some(ProviderRef::Page { key: "photos".into() })
        );
    }

    #[test]
    fn test_parse_filtered() {
        assert_eq!(
            ProviderRef::parse("filtered.posts.tags.rust").unwrap(),
            Some(ProviderRef::Filtered {
                name: "posts".into(),
                key: "tags".into(),
                value: "rust".into(),
            })
        );
    }

    #[test]
    fn test_parse_filtered_truncates_dotted_value() {
        assert_eq!(
            ProviderRef::parse("filtered.posts.version.1.2").unwrap(),
            Some(ProviderRef::Filtered {
                name: "posts".into(),
                key: "version".into(),
                value: "1".into(),
            })
        );
    }

    #[test]
    fn test_parse_filtered_missing_parts() {
        let err = ProviderRef::parse("filtered.posts.tags").unwrap_err();
        assert!(matches!(
            err,
            PaginationError::MalformedFilterReference(reference) if reference == "filtered.posts.tags"
        ));
    }

    #[test]
    fn test_parse_unmatched() {
        for reference in ["posts", "data.", "datа.posts", "site.posts", "", ".posts", "Data.posts"] {
            assert_eq!(ProviderRef::parse(reference).unwrap(), None, "{reference}");
        }
    }

    // ========================================================================
    // resolve
    // ========================================================================

    #[test]
    fn test_resolve_data() {
        let reference = ProviderRef::Data { name: "posts".into() };
        let items = resolve(&reference, &source(json!({})), &providers()).unwrap().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].0, ItemKey::Index(1));
    }

    #[test]
    fn test_resolve_empty_data_yields_placeholder() {
        let reference = ProviderRef::Data { name: "empty".into() };
        let items = resolve(&reference, &source(json!({})), &providers()).unwrap().unwrap();
        assert_eq!(items, vec![(ItemKey::Index(0), Item::placeholder())]);
    }

    #[test]
    fn test_resolve_unknown_provider() {
        let reference = ProviderRef::Data { name: "missing".into() };
        let result = resolve(&reference, &source(json!({})), &providers());
        assert!(matches!(result, Err(PaginationError::UnknownProvider(name)) if name == "missing"));
    }

    #[test]
    fn test_resolve_page_array() {
        let reference = ProviderRef::Page { key: "photos".into() };
        let unit = source(json!({ "photos": ["a.jpg", "b.jpg", "c.jpg"] }));
        let items = resolve(&reference, &unit, &providers()).unwrap().unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[2], (ItemKey::Index(2), Item::new(json!("c.jpg"))));
    }

    #[test]
    fn test_resolve_page_object_keeps_keys() {
        let reference = ProviderRef::Page { key: "people".into() };
        let unit = source(json!({ "people": { "zoe": 1, "adam": 2 } }));
        let items = resolve(&reference, &unit, &providers()).unwrap().unwrap();
        assert_eq!(items[0].0, ItemKey::Name("zoe".into()));
        assert_eq!(items[1].0, ItemKey::Name("adam".into()));
    }

    #[test]
    fn test_resolve_page_absent() {
        let reference = ProviderRef::Page { key: "photos".into() };
        assert_eq!(resolve(&reference, &source(json!({})), &providers()).unwrap(), None);
        let unit = source(json!({ "photos": null }));
        assert_eq!(resolve(&reference, &unit, &providers()).unwrap(), None);
    }

    #[test]
    fn test_resolve_page_scalar_is_empty() {
        let reference = ProviderRef::Page { key: "title".into() };
        let unit = source(json!({ "title": "Blog" }));
        assert_eq!(resolve(&reference, &unit, &providers()).unwrap(), Some(vec![]));
    }

    #[test]
    fn test_resolve_page_permalink() {
        let reference = ProviderRef::Page { key: "permalink".into() };
        let unit = source(json!({ "permalink": "blog/" }));
        assert_eq!(unit.data().get("permalink"), None);
        assert_eq!(resolve(&reference, &unit, &providers()).unwrap(), Some(vec![]));

        let unit = source(json!({ "permalink": ["a", "b"] }));
        assert_eq!(resolve(&reference, &unit, &providers()).unwrap().map(|items| items.len()), Some(2));

        assert_eq!(resolve(&reference, &source(json!({})), &providers()).unwrap(), None);
    }

    #[test]
    fn test_resolve_filtered_empty_has_no_placeholder() {
        let reference = ProviderRef::Filtered {
            name: "empty".into(),
            key: "draft".into(),
            value: "true".into(),
        };
        assert_eq!(resolve(&reference, &source(json!({})), &providers()).unwrap(), Some(vec![]));
    }

    #[test]
    fn test_resolve_filtered() {
        let reference = ProviderRef::Filtered {
            name: "posts".into(),
            key: "draft".into(),
            value: "false".into(),
        };
        let items = resolve(&reference, &source(json!({})), &providers()).unwrap().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].1.meta("title"), Some(&json!("B")));
        assert_eq!(items[0].0, ItemKey::Index(0));
    }
}
