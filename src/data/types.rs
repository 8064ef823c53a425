//! Export types for generated units.
//!
//! These types are serialized to JSON (`pages.json`) for templates and
//! downstream tools.

use crate::content::ContentUnit;
use crate::paginate::Pages;
use crate::permalink::PermalinkFactory;
use serde::Serialize;
use serde_json::{Map, Value};

/// One exported content unit.
#[derive(Debug, Clone, Serialize)]
pub struct UnitData {
    /// Unit id (e.g., "blog/index.md:page=2")
    pub id: String,

    /// Output file path (e.g., "blog/page/2/index.html")
    pub permalink: String,

    /// URL path (e.g., "/blog/page/2/")
    pub url: String,

    /// Metadata entries other than permalink and page info
    pub data: Map<String, Value>,

    /// Page info, only for generated pages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationData>,
}

/// Page info of a generated page.
#[derive(Debug, Clone, Serialize)]
pub struct PaginationData {
    /// Items keyed by their key in the source collection, in order
    pub items: Map<String, Value>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub previous_page: Option<PageRef>,
    pub next_page: Option<PageRef>,
}

/// Reference to a neighbouring page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRef {
    pub id: String,
    pub url: String,
}

impl UnitData {
    /// Export a unit that was not paginated.
    pub fn from_unit(unit: &ContentUnit, permalinks: &dyn PermalinkFactory) -> Self {
        let permalink = permalinks.create(unit);
        Self {
            id: unit.source_id().to_owned(),
            permalink: permalink.relative_file_path().to_owned(),
            url: permalink.relative_url_path().to_owned(),
            data: unit.data().extra().clone(),
            pagination: None,
        }
    }

    /// Export every page of a generated set, resolving neighbour links.
    pub fn from_pages(pages: &Pages, permalinks: &dyn PermalinkFactory) -> Vec<Self> {
        let page_ref = |unit: &ContentUnit| PageRef {
            id: unit.source_id().to_owned(),
            url: permalinks.create(unit).relative_url_path().to_owned(),
        };

        pages
            .iter()
            .enumerate()
            .map(|(index, unit)| {
                let mut data = Self::from_unit(unit, permalinks);
                data.pagination = unit.data().pagination().map(|info| PaginationData {
                    items: info
                        .items
                        .iter()
                        .map(|(key, item)| (key.to_string(), item.value().clone()))
                        .collect(),
                    page: info.page,
                    total_pages: info.total_pages,
                    total_items: info.total_items,
                    previous_page: pages.previous(index).map(page_ref),
                    next_page: pages.next(index).map(page_ref),
                });
                data
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Metadata;
    use crate::paginate::PaginationGenerator;
    use crate::permalink::SourcePermalinkFactory;
    use crate::provider::{DataProviderManager, StaticProvider};
    use crate::content::Item;
    use serde_json::json;

    fn generate(n: usize, size: i64) -> Pages {
        let mut providers = DataProviderManager::new();
        providers.register("posts", StaticProvider::new((0..n).map(|i| Item::new(json!(i)))));
        let factory = SourcePermalinkFactory::default();
        let generator = PaginationGenerator::new(&providers, &factory, size);

        let mut data = Metadata::new();
        data.set("title", json!("Blog"));
        generator
            .generate(&ContentUnit::new("blog/index.md", "blog/index.md", data))
            .unwrap()
    }

    #[test]
    fn test_from_unit() {
        let unit = ContentUnit::new("about.md", "about.md", Metadata::new());
        let data = UnitData::from_unit(&unit, &SourcePermalinkFactory::default());
        assert_eq!(data.id, "about.md");
        assert_eq!(data.permalink, "about.html");
        assert_eq!(data.url, "/about.html");
        assert!(data.pagination.is_none());
    }

    #[test]
    fn test_from_pages_resolves_neighbours() {
        let pages = generate(5, 2);
        let exported = UnitData::from_pages(&pages, &SourcePermalinkFactory::default());

        assert_eq!(exported.len(), 3);
        assert_eq!(exported[0].permalink, "blog/index.html");
        assert_eq!(exported[1].permalink, "blog/page/2/index.html");
        assert_eq!(exported[1].url, "/blog/page/2/");

        let first = exported[0].pagination.as_ref().unwrap();
        assert!(first.previous_page.is_none());
        assert_eq!(
            first.next_page,
            Some(PageRef {
                id: "blog/index.md:page=2".into(),
                url: "/blog/page/2/".into(),
            })
        );

        let last = exported[2].pagination.as_ref().unwrap();
        assert_eq!(last.previous_page.as_ref().unwrap().url, "/blog/page/2/");
        assert!(last.next_page.is_none());
        assert_eq!(last.items.get("4"), Some(&json!(4)));
    }

    #[test]
    fn test_serialized_shape() {
        let pages = generate(1, 10);
        let exported = UnitData::from_pages(&pages, &SourcePermalinkFactory::default());
        let value = serde_json::to_value(&exported[0]).unwrap();

        assert_eq!(value["data"]["title"], json!("Blog"));
        assert_eq!(value["pagination"]["page"], json!(1));
        assert_eq!(value["pagination"]["items"], json!({ "0": 0 }));
        assert_eq!(value["pagination"]["previous_page"], Value::Null);
    }
}
