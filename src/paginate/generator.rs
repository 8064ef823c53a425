//! Pagination generator: one source in, linked pages out.
//!
//! ```text
//! generate(source)
//!     │
//!     ├── PaginationConfig::from_unit()   provider + max_per_page
//!     ├── ProviderRef::parse() / resolve() keyed items (or nothing)
//!     ├── slice()                          fixed-size pages
//!     ├── per page
//!     │     ├── page 1: canonical permalink untouched
//!     │     └── page N: factory permalink → rewrite()
//!     └── link()                           previous/next indices
//! ```

use super::config::{DEFAULT_PROVIDER, PaginationConfig};
use super::error::PaginationError;
use super::link::link;
use super::pages::Pages;
use super::permalink::{rewrite, strip_dot_prefix};
use super::resolve::{ProviderRef, resolve};
use super::slice::{page_size, slice};
use crate::content::{ContentUnit, PageInfo};
use crate::permalink::PermalinkFactory;
use crate::provider::DataProviderManager;

/// Splits a source's data into linked, permalinked pages.
pub struct PaginationGenerator<'a> {
    providers: &'a DataProviderManager,
    permalinks: &'a dyn PermalinkFactory,
    /// Page size for sources that do not set `max_per_page`
    max_per_page: i64,
    default_provider: String,
}

impl<'a> PaginationGenerator<'a> {
    pub fn new(
        providers: &'a DataProviderManager,
        permalinks: &'a dyn PermalinkFactory,
        max_per_page: i64,
    ) -> Self {
        Self {
            providers,
            permalinks,
            max_per_page,
            default_provider: DEFAULT_PROVIDER.to_owned(),
        }
    }

    /// Use `provider` for sources that do not name one.
    pub fn with_default_provider(mut self, provider: impl Into<String>) -> Self {
        self.default_provider = provider.into();
        self
    }

    /// Generate the pages for `source`.
    ///
    /// An unrecognised provider reference yields no pages. `source` itself
    /// is never modified.
    pub fn generate(&self, source: &ContentUnit) -> Result<Pages, PaginationError> {
        let config =
            PaginationConfig::from_unit(source, &self.default_provider, self.max_per_page)?;

        let Some(reference) = ProviderRef::parse(&config.provider)? else {
            return Ok(Pages::default());
        };
        let Some(items) = resolve(&reference, source, self.providers)? else {
            return Ok(Pages::default());
        };

        let size = page_size(config.max_per_page)?;
        let total_items = items.len();
        let slices = slice(items, size);
        let total_pages = slices.len();

        let mut pages = Vec::with_capacity(total_pages);
        for (index, items) in slices.into_iter().enumerate() {
            let page_number = index + 1;
            let mut page = source.duplicate(format!("{}:page={page_number}", source.source_id()));

            if page_number > 1 {
                let canonical = self.permalinks.create(source);
                let permalink = rewrite(canonical.relative_file_path(), page_number);
                page.data_mut().set_permalink(strip_dot_prefix(&permalink));
            }

            page.data_mut().set_pagination(PageInfo {
                items,
                page: page_number,
                total_pages,
                total_items,
                previous_page: None,
                next_page: None,
            });
            pages.push(page);
        }

        link(&mut pages);
        Ok(Pages::new(pages))
    }
}
