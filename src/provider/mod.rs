//! Named data providers.
//!
//! A provider exposes an ordered sequence of items on demand. Providers are
//! registered by name in a [`DataProviderManager`] and looked up by the
//! pagination resolver (`data.<name>`, `filtered.<name>...`).
//!
//! ```ignore
//! let mut providers = DataProviderManager::new();
//! providers.register("posts", StaticProvider::new(posts));
//! let posts = providers.data_provider("posts")?.provide_data();
//! ```

use crate::content::Item;
use crate::paginate::PaginationError;
use rustc_hash::FxHashMap;

/// String a boolean `true` compares as in filter expressions.
pub const TRUTHY: &str = "1";

/// String a boolean `false` compares as in filter expressions.
pub const FALSY: &str = "";

/// A named source of ordered items.
pub trait DataProvider: Send + Sync {
    /// Produce the provider's full item sequence.
    ///
    /// Called on every lookup; results are not cached by callers.
    fn provide_data(&self) -> Vec<Item>;

    /// String representation of boolean `true` for this provider.
    fn truthy(&self) -> &str {
        TRUTHY
    }

    /// String representation of boolean `false` for this provider.
    fn falsy(&self) -> &str {
        FALSY
    }
}

/// Provider over an in-memory sequence.
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    items: Vec<Item>,
}

impl StaticProvider {
    pub fn new(items: impl IntoIterator<Item = Item>) -> Self {
        Self {
            items: items.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl DataProvider for StaticProvider {
    fn provide_data(&self) -> Vec<Item> {
        self.items.clone()
    }
}

/// Registry of providers by name.
#[derive(Default)]
pub struct DataProviderManager {
    providers: FxHashMap<String, Box<dyn DataProvider>>,
}

impl DataProviderManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider, replacing any previous one with the same name.
    pub fn register(&mut self, name: impl Into<String>, provider: impl DataProvider + 'static) {
        self.providers.insert(name.into(), Box::new(provider));
    }

    /// Look up a provider by name.
    pub fn data_provider(&self, name: &str) -> Result<&dyn DataProvider, PaginationError> {
        self.providers
            .get(name)
            .map(|provider| &**provider)
            .ok_or_else(|| PaginationError::UnknownProvider(name.to_owned()))
    }

    /// Registered provider names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl std::fmt::Debug for DataProviderManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataProviderManager")
            .field("providers", &self.names())
            .finish()
    }
}
