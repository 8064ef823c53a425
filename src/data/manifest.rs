//! Site manifest: the sources to process and the data behind each provider.
//!
//! ```json
//! {
//!   "sources": [
//!     { "path": "blog/index.md", "data": { "generator": "pagination" } }
//!   ],
//!   "providers": {
//!     "posts": [ { "title": "Hello", "tags": ["rust"] } ]
//!   }
//! }
//! ```

use crate::content::{ContentUnit, Item, Metadata};
use crate::provider::{DataProviderManager, StaticProvider};
use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::{collections::BTreeMap, fs, path::Path};

/// Parsed site manifest.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub sources: Vec<SourceEntry>,

    /// Provider name → items
    #[serde(default)]
    pub providers: BTreeMap<String, Vec<Value>>,
}

/// One source document.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SourceEntry {
    /// Source id; defaults to `path`
    #[serde(default)]
    pub id: Option<String>,

    /// Path relative to the content root
    pub path: String,

    #[serde(default)]
    pub data: Map<String, Value>,
}

impl Manifest {
    /// Parse a manifest from JSON text.
    pub fn from_str(content: &str) -> Result<Self> {
        let manifest = serde_json::from_str(content)?;
        Ok(manifest)
    }

    /// Load a manifest file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read manifest `{}`", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("Failed to parse manifest `{}`", path.display()))
    }

    /// Register one static provider per `providers` entry.
    pub fn providers(&self) -> DataProviderManager {
        let mut manager = DataProviderManager::new();
        for (name, items) in &self.providers {
            manager.register(name, StaticProvider::new(items.iter().cloned().map(Item::new)));
        }
        manager
    }

    /// Build the content units, in manifest order.
    pub fn units(&self) -> Vec<ContentUnit> {
        self.sources
            .iter()
            .map(|entry| {
                let id = entry.id.as_deref().unwrap_or(&entry.path);
                ContentUnit::new(id, &entry.path, Metadata::from_map(entry.data.clone()))
            })
            .collect()
    }
}
