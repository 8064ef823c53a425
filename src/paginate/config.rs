//! Per-source pagination config, read from the `pagination` metadata entry.
//!
//! ```json
//! { "pagination": { "provider": "data.posts", "max_per_page": 5 } }
//! ```

use super::error::PaginationError;
use crate::content::{ContentUnit, PAGINATION_KEY};
use serde::Deserialize;
use serde_json::Value;

/// Provider used when a source does not name one.
pub const DEFAULT_PROVIDER: &str = "data.posts";

/// Effective pagination settings for one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    pub provider: String,
    /// Unvalidated; the slicer rejects non-positive values.
    pub max_per_page: i64,
}

/// Shape of the metadata entry. Unknown fields are tolerated since the
/// same entry carries the generated page info for templates.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    provider: Option<String>,
    max_per_page: Option<i64>,
}

impl PaginationConfig {
    /// Read the config of `source`, filling gaps from the given defaults.
    ///
    /// A missing, `null` or `false` entry yields the defaults.
    pub fn from_unit(
        source: &ContentUnit,
        default_provider: &str,
        default_max_per_page: i64,
    ) -> Result<Self, PaginationError> {
        let raw = match source.data().get(PAGINATION_KEY) {
            None | Some(Value::Null | Value::Bool(false)) => RawConfig::default(),
            Some(value) => RawConfig::deserialize(value)?,
        };

        Ok(Self {
            provider: raw.provider.unwrap_or_else(|| default_provider.to_owned()),
            max_per_page: raw.max_per_page.unwrap_or(default_max_per_page),
        })
    }
}
