//! `[pagination]` section configuration.
//!
//! Site-wide defaults for sources that do not configure pagination themselves.

use super::defaults;
use educe::Educe;
use serde::{Deserialize, Serialize};

/// `[pagination]` section in sheaf.toml.
///
/// # Example
/// ```toml
/// [pagination]
/// max_per_page = 10
/// provider = "data.posts"
/// generator = "pagination"
/// ```
#[derive(Debug, Clone, Educe, Serialize, Deserialize)]
#[educe(Default)]
#[serde(deny_unknown_fields)]
pub struct PagingConfig {
    /// Default page size. Must be greater than 0.
    #[serde(default = "defaults::pagination::max_per_page")]
    #[educe(Default = defaults::pagination::max_per_page())]
    pub max_per_page: i64,

    /// Default provider reference.
    #[serde(default = "defaults::pagination::provider")]
    #[educe(Default = defaults::pagination::provider())]
    pub provider: String,

    /// Value of a source's `generator` metadata that opts it into pagination.
    #[serde(default = "defaults::pagination::generator")]
    #[educe(Default = defaults::pagination::generator())]
    pub generator: String,
}
