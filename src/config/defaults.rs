//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

// ============================================================================
// [build] Section Defaults
// ============================================================================

pub mod build {
    use std::path::PathBuf;

    pub fn root() -> Option<PathBuf> {
        None
    }

    pub fn manifest() -> PathBuf {
        "site.json".into()
    }

    pub fn output() -> PathBuf {
        "public".into()
    }

    pub fn export() -> PathBuf {
        "pages.json".into()
    }
}

// ============================================================================
// [pagination] Section Defaults
// ============================================================================

pub mod pagination {
    pub fn max_per_page() -> i64 {
        10
    }

    pub fn provider() -> String {
        crate::paginate::DEFAULT_PROVIDER.into()
    }

    pub fn generator() -> String {
        "pagination".into()
    }
}

// ============================================================================
// [permalink] Section Defaults
// ============================================================================

pub mod permalink {
    use crate::permalink::PermalinkPattern;

    pub fn pattern() -> PermalinkPattern {
        PermalinkPattern::None
    }
}
