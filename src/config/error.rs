//! Errors raised while loading or validating `sheaf.toml`.

use crate::paginate::PaginationError;
use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config `{0}`")]
    Read(PathBuf, #[source] io::Error),

    #[error("Failed to parse sheaf.toml")]
    Parse(#[from] toml::de::Error),

    /// A field holds a value the engine cannot run with.
    #[error("[{section}.{field}] {reason}")]
    Invalid {
        section: &'static str,
        field: &'static str,
        reason: String,
    },

    #[error("[pagination.provider] is not a valid provider reference")]
    Provider(#[source] PaginationError),
}

impl ConfigError {
    pub fn invalid(section: &'static str, field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            section,
            field,
            reason: reason.into(),
        }
    }
}
