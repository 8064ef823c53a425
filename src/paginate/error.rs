//! Pagination error types.

use thiserror::Error;

/// Fatal pagination errors.
///
/// A provider reference that matches no grammar is not an error: the source
/// is simply left unpaginated.
#[derive(Debug, Error)]
pub enum PaginationError {
    #[error("Invalid page size `{0}`: [pagination.max_per_page] must be greater than 0")]
    InvalidPageSize(i64),

    #[error("Unknown data provider `{0}`")]
    UnknownProvider(String),

    #[error("Malformed filter reference `{0}`: expected `filtered.<name>.<key>.<value>`")]
    MalformedFilterReference(String),

    #[error("Invalid pagination config")]
    Config(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_error_display() {
        let display = PaginationError::InvalidPageSize(0).to_string();
        assert!(display.contains("`0`"));
        assert!(display.contains("max_per_page"));

        let display = PaginationError::UnknownProvider("posts".into()).to_string();
        assert!(display.contains("posts"));

        let display = PaginationError::MalformedFilterReference("filtered.posts".into()).to_string();
        assert!(display.contains("filtered.posts"));
    }
}
