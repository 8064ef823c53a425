//! Fixed-size contiguous chunking.

use super::error::PaginationError;
use crate::content::Slice;
use std::num::NonZeroUsize;

/// Validate a configured page size.
pub fn page_size(raw: i64) -> Result<NonZeroUsize, PaginationError> {
    usize::try_from(raw)
        .ok()
        .and_then(NonZeroUsize::new)
        .ok_or(PaginationError::InvalidPageSize(raw))
}

/// Split keyed items into pages of `size` items.
///
/// Every page but the last holds exactly `size` items; the last holds the
/// remainder. No items yield no pages.
pub fn slice(items: Slice, size: NonZeroUsize) -> Vec<Slice> {
    let size = size.get();
    let mut slices = Vec::with_capacity(items.len().div_ceil(size));
    let mut current = Vec::with_capacity(size);

    for entry in items {
        current.push(entry);
        if current.len() == size {
            slices.push(std::mem::replace(&mut current, Vec::with_capacity(size)));
        }
    }

    if !current.is_empty() {
        slices.push(current);
    }
    slices
}
