//! Content model shared by the pagination engine and its collaborators.
//!
//! - [`ContentUnit`]: a source document with an id, a path and metadata
//! - [`Metadata`]: semi-typed key/value bag
//! - [`Item`]: one element of a provider sequence

mod item;
mod metadata;
mod unit;

pub use item::{Item, ItemKey, Slice, indexed};
pub use metadata::{Metadata, PAGINATION_KEY, PERMALINK_KEY, PageInfo};
pub use unit::ContentUnit;
