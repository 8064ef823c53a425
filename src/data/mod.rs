//! Site data: the input manifest and the exported units.
//!
//! ```text
//! site.json ──► Manifest ──► ContentUnit + DataProviderManager
//!                                   │
//!                          PaginationGenerator
//!                                   │
//!                                   ▼
//!                      Vec<UnitData> ──► public/pages.json
//! ```

mod manifest;
mod types;

pub use manifest::{Manifest, SourceEntry};
pub use types::{PageRef, PaginationData, UnitData};
