//! Pagination engine.
//!
//! Splits a source's data into fixed-size pages, derives one content unit
//! per page, assigns permalinks to pages 2..N and links neighbours.
//!
//! - [`resolve`]: provider references (`data.*`, `page.*`, `filtered.*`)
//! - [`filter`]: single-predicate filtering
//! - [`slice`]: fixed-size chunking
//! - [`rewrite`]: page-N permalinks
//! - [`link`]: previous/next wiring
//! - [`PaginationGenerator`]: drives the above per source

mod config;
mod error;
mod filter;
mod generator;
mod link;
mod pages;
mod permalink;
mod resolve;
mod slice;

pub use config::{DEFAULT_PROVIDER, PaginationConfig};
pub use error::PaginationError;
pub use filter::filter;
pub use generator::PaginationGenerator;
pub use link::link;
pub use pages::Pages;
pub use permalink::{rewrite, strip_dot_prefix};
pub use resolve::{ProviderRef, resolve};
pub use slice::{page_size, slice};
