//! Sheaf - a pagination engine for static-content build pipelines.
//!
//! A source document opts into pagination; its data collection is split into
//! fixed-size pages, each page becomes its own content unit with a derived
//! permalink and links to its neighbours.

pub mod build;
pub mod cli;
pub mod config;
pub mod content;
pub mod data;
pub mod paginate;
pub mod permalink;
pub mod provider;
pub mod utils;
