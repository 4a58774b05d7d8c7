//! Content library: item kinds, catalogs, and the sample data.
//!
//! # Layout
//!
//! ```text
//! Catalog<T: Content>
//! ├── items: Vec<T>               # construction order
//! └── by_title: title -> index    # built once, duplicates rejected
//! ```

pub mod catalog;
pub mod content;
pub mod samples;

pub use catalog::{Catalog, CatalogError};
pub use content::{CatalogItem, Content, ContentKind, Movie, Song};
