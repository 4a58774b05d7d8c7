//! storefront - digital content checkout
//!
//! Resolves a wish list of titles against an in-memory catalog of songs or
//! movies and computes a receipt: the items found, the titles missing, the
//! total price rounded to cents, and the estimated download time.
//!
//! # Architecture
//!
//! - Each content kind (`Song`, `Movie`) implements `Content`
//! - A `ContentServer<T>` owns one catalog plus a download speed
//! - Every server implements the `ContentServing` capability
//! - A `Storefront` forwards checkouts to whichever server is active
//!
//! # Modules
//!
//! - `library`: Content kinds, catalogs, sample data
//! - `core`: Servers, receipts, storefront
//! - `render`: Receipt formatting (text, JSON)
//! - `config`: Speeds and output settings from YAML and env
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Run the two sample checkouts
//! storefront demo
//!
//! # Check out against the sample video catalog
//! storefront checkout --kind video "Solaris Rising" "Starlight Express"
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod library;
pub mod render;

// Re-export main types at crate root for convenience
pub use crate::core::{ContentServer, ContentServing, MusicServer, Receipt, Storefront, VideoServer};
pub use library::{Catalog, CatalogError, CatalogItem, Content, ContentKind, Movie, Song};
pub use render::OutputFormat;
