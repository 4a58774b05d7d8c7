//! Content kinds sold by the storefront.
//!
//! Every concrete item type implements [`Content`]; receipts carry the
//! kind-erased [`CatalogItem`] snapshot instead.

use std::fmt;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Kind of content a server sells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentKind {
    /// Songs
    Music,

    /// Movies
    Video,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Music => write!(f, "music"),
            ContentKind::Video => write!(f, "video"),
        }
    }
}

impl std::str::FromStr for ContentKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "music" | "song" | "songs" => Ok(ContentKind::Music),
            "video" | "movie" | "movies" => Ok(ContentKind::Video),
            _ => anyhow::bail!("Unknown content kind: {}", s),
        }
    }
}

/// A purchasable, downloadable piece of content.
///
/// Implementors are immutable values identified by title within a catalog.
pub trait Content: Clone + fmt::Debug + Send + Sync {
    /// Kind shared by every value of this type
    const KIND: ContentKind;

    fn title(&self) -> &str;

    /// Download size in megabytes
    fn size_mb(&self) -> f64;

    fn price(&self) -> f64;

    /// Snapshot this item for a receipt
    fn to_item(&self) -> CatalogItem {
        CatalogItem {
            title: self.title().to_string(),
            size_mb: self.size_mb(),
            price: self.price(),
            kind: Self::KIND,
        }
    }
}

/// Kind-erased catalog item as it appears on a receipt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub title: String,
    pub size_mb: f64,
    pub price: f64,
    pub kind: ContentKind,
}

/// A song in a music catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub size_mb: f64,
    pub price: f64,
}

impl Song {
    pub fn new(title: impl Into<String>, size_mb: f64, price: f64) -> Self {
        Self {
            title: title.into(),
            size_mb,
            price,
        }
    }
}

impl Content for Song {
    const KIND: ContentKind = ContentKind::Music;

    fn title(&self) -> &str {
        &self.title
    }

    fn size_mb(&self) -> f64 {
        self.size_mb
    }

    fn price(&self) -> f64 {
        self.price
    }
}

/// A movie in a video catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub title: String,
    pub size_mb: f64,
    pub price: f64,
}

impl Movie {
    pub fn new(title: impl Into<String>, size_mb: f64, price: f64) -> Self {
        Self {
            title: title.into(),
            size_mb,
            price,
        }
    }
}

impl Content for Movie {
    const KIND: ContentKind = ContentKind::Video;

    fn title(&self) -> &str {
        &self.title
    }

    fn size_mb(&self) -> f64 {
        self.size_mb
    }

    fn price(&self) -> f64 {
        self.price
    }
}
