//! Content servers: a catalog plus a download speed.

use tracing::debug;

use super::receipt::{round_to_cents, Receipt};
use crate::library::{Catalog, CatalogError, Content, ContentKind, Movie, Song};

/// Uniform capability the storefront talks to.
///
/// Every server kind implements this, whatever its item type.
pub trait ContentServing: Send + Sync {
    /// Kind of content this server sells
    fn kind(&self) -> ContentKind;

    /// Download speed in MB/s
    fn speed_mbps(&self) -> f64;

    /// Resolve a wish list into a receipt
    fn serve(&self, wish_list: &[String]) -> Receipt;
}

/// Server over a catalog of a single content kind
#[derive(Debug, Clone)]
pub struct ContentServer<T> {
    catalog: Catalog<T>,
    speed_mbps: f64,
}

/// Server selling songs
pub type MusicServer = ContentServer<Song>;

/// Server selling movies
pub type VideoServer = ContentServer<Movie>;

impl<T: Content> ContentServer<T> {
    pub fn new(catalog: Catalog<T>, speed_mbps: f64) -> Self {
        Self {
            catalog,
            speed_mbps,
        }
    }

    /// Build the catalog from items, then the server
    pub fn from_items(items: Vec<T>, speed_mbps: f64) -> Result<Self, CatalogError> {
        Ok(Self::new(Catalog::new(items)?, speed_mbps))
    }

    pub fn catalog(&self) -> &Catalog<T> {
        &self.catalog
    }
}

impl<T: Content> ContentServing for ContentServer<T> {
    fn kind(&self) -> ContentKind {
        T::KIND
    }

    fn speed_mbps(&self) -> f64 {
        self.speed_mbps
    }

    fn serve(&self, wish_list: &[String]) -> Receipt {
        let mut found: Vec<&T> = Vec::new();
        let mut missing = Vec::new();

        for title in wish_list {
            match self.catalog.find_by_title(title) {
                Some(item) => found.push(item),
                None => missing.push(title.clone()),
            }
        }

        let total_size: f64 = found.iter().map(|item| item.size_mb()).sum();
        let total_price: f64 = found.iter().map(|item| item.price()).sum();

        // Guard on speed only: zero size at zero speed is still infinite
        let estimated_seconds = if self.speed_mbps > 0.0 {
            total_size / self.speed_mbps
        } else {
            f64::INFINITY
        };

        let kind = T::KIND;
        debug!(
            kind = %kind,
            requested = wish_list.len(),
            found = found.len(),
            missing = missing.len(),
            "Served wish list"
        );

        Receipt {
            items: found.into_iter().map(|item| item.to_item()).collect(),
            total_price: round_to_cents(total_price),
            estimated_seconds,
            missing,
        }
    }
}
