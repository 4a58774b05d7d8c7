//! Catalog of purchasable content with a title index.
//!
//! Items keep their construction order; lookups go through a title map
//! built once when the catalog is created.

use std::collections::HashMap;

use thiserror::Error;

use super::content::Content;

/// Errors raised while building a catalog
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Duplicate title in catalog: {title}")]
    DuplicateTitle { title: String },
}

/// Ordered catalog of a single content kind
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    /// Items in construction order
    items: Vec<T>,

    /// Title -> position in `items`
    by_title: HashMap<String, usize>,
}

impl<T: Content> Catalog<T> {
    /// Build a catalog, rejecting duplicate titles
    pub fn new(items: Vec<T>) -> Result<Self, CatalogError> {
        let mut by_title = HashMap::with_capacity(items.len());

        for (pos, item) in items.iter().enumerate() {
            if by_title.insert(item.title().to_string(), pos).is_some() {
                return Err(CatalogError::DuplicateTitle {
                    title: item.title().to_string(),
                });
            }
        }

        Ok(Self { items, by_title })
    }

    /// Look up an item by exact title
    pub fn find_by_title(&self, title: &str) -> Option<&T> {
        self.by_title.get(title).map(|&pos| &self.items[pos])
    }

    pub fn contains(&self, title: &str) -> bool {
        self.by_title.contains_key(title)
    }

    /// Items in catalog order
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Titles in catalog order
    pub fn titles(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.title()).collect()
    }

    /// Get the number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
