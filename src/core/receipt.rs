//! Checkout receipts.

use serde::{Deserialize, Deserializer, Serialize};

use crate::library::CatalogItem;

/// Result of resolving a wish list against one catalog.
///
/// Receipts are owned snapshots: swapping the storefront's server after a
/// checkout never changes a receipt already handed out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    /// Found items, in wish-list order
    pub items: Vec<CatalogItem>,

    /// Sum of item prices, rounded to cents
    pub total_price: f64,

    /// Estimated download time; `+inf` when the server speed is zero.
    /// JSON writes `+inf` as `null`, so `null` reads back as `+inf`.
    #[serde(deserialize_with = "null_as_infinity")]
    pub estimated_seconds: f64,

    /// Requested titles not in the catalog, in wish-list order
    pub missing: Vec<String>,
}

impl Receipt {
    /// Titles of the found items
    pub fn item_titles(&self) -> Vec<&str> {
        self.items.iter().map(|item| item.title.as_str()).collect()
    }

    pub fn estimated_minutes(&self) -> f64 {
        self.estimated_seconds / 60.0
    }

    /// Total download size of the found items (MB)
    pub fn total_size_mb(&self) -> f64 {
        self.items.iter().map(|item| item.size_mb).sum()
    }

    /// True when every requested title was found
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

fn null_as_infinity<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
}

/// Round to two decimal places, halves away from zero.
///
/// Operates on the scaled value, so `0.125` becomes `0.13`.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
