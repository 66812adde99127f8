//! Catalog records as returned by the stock/catalog service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{Price, ProductId};

/// Descriptive product metadata from the catalog.
///
/// Fields the cart does not interpret are kept in `extra` and written back
/// unchanged, so the stored copy carries everything the catalog returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(alias = "name")]
    pub title: String,
    pub price: Price,
    /// Image URL.
    pub image: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// A product with no extra catalog fields.
    #[must_use]
    pub fn new(id: ProductId, title: impl Into<String>, price: Price, image: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image: image.into(),
            extra: Map::new(),
        }
    }
}

/// Available stock for a single product at the time it was queried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    pub id: ProductId,
    pub amount: u32,
}

impl Stock {
    /// Whether `requested` units fit in the available stock.
    ///
    /// Takes a signed value so callers can pass unchecked user input.
    #[must_use]
    pub fn allows(&self, requested: i64) -> bool {
        requested <= i64::from(self.amount)
    }
}
