//! Stock and catalog lookups.
//!
//! # Architecture
//!
//! - The catalog service is the source of truth for stock; stock levels are
//!   always fetched fresh, never cached
//! - Product metadata is only needed when an item first enters the cart, and
//!   is cached in memory via `moka` by the HTTP client
//!
//! # Implementations
//!
//! - [`HttpCatalog`] - JSON API with `/stock/{id}` and `/products/{id}`
//! - [`InMemoryCatalog`] - mutex-guarded map for demos and tests

mod http;
mod memory;

use std::future::Future;

use rocket_cart_core::{Product, ProductId, Stock};
use thiserror::Error;

pub use http::HttpCatalog;
pub use memory::InMemoryCatalog;

/// Errors that can occur when querying the stock/catalog service.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Service answered with a non-success status.
    #[error("Unexpected status {0}")]
    Status(u16),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Product does not exist in the catalog.
    #[error("Not found: {0}")]
    NotFound(ProductId),

    /// Service answered for a different product than the one requested.
    #[error("Requested product {requested} but catalog returned {returned}")]
    UnexpectedProduct {
        requested: ProductId,
        returned: ProductId,
    },

    /// Service is unreachable for a reason other than HTTP transport.
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

impl CatalogError {
    /// Whether the failure says the product does not exist, as opposed to
    /// the service failing to answer.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Answers "how much of product X is available" and "what is product X".
///
/// Futures are `Send` so a store can be driven from a multi-threaded runtime.
pub trait StockOracle {
    /// Current available stock for `id`.
    fn stock(&self, id: ProductId) -> impl Future<Output = Result<Stock, CatalogError>> + Send;

    /// Descriptive metadata for `id`.
    fn product(&self, id: ProductId)
    -> impl Future<Output = Result<Product, CatalogError>> + Send;
}

impl<T: StockOracle + Sync> StockOracle for &T {
    fn stock(&self, id: ProductId) -> impl Future<Output = Result<Stock, CatalogError>> + Send {
        (**self).stock(id)
    }

    fn product(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Product, CatalogError>> + Send {
        (**self).product(id)
    }
}

/// Check that a catalog answer belongs to the requested product.
fn ensure_id(requested: ProductId, returned: ProductId) -> Result<(), CatalogError> {
    if requested == returned {
        Ok(())
    } else {
        Err(CatalogError::UnexpectedProduct {
            requested,
            returned,
        })
    }
}
