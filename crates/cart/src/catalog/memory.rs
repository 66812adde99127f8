//! In-memory catalog.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rocket_cart_core::{Product, ProductId, Stock};

use super::{CatalogError, StockOracle};

#[derive(Default)]
struct Inventory {
    products: HashMap<ProductId, Product>,
    stock: HashMap<ProductId, u32>,
    outage: Option<String>,
}

/// Catalog backed by a mutex-guarded map.
///
/// Stock can be changed while a store holds a reference, and lookups can be
/// forced to fail to simulate the service being down.
#[derive(Default)]
pub struct InMemoryCatalog {
    inner: Mutex<Inventory>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Inventory> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a product with the given stock level.
    pub fn insert(&self, product: Product, stock: u32) {
        let mut inventory = self.lock();
        inventory.stock.insert(product.id, stock);
        inventory.products.insert(product.id, product);
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with_product(self, product: Product, stock: u32) -> Self {
        self.insert(product, stock);
        self
    }

    /// Change the stock level of a product.
    pub fn set_stock(&self, id: ProductId, amount: u32) {
        self.lock().stock.insert(id, amount);
    }

    /// Make every lookup fail with `CatalogError::Unavailable` until
    /// [`restore`](Self::restore) is called.
    pub fn fail_with(&self, reason: impl Into<String>) {
        self.lock().outage = Some(reason.into());
    }

    pub fn restore(&self) {
        self.lock().outage = None;
    }

    fn check_outage(inventory: &Inventory) -> Result<(), CatalogError> {
        inventory
            .outage
            .as_ref()
            .map_or(Ok(()), |reason| Err(CatalogError::Unavailable(reason.clone())))
    }
}

impl StockOracle for InMemoryCatalog {
    async fn stock(&self, id: ProductId) -> Result<Stock, CatalogError> {
        let inventory = self.lock();
        Self::check_outage(&inventory)?;
        inventory
            .stock
            .get(&id)
            .map(|&amount| Stock { id, amount })
            .ok_or(CatalogError::NotFound(id))
    }

    async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let inventory = self.lock();
        Self::check_outage(&inventory)?;
        inventory
            .products
            .get(&id)
            .cloned()
            .ok_or(CatalogError::NotFound(id))
    }
}
