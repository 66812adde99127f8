//! The cart store.
//!
//! `CartStore` owns the current [`Cart`] and its three collaborators: a
//! [`StockOracle`] for stock and product lookups, a [`CartStorage`] the cart is
//! written through to, and a [`Notifier`] for user-facing failures.
//!
//! Every mutation builds the next cart on a copy, writes it to storage, and
//! only then swaps it in. A failed operation leaves both the in-memory cart and
//! the stored blob untouched.
//!
//! # Example
//!
//! ```rust,ignore
//! use rocket_cart::{CartStore, FileStorage, HttpCatalog, TracingNotifier, UpdateProductAmount};
//!
//! let catalog = HttpCatalog::new(&config.api)?;
//! let storage = FileStorage::new(&config.storage_dir);
//! let mut store = CartStore::open(catalog, storage, TracingNotifier, &config.storage_key)?;
//!
//! store.add_product(ProductId::new(1)).await;
//! store.update_product_amount(UpdateProductAmount { product_id: ProductId::new(1), amount: 3 }).await;
//! store.remove_product(ProductId::new(1));
//! ```

use std::num::NonZeroU32;

use rocket_cart_core::{Cart, CartItem, ProductId, Stock};
use tracing::{debug, error, info, instrument, warn};

use crate::catalog::StockOracle;
use crate::error::{CartError, Operation, Result};
use crate::notify::Notifier;
use crate::storage::{CartStorage, StorageError};

/// Arguments of [`CartStore::update_product_amount`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateProductAmount {
    pub product_id: ProductId,
    /// Requested amount; zero or negative requests are ignored.
    pub amount: i64,
}

/// What a successful operation did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Product appended with a single unit.
    Added(ProductId),
    /// Amount of a product already in the cart replaced in place.
    AmountChanged { id: ProductId, amount: u32 },
    /// Product removed from the cart.
    Removed(ProductId),
}

/// Stock-aware, write-through cart.
pub struct CartStore<O, S, N> {
    cart: Cart,
    oracle: O,
    storage: S,
    notifier: N,
    key: String,
}

impl<O, S, N> CartStore<O, S, N>
where
    O: StockOracle,
    S: CartStorage,
    N: Notifier,
{
    /// Open the cart stored under `key`, or an empty cart if nothing is
    /// stored yet.
    ///
    /// # Errors
    ///
    /// Returns `CartError::Storage` if the storage cannot be read or the
    /// stored blob is not a valid cart.
    pub fn open(oracle: O, storage: S, notifier: N, key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        let cart = match storage.load(&key)? {
            Some(blob) => serde_json::from_str::<Cart>(&blob).map_err(|source| {
                StorageError::Decode {
                    key: key.clone(),
                    source,
                }
            })?,
            None => Cart::new(),
        };

        info!(key = %key, items = cart.len(), "Cart opened");

        Ok(Self {
            cart,
            oracle,
            storage,
            notifier,
            key,
        })
    }

    /// Current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Key the cart is persisted under.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    // =========================================================================
    // Notifying operations
    // =========================================================================

    /// Add one unit of `id`, appending the product if it is not in the cart.
    ///
    /// Failures are reported to the notifier; the cart is left unchanged.
    pub async fn add_product(&mut self, id: ProductId) {
        if let Err(e) = self.try_add_product(id).await {
            self.report(Operation::AddProduct, &e);
        }
    }

    /// Remove `id` from the cart.
    ///
    /// Failures are reported to the notifier; the cart is left unchanged.
    pub fn remove_product(&mut self, id: ProductId) {
        if let Err(e) = self.try_remove_product(id) {
            self.report(Operation::RemoveProduct, &e);
        }
    }

    /// Set the amount of a product already in the cart.
    ///
    /// Zero or negative amounts are ignored without notice. Other failures
    /// are reported to the notifier; the cart is left unchanged.
    pub async fn update_product_amount(&mut self, update: UpdateProductAmount) {
        if let Err(e) = self.try_update_product_amount(update).await {
            self.report(Operation::UpdateProductAmount, &e);
        }
    }

    // =========================================================================
    // Fallible operations
    // =========================================================================

    /// Add one unit of `id`.
    ///
    /// # Errors
    ///
    /// - `StockExceeded` if one more unit does not fit in stock
    /// - `Catalog` if the stock or product lookup fails
    /// - `Storage` if the write-through fails
    #[instrument(skip(self), fields(key = %self.key))]
    pub async fn try_add_product(&mut self, id: ProductId) -> Result<Outcome> {
        let current = self.cart.amount_of(id);
        let stock = self.oracle.stock(id).await?;
        let amount = fit_to_stock(id, &stock, i64::from(current) + 1)?;

        let (next, outcome) = if current > 0 {
            let next = self
                .cart
                .with_amount(id, amount)
                .ok_or(CartError::NotInCart(id))?;
            (
                next,
                Outcome::AmountChanged {
                    id,
                    amount: amount.get(),
                },
            )
        } else {
            let product = self.oracle.product(id).await?;
            debug!(title = %product.title, "Adding new product");
            (
                self.cart.with_appended(CartItem::new(product))?,
                Outcome::Added(id),
            )
        };

        self.commit(next)?;
        Ok(outcome)
    }

    /// Remove `id`. Never queries the catalog.
    ///
    /// # Errors
    ///
    /// - `NotInCart` if the product is not in the cart
    /// - `Storage` if the write-through fails
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn try_remove_product(&mut self, id: ProductId) -> Result<Outcome> {
        let next = self.cart.without(id).ok_or(CartError::NotInCart(id))?;
        self.commit(next)?;
        Ok(Outcome::Removed(id))
    }

    /// Set the amount of a product already in the cart.
    ///
    /// Stock is checked before the cart is searched, so an oversized request
    /// for a product not in the cart reports `StockExceeded`.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount <= 0`; nothing is queried or written
    /// - `StockExceeded` if the amount does not fit in stock
    /// - `NotInCart` if the product is not in the cart
    /// - `Catalog` if the stock lookup fails
    /// - `Storage` if the write-through fails
    #[instrument(skip(self), fields(key = %self.key))]
    pub async fn try_update_product_amount(
        &mut self,
        update: UpdateProductAmount,
    ) -> Result<Outcome> {
        let UpdateProductAmount { product_id, amount } = update;
        if amount <= 0 {
            return Err(CartError::InvalidAmount(amount));
        }

        let stock = self.oracle.stock(product_id).await?;
        let amount = fit_to_stock(product_id, &stock, amount)?;
        let next = self
            .cart
            .with_amount(product_id, amount)
            .ok_or(CartError::NotInCart(product_id))?;

        self.commit(next)?;
        Ok(Outcome::AmountChanged {
            id: product_id,
            amount: amount.get(),
        })
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Write `next` through to storage, then make it the current cart.
    fn commit(&mut self, next: Cart) -> Result<()> {
        let blob = serde_json::to_string(&next).map_err(StorageError::Encode)?;
        self.storage.store(&self.key, &blob)?;
        self.cart = next;

        info!(
            items = self.cart.len(),
            total_quantity = self.cart.total_quantity(),
            "Cart committed"
        );
        Ok(())
    }

    fn report(&self, operation: Operation, err: &CartError) {
        let Some(message) = err.user_message(operation) else {
            debug!(%operation, error = %err, "Cart operation ignored");
            return;
        };

        if matches!(err, CartError::Storage(_)) {
            error!(%operation, error = %err, "Failed to persist cart");
        } else {
            warn!(
                %operation,
                error = %err,
                not_found = err.is_not_found(),
                "Cart operation rejected"
            );
        }
        self.notifier.warn(message);
    }
}

/// Convert a requested amount into a cart amount that fits in `stock`.
fn fit_to_stock(id: ProductId, stock: &Stock, requested: i64) -> Result<NonZeroU32> {
    if requested <= 0 {
        return Err(CartError::InvalidAmount(requested));
    }
    let exceeded = || CartError::StockExceeded {
        id,
        requested,
        available: stock.amount,
    };
    if !stock.allows(requested) {
        return Err(exceeded());
    }
    u32::try_from(requested)
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or_else(exceeded)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rocket_cart_core::{Price, Product};

    use super::*;
    use crate::catalog::{CatalogError, InMemoryCatalog};
    use crate::error::OUT_OF_STOCK;
    use crate::notify::RecordingNotifier;
    use crate::storage::MemoryStorage;

    const KEY: &str = "@RocketShoes:cart";

    type TestStore<'a> = CartStore<&'a InMemoryCatalog, &'a MemoryStorage, &'a RecordingNotifier>;

    fn shoe(id: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Tênis {id}"),
            Price::from_cents(17990),
            format!("https://example.com/{id}.jpg"),
        )
    }

    fn item(id: i64, amount: u32) -> CartItem {
        CartItem {
            product: shoe(id),
            amount: NonZeroU32::new(amount).unwrap(),
        }
    }

    fn seeded(items: Vec<CartItem>) -> MemoryStorage {
        let cart = Cart::from_items(items).unwrap();
        MemoryStorage::with_blob(KEY, serde_json::to_string(&cart).unwrap())
    }

    fn open<'a>(
        catalog: &'a InMemoryCatalog,
        storage: &'a MemoryStorage,
        notifier: &'a RecordingNotifier,
    ) -> TestStore<'a> {
        CartStore::open(catalog, storage, notifier, KEY).unwrap()
    }

    fn amounts(cart: &Cart) -> Vec<(i64, u32)> {
        cart.iter().map(|i| (i.id().as_i64(), i.amount())).collect()
    }

    fn persisted(storage: &MemoryStorage) -> Cart {
        serde_json::from_str(&storage.blob(KEY).unwrap()).unwrap()
    }

    // =========================================================================
    // add_product
    // =========================================================================

    #[tokio::test]
    async fn test_add_to_empty_cart() {
        let catalog = InMemoryCatalog::new().with_product(shoe(1), 5);
        let storage = MemoryStorage::new();
        let notifier = RecordingNotifier::new();
        let mut store = open(&catalog, &storage, &notifier);

        store.add_product(ProductId::new(1)).await;

        assert_eq!(amounts(store.cart()), vec![(1, 1)]);
        assert_eq!(store.cart().get(ProductId::new(1)).unwrap().product, shoe(1));
        assert_eq!(&persisted(&storage), store.cart());
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_add_at_stock_limit_is_rejected() {
        let catalog = InMemoryCatalog::new().with_product(shoe(1), 5);
        let storage = seeded(vec![item(1, 5)]);
        let notifier = RecordingNotifier::new();
        let mut store = open(&catalog, &storage, &notifier);
        let before = storage.blob(KEY);

        store.add_product(ProductId::new(1)).await;

        assert_eq!(amounts(store.cart()), vec![(1, 5)]);
        assert_eq!(notifier.messages(), vec![OUT_OF_STOCK]);
        assert_eq!(storage.blob(KEY), before);
        assert_eq!(storage.writes(), 0);
    }

    #[tokio::test]
    async fn test_add_existing_keeps_position() {
        let catalog = InMemoryCatalog::new()
            .with_product(shoe(1), 5)
            .with_product(shoe(2), 5);
        let storage = seeded(vec![item(1, 1), item(2, 1)]);
        let notifier = RecordingNotifier::new();
        let mut store = open(&catalog, &storage, &notifier);

        let outcome = store.try_add_product(ProductId::new(1)).await.unwrap();

        assert_eq!(
            outcome,
            Outcome::AmountChanged {
                id: ProductId::new(1),
                amount: 2
            }
        );
        assert_eq!(amounts(store.cart()), vec![(1, 2), (2, 1)]);
        assert_eq!(amounts(&persisted(&storage)), vec![(1, 2), (2, 1)]);
    }

    #[tokio::test]
    async fn test_add_new_product_appends() {
        let catalog = InMemoryCatalog::new()
            .with_product(shoe(1), 5)
            .with_product(shoe(2), 5);
        let storage = seeded(vec![item(2, 3)]);
        let notifier = RecordingNotifier::new();
        let mut store = open(&catalog, &storage, &notifier);

        let outcome = store.try_add_product(ProductId::new(1)).await.unwrap();

        assert_eq!(outcome, Outcome::Added(ProductId::new(1)));
        assert_eq!(amounts(store.cart()), vec![(2, 3), (1, 1)]);
    }

    #[tokio::test]
    async fn test_add_with_zero_stock() {
        let catalog = InMemoryCatalog::new().with_product(shoe(1), 0);
        let storage = MemoryStorage::new();
        let notifier = RecordingNotifier::new();
        let mut store = open(&catalog, &storage, &notifier);

        store.add_product(ProductId::new(1)).await;

        assert!(store.cart().is_empty());
        assert_eq!(notifier.messages(), vec![OUT_OF_STOCK]);
        assert!(storage.blob(KEY).is_none());
    }

    #[tokio::test]
    async fn test_add_unknown_product() {
        let catalog = InMemoryCatalog::new();
        let storage = MemoryStorage::new();
        let notifier = RecordingNotifier::new();
        let mut store = open(&catalog, &storage, &notifier);

        let err = store.try_add_product(ProductId::new(7)).await.unwrap_err();
        assert!(matches!(err, CartError::Catalog(CatalogError::NotFound(_))));

        store.add_product(ProductId::new(7)).await;
        assert!(store.cart().is_empty());
        assert_eq!(notifier.messages(), vec!["Failed to add product"]);
    }

    #[tokio::test]
    async fn test_add_during_outage() {
        let catalog = InMemoryCatalog::new().with_product(shoe(1), 5);
        let storage = MemoryStorage::new();
        let notifier = RecordingNotifier::new();
        let mut store = open(&catalog, &storage, &notifier);
        catalog.fail_with("connection reset");

        let err = store.try_add_product(ProductId::new(1)).await.unwrap_err();
        assert!(matches!(err, CartError::Catalog(CatalogError::Unavailable(_))));

        store.add_product(ProductId::new(1)).await;
        assert!(store.cart().is_empty());
        assert_eq!(notifier.messages(), vec!["Failed to add product"]);
        assert_eq!(storage.writes(), 0);
    }

    #[tokio::test]
    async fn test_add_rechecks_stock_that_dropped_below_cart_amount() {
        let catalog = InMemoryCatalog::new().with_product(shoe(1), 5);
        let storage = seeded(vec![item(1, 4)]);
        let notifier = RecordingNotifier::new();
        let mut store = open(&catalog, &storage, &notifier);
        catalog.set_stock(ProductId::new(1), 2);

        store.add_product(ProductId::new(1)).await;

        assert_eq!(amounts(store.cart()), vec![(1, 4)]);
        assert_eq!(notifier.messages(), vec![OUT_OF_STOCK]);
    }

    // =========================================================================
    // remove_product
    // =========================================================================

    #[tokio::test]
    async fn test_remove_preserves_order() {
        let catalog = InMemoryCatalog::new();
        let storage = seeded(vec![item(1, 2), item(2, 1), item(3, 4)]);
        let notifier = RecordingNotifier::new();
        let mut store = open(&catalog, &storage, &notifier);

        store.remove_product(ProductId::new(1));

        assert_eq!(amounts(store.cart()), vec![(2, 1), (3, 4)]);
        assert_eq!(amounts(&persisted(&storage)), vec![(2, 1), (3, 4)]);
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_remove_missing_product() {
        let catalog = InMemoryCatalog::new();
        let storage = MemoryStorage::new();
        let notifier = RecordingNotifier::new();
        let mut store = open(&catalog, &storage, &notifier);

        assert!(matches!(
            store.try_remove_product(ProductId::new(99)),
            Err(CartError::NotInCart(_))
        ));

        store.remove_product(ProductId::new(99));
        assert!(store.cart().is_empty());
        assert_eq!(notifier.messages(), vec!["Failed to remove product"]);
        assert_eq!(storage.writes(), 0);
    }

    #[tokio::test]
    async fn test_remove_does_not_query_catalog() {
        let catalog = InMemoryCatalog::new();
        catalog.fail_with("offline");
        let storage = seeded(vec![item(1, 1)]);
        let notifier = RecordingNotifier::new();
        let mut store = open(&catalog, &storage, &notifier);

        store.remove_product(ProductId::new(1));

        assert!(store.cart().is_empty());
        assert!(notifier.messages().is_empty());
    }

    // =========================================================================
    // update_product_amount
    // =========================================================================

    #[tokio::test]
    async fn test_update_non_positive_is_silent_noop() {
        let catalog = InMemoryCatalog::new();
        catalog.fail_with("must not be queried");
        let storage = seeded(vec![item(1, 2)]);
        let notifier = RecordingNotifier::new();
        let mut store = open(&catalog, &storage, &notifier);

        for amount in [0, -1, i64::MIN] {
            store
                .update_product_amount(UpdateProductAmount {
                    product_id: ProductId::new(1),
                    amount,
                })
                .await;
        }

        assert_eq!(amounts(store.cart()), vec![(1, 2)]);
        assert!(notifier.messages().is_empty());
        assert_eq!(storage.writes(), 0);
    }

    #[tokio::test]
    async fn test_update_over_stock() {
        let catalog = InMemoryCatalog::new().with_product(shoe(1), 3);
        let storage = seeded(vec![item(1, 1)]);
        let notifier = RecordingNotifier::new();
        let mut store = open(&catalog, &storage, &notifier);

        store
            .update_product_amount(UpdateProductAmount {
                product_id: ProductId::new(1),
                amount: 10,
            })
            .await;

        assert_eq!(amounts(store.cart()), vec![(1, 1)]);
        assert_eq!(notifier.messages(), vec![OUT_OF_STOCK]);
        assert_eq!(storage.writes(), 0);
    }

    #[tokio::test]
    async fn test_update_beyond_u32_is_stock_exceeded() {
        let catalog = InMemoryCatalog::new().with_product(shoe(1), u32::MAX);
        let storage = seeded(vec![item(1, 1)]);
        let notifier = RecordingNotifier::new();
        let mut store = open(&catalog, &storage, &notifier);

        let err = store
            .try_update_product_amount(UpdateProductAmount {
                product_id: ProductId::new(1),
                amount: i64::from(u32::MAX) + 1,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CartError::StockExceeded { available, .. } if available == u32::MAX));
    }

    #[tokio::test]
    async fn test_update_in_place() {
        let catalog = InMemoryCatalog::new()
            .with_product(shoe(1), 10)
            .with_product(shoe(2), 10);
        let storage = seeded(vec![item(1, 1), item(2, 1)]);
        let notifier = RecordingNotifier::new();
        let mut store = open(&catalog, &storage, &notifier);

        store
            .update_product_amount(UpdateProductAmount {
                product_id: ProductId::new(1),
                amount: 10,
            })
            .await;

        assert_eq!(amounts(store.cart()), vec![(1, 10), (2, 1)]);
        assert_eq!(amounts(&persisted(&storage)), vec![(1, 10), (2, 1)]);
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_update_with_current_amount_is_idempotent() {
        let catalog = InMemoryCatalog::new().with_product(shoe(1), 5);
        let storage = seeded(vec![item(1, 3)]);
        let notifier = RecordingNotifier::new();
        let mut store = open(&catalog, &storage, &notifier);
        let before_blob = storage.blob(KEY);
        let before_cart = store.cart().clone();

        store
            .update_product_amount(UpdateProductAmount {
                product_id: ProductId::new(1),
                amount: 3,
            })
            .await;

        assert_eq!(store.cart(), &before_cart);
        assert_eq!(storage.blob(KEY), before_blob);
        assert_eq!(storage.writes(), 1, "write-through still happens");
    }

    #[tokio::test]
    async fn test_update_product_not_in_cart() {
        let catalog = InMemoryCatalog::new().with_product(shoe(4), 5);
        let storage = seeded(vec![item(1, 1)]);
        let notifier = RecordingNotifier::new();
        let mut store = open(&catalog, &storage, &notifier);

        let err = store
            .try_update_product_amount(UpdateProductAmount {
                product_id: ProductId::new(4),
                amount: 2,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CartError::NotInCart(_)));

        store
            .update_product_amount(UpdateProductAmount {
                product_id: ProductId::new(4),
                amount: 2,
            })
            .await;
        assert_eq!(notifier.messages(), vec!["Failed to update product quantity"]);
        assert_eq!(amounts(store.cart()), vec![(1, 1)]);
    }

    #[tokio::test]
    async fn test_update_stock_lookup_failure() {
        let catalog = InMemoryCatalog::new();
        let storage = seeded(vec![item(1, 1)]);
        let notifier = RecordingNotifier::new();
        let mut store = open(&catalog, &storage, &notifier);

        store
            .update_product_amount(UpdateProductAmount {
                product_id: ProductId::new(1),
                amount: 2,
            })
            .await;

        assert_eq!(notifier.messages(), vec!["Failed to update product quantity"]);
        assert_eq!(amounts(store.cart()), vec![(1, 1)]);
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    #[tokio::test]
    async fn test_storage_failure_leaves_cart_unchanged() {
        let catalog = InMemoryCatalog::new().with_product(shoe(1), 5);
        let storage = seeded(vec![item(1, 1)]);
        let notifier = RecordingNotifier::new();
        let mut store = open(&catalog, &storage, &notifier);
        let before = storage.blob(KEY);
        storage.set_read_only("disk full");

        store.add_product(ProductId::new(1)).await;
        store.remove_product(ProductId::new(1));

        assert_eq!(amounts(store.cart()), vec![(1, 1)]);
        assert_eq!(storage.blob(KEY), before);
        assert_eq!(
            notifier.messages(),
            vec!["Failed to add product", "Failed to remove product"]
        );
    }

    #[tokio::test]
    async fn test_reopen_yields_same_cart() {
        let catalog = InMemoryCatalog::new()
            .with_product(shoe(3), 5)
            .with_product(shoe(1), 5);
        let storage = MemoryStorage::new();
        let notifier = RecordingNotifier::new();

        let mut store = open(&catalog, &storage, &notifier);
        store.add_product(ProductId::new(3)).await;
        store.add_product(ProductId::new(1)).await;
        store.add_product(ProductId::new(3)).await;
        let first_session = store.cart().clone();
        drop(store);

        let reopened = open(&catalog, &storage, &notifier);
        assert_eq!(reopened.cart(), &first_session);
        assert_eq!(amounts(reopened.cart()), vec![(3, 2), (1, 1)]);
    }

    #[test]
    fn test_open_corrupt_blob() {
        let catalog = InMemoryCatalog::new();
        let storage = MemoryStorage::with_blob(KEY, "{not json");
        let notifier = RecordingNotifier::new();

        let result = CartStore::open(&catalog, &storage, &notifier, KEY);
        assert!(matches!(
            result,
            Err(CartError::Storage(StorageError::Decode { .. }))
        ));
    }

    #[test]
    fn test_fit_to_stock() {
        let stock = Stock {
            id: ProductId::new(1),
            amount: 2,
        };
        assert_eq!(fit_to_stock(stock.id, &stock, 2).unwrap().get(), 2);
        assert!(matches!(
            fit_to_stock(stock.id, &stock, 3),
            Err(CartError::StockExceeded { requested: 3, available: 2, .. })
        ));
        assert!(matches!(
            fit_to_stock(stock.id, &stock, 0),
            Err(CartError::InvalidAmount(0))
        ));
        assert!(matches!(
            fit_to_stock(stock.id, &stock, -5),
            Err(CartError::InvalidAmount(-5))
        ));
        assert!(matches!(
            fit_to_stock(stock.id, &stock, i64::MAX),
            Err(CartError::StockExceeded { available: 2, .. })
        ));

        let empty = Stock {
            id: ProductId::new(1),
            amount: 0,
        };
        assert!(matches!(
            fit_to_stock(empty.id, &empty, 1),
            Err(CartError::StockExceeded { requested: 1, available: 0, .. })
        ));
    }
}
