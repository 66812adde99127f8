//! The cart and its line items.
//!
//! A [`Cart`] is an ordered, id-unique sequence of [`CartItem`]s. It is a
//! value type: every change produces a new cart, so a caller can compute the
//! next state, persist it, and only then swap it in.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{Price, Product, ProductId};

/// Errors raised when building a cart from raw items.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CartItemError {
    #[error("duplicate product id in cart: {0}")]
    DuplicateId(ProductId),
}

/// A product in the cart together with the requested quantity.
///
/// Display metadata is a copy of the catalog record taken when the product
/// first entered the cart. Serialized flat: `{"id":1,"title":..,"amount":2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(flatten)]
    pub product: Product,
    pub amount: NonZeroU32,
}

impl CartItem {
    /// A fresh line with a single unit.
    ///
    /// An `amount` field among the product's extra catalog fields is dropped,
    /// since the line's own amount takes that key in the stored form.
    #[must_use]
    pub fn new(mut product: Product) -> Self {
        product.extra.remove("amount");
        Self {
            product,
            amount: NonZeroU32::MIN,
        }
    }

    #[must_use]
    pub const fn id(&self) -> ProductId {
        self.product.id
    }

    #[must_use]
    pub const fn amount(&self) -> u32 {
        self.amount.get()
    }

    /// Unit price times amount.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.amount())
    }
}

/// Ordered collection of cart items, unique by product id.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from items, rejecting duplicate ids.
    ///
    /// # Errors
    ///
    /// Returns `CartItemError::DuplicateId` if two items share an id.
    pub fn from_items(items: Vec<CartItem>) -> Result<Self, CartItemError> {
        for (i, item) in items.iter().enumerate() {
            if items.iter().skip(i + 1).any(|other| other.id() == item.id()) {
                return Err(CartItemError::DuplicateId(item.id()));
            }
        }
        Ok(Self { items })
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CartItem> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Position of the item with the given id.
    #[must_use]
    pub fn position(&self, id: ProductId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Amount currently in the cart for `id`, zero when absent.
    #[must_use]
    pub fn amount_of(&self, id: ProductId) -> u32 {
        self.get(id).map_or(0, CartItem::amount)
    }

    /// Copy of this cart with the amount of `id` replaced in place.
    ///
    /// Returns `None` when the item is not in the cart.
    #[must_use]
    pub fn with_amount(&self, id: ProductId, amount: NonZeroU32) -> Option<Self> {
        let index = self.position(id)?;
        let mut next = self.clone();
        if let Some(item) = next.items.get_mut(index) {
            item.amount = amount;
        }
        Some(next)
    }

    /// Copy of this cart with `item` appended at the end.
    ///
    /// # Errors
    ///
    /// Returns `CartItemError::DuplicateId` if the id is already present.
    pub fn with_appended(&self, item: CartItem) -> Result<Self, CartItemError> {
        if self.position(item.id()).is_some() {
            return Err(CartItemError::DuplicateId(item.id()));
        }
        let mut next = self.clone();
        next.items.push(item);
        Ok(next)
    }

    /// Copy of this cart without `id`; remaining items keep their order.
    ///
    /// Returns `None` when the item is not in the cart.
    #[must_use]
    pub fn without(&self, id: ProductId) -> Option<Self> {
        let index = self.position(id)?;
        let mut next = self.clone();
        next.items.remove(index);
        Some(next)
    }

    /// Sum of all item amounts.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.amount())).sum()
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(CartItem::line_total).sum()
    }
}

impl TryFrom<Vec<CartItem>> for Cart {
    type Error = CartItemError;

    fn try_from(items: Vec<CartItem>) -> Result<Self, Self::Error> {
        Self::from_items(items)
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
