//! Cart error handling.
//!
//! Provides the `CartError` type returned by the fallible `try_*` store
//! operations, and the mapping from an error to the message a user sees.
//! The notifying operations collapse every failure of one operation into a
//! single generic message, except for stock shortages which get their own.

use std::fmt;

use rocket_cart_core::{CartItemError, ProductId};
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::storage::StorageError;

/// Message sent when a requested quantity exceeds available stock.
pub const OUT_OF_STOCK: &str = "Requested quantity out of stock";

/// The three cart mutations, used to pick a failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    AddProduct,
    RemoveProduct,
    UpdateProductAmount,
}

impl Operation {
    /// Generic message for any failure of this operation other than a stock
    /// shortage.
    #[must_use]
    pub const fn failure_message(self) -> &'static str {
        match self {
            Self::AddProduct => "Failed to add product",
            Self::RemoveProduct => "Failed to remove product",
            Self::UpdateProductAmount => "Failed to update product quantity",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddProduct => write!(f, "add_product"),
            Self::RemoveProduct => write!(f, "remove_product"),
            Self::UpdateProductAmount => write!(f, "update_product_amount"),
        }
    }
}

/// Error type for cart operations.
#[derive(Debug, Error)]
pub enum CartError {
    /// Requested amount is larger than the available stock.
    #[error("Requested {requested} of product {id} but only {available} in stock")]
    StockExceeded {
        id: ProductId,
        requested: i64,
        available: u32,
    },

    /// Product is not in the cart.
    #[error("Product {0} is not in the cart")]
    NotInCart(ProductId),

    /// Requested amount is zero or negative.
    #[error("Invalid amount: {0}")]
    InvalidAmount(i64),

    /// Stock or catalog lookup failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Loading or persisting the cart failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Cart value could not be built.
    #[error("Invalid cart: {0}")]
    InvalidCart(#[from] CartItemError),
}

impl CartError {
    /// Whether the product is unknown, either to the cart or to the catalog.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        match self {
            Self::NotInCart(_) => true,
            Self::Catalog(e) => e.is_not_found(),
            _ => false,
        }
    }

    /// Message to show the user when `operation` fails with this error.
    ///
    /// `None` means the failure is silent.
    #[must_use]
    pub const fn user_message(&self, operation: Operation) -> Option<&'static str> {
        match self {
            Self::StockExceeded { .. } => Some(OUT_OF_STOCK),
            Self::InvalidAmount(_) => None,
            Self::NotInCart(_) | Self::Catalog(_) | Self::Storage(_) | Self::InvalidCart(_) => {
                Some(operation.failure_message())
            }
        }
    }
}

/// Result type alias for `CartError`.
pub type Result<T> = std::result::Result<T, CartError>;
