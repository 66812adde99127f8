//! Integration tests for Rocket Cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p rocket-cart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `http_catalog` - store driven through `HttpCatalog` against a mock API
//! - `file_persistence` - carts surviving across sessions in `FileStorage`
//! - `cart_invariants` - property tests over random operation sequences
//!
//! Shared fixtures live here.

use std::num::NonZeroU32;

use rocket_cart_core::{CartItem, Price, Product, ProductId};

/// A catalog product with a predictable title, price and image.
#[must_use]
pub fn shoe(id: i64) -> Product {
    Product::new(
        ProductId::new(id),
        format!("Tênis de Caminhada {id}"),
        Price::from_cents(10_000 + id * 990),
        format!("https://rocketshoes.example/images/{id}.jpg"),
    )
}

/// A cart line for [`shoe`] with the given amount.
///
/// # Panics
///
/// Panics if `amount` is zero.
#[must_use]
pub fn line(id: i64, amount: u32) -> CartItem {
    CartItem {
        product: shoe(id),
        amount: NonZeroU32::new(amount).unwrap_or_else(|| panic!("amount must be positive")),
    }
}

/// JSON body the catalog API returns for [`shoe`].
#[must_use]
pub fn shoe_json(id: i64) -> String {
    let product = shoe(id);
    format!(
        r#"{{"id":{id},"title":"{}","price":{},"image":"{}"}}"#,
        product.title,
        product.price.amount(),
        product.image
    )
}

/// JSON body the catalog API returns for a stock lookup.
#[must_use]
pub fn stock_json(id: i64, amount: u32) -> String {
    format!(r#"{{"id":{id},"amount":{amount}}}"#)
}
