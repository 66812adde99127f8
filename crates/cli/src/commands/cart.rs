//! Open the configured cart store and print carts.

use std::fmt::Write;

use rocket_cart::{CartConfig, CartStore, FileStorage, HttpCatalog, TracingNotifier};
use rocket_cart_core::Cart;
use tracing::info;

pub type CliCartStore = CartStore<HttpCatalog, FileStorage, TracingNotifier>;

/// Build a store from environment configuration.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the HTTP client cannot be
/// built, or the stored cart cannot be read.
pub fn open_store() -> Result<CliCartStore, Box<dyn std::error::Error>> {
    let config = CartConfig::from_env()?;
    info!(
        api = %config.api.base_url,
        storage_dir = %config.storage_dir.display(),
        "Opening cart"
    );

    let catalog = HttpCatalog::new(&config.api)?;
    let storage = FileStorage::new(&config.storage_dir);
    Ok(CartStore::open(
        catalog,
        storage,
        TracingNotifier,
        config.storage_key,
    )?)
}

/// Render a cart as a plain-text table.
pub fn render(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Cart is empty\n".to_string();
    }

    let mut out = String::new();
    for item in cart {
        let _ = writeln!(
            out,
            "{:>6}  {:<40}  {:>4} x {:>10}  = {:>10}",
            item.id(),
            item.product.title,
            item.amount(),
            item.product.price.to_string(),
            item.line_total().to_string(),
        );
    }
    let _ = writeln!(
        out,
        "{} item(s), {} unit(s), subtotal {}",
        cart.len(),
        cart.total_quantity(),
        cart.subtotal()
    );
    out
}

#[allow(clippy::print_stdout)]
pub fn print(cart: &Cart) {
    print!("{}", render(cart));
}
