//! JSON stock/catalog API client.
//!
//! Uses `reqwest` for HTTP. Product metadata is cached using `moka` (TTL from
//! config); stock levels always hit the service.

use std::sync::Arc;

use moka::future::Cache;
use rocket_cart_core::{Product, ProductId, Stock};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use super::{CatalogError, StockOracle, ensure_id};
use crate::config::CatalogApiConfig;

const PRODUCT_CACHE_CAPACITY: u64 = 1000;

/// Body of `GET /stock/{id}`. The id echo is optional.
#[derive(Debug, Deserialize)]
struct StockReply {
    #[serde(default)]
    id: Option<ProductId>,
    amount: u32,
}

// =============================================================================
// HttpCatalog
// =============================================================================

/// Client for the stock/catalog JSON API.
///
/// - `GET {base}/stock/{id}` → `{ "amount": 3 }`, optionally with `"id"`
/// - `GET {base}/products/{id}` → `{ "id": 1, "title": .., "price": .., "image": .. }`
///
/// Cheaply cloneable; clones share the HTTP connection pool and the cache.
#[derive(Clone)]
pub struct HttpCatalog {
    inner: Arc<HttpCatalogInner>,
}

struct HttpCatalogInner {
    client: reqwest::Client,
    base_url: Url,
    token: Option<SecretString>,
    products: Cache<ProductId, Product>,
}

impl HttpCatalog {
    /// Create a new catalog client.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Http` if the HTTP client cannot be built.
    pub fn new(config: &CatalogApiConfig) -> Result<Self, CatalogError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let products = Cache::builder()
            .max_capacity(PRODUCT_CACHE_CAPACITY)
            .time_to_live(config.product_cache_ttl)
            .build();

        // A base without a trailing slash would have its last segment replaced by `join`
        let mut base_url = config.base_url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self {
            inner: Arc::new(HttpCatalogInner {
                client,
                base_url,
                token: config.token.clone(),
                products,
            }),
        })
    }

    /// Base URL requests are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Drop cached product metadata.
    pub fn invalidate_products(&self) {
        self.inner.products.invalidate_all();
    }

    /// Fetch and decode a JSON resource for `id`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        resource: &str,
        id: ProductId,
    ) -> Result<T, CatalogError> {
        let url = self
            .inner
            .base_url
            .join(&format!("{resource}/{id}"))
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        let mut request = self.inner.client.get(url);
        if let Some(token) = &self.inner.token {
            request = request.bearer_auth(token.expose_secret());
        }

        let response = request.send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(id));
        }

        // Get response body as text first for better error diagnostics
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Catalog API returned non-success status"
            );
            return Err(CatalogError::Status(status.as_u16()));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse catalog response"
            );
            CatalogError::Parse(e)
        })
    }
}

impl StockOracle for HttpCatalog {
    #[instrument(skip(self), fields(base_url = %self.inner.base_url))]
    async fn stock(&self, id: ProductId) -> Result<Stock, CatalogError> {
        let reply: StockReply = self.get_json("stock", id).await?;
        if let Some(returned) = reply.id {
            ensure_id(id, returned)?;
        }
        debug!(amount = reply.amount, "Fetched stock");
        Ok(Stock {
            id,
            amount: reply.amount,
        })
    }

    #[instrument(skip(self), fields(base_url = %self.inner.base_url))]
    async fn product(&self, id: ProductId) -> Result<Product, CatalogError> {
        if let Some(product) = self.inner.products.get(&id).await {
            debug!("Product cache hit");
            return Ok(product);
        }

        let product: Product = self.get_json("products", id).await?;
        ensure_id(id, product.id)?;
        self.inner.products.insert(id, product.clone()).await;
        debug!(title = %product.title, "Fetched product");
        Ok(product)
    }
}
