//! Rocket Cart - stock-aware shopping cart store.
//!
//! A [`CartStore`] keeps an ordered cart of products, checks every quantity
//! change against a [`StockOracle`], writes every successful change through to
//! a [`CartStorage`], and reports failures to a [`Notifier`] instead of
//! returning them.
//!
//! # Modules
//!
//! - [`store`] - the store and its operations
//! - [`catalog`] - stock/catalog lookups (HTTP and in-memory)
//! - [`storage`] - cart persistence (file and in-memory)
//! - [`notify`] - user-facing notifications
//! - [`config`] - environment configuration
//! - [`error`] - error types and user-facing messages

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod notify;
pub mod storage;
pub mod store;

pub use catalog::{CatalogError, HttpCatalog, InMemoryCatalog, StockOracle};
pub use config::{CartConfig, CatalogApiConfig, ConfigError};
pub use error::{CartError, OUT_OF_STOCK, Operation};
pub use notify::{Notifier, RecordingNotifier, TracingNotifier};
pub use storage::{CartStorage, DEFAULT_CART_KEY, FileStorage, MemoryStorage, StorageError};
pub use store::{CartStore, Outcome, UpdateProductAmount};
