//! Rocket Cart Core - Shared cart types.
//!
//! This crate provides the data model used across all Rocket Cart components:
//! - `rocket-cart` - Cart store, catalog and storage adapters
//! - `rocket-cart-cli` - Command-line driver
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no storage.
//! Every invariant that can be checked without the outside world (unique ids,
//! positive amounts, insertion order) is enforced here.
//!
//! # Modules
//!
//! - [`types`] - Product ids, prices, catalog records and the cart itself

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
