//! Storefront
//!
//! Catalog, cart and navigation state for a single-page storefront. The cart
//! keeps at most one line item per product, never lets a quantity drop below
//! one and derives its total on every read.

pub mod cart;
pub mod catalog;
pub mod chrome;
pub mod commands;
pub mod config;
pub mod fixtures;
pub mod logging;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
