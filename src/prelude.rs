//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, LineItem},
    catalog::{Catalog, CatalogError},
    chrome::{MOBILE_BREAKPOINT, NavState, badge},
    commands::{CartCommand, CommandError},
    fixtures::FixtureError,
    pricing::TotalPriceError,
    products::{Product, ProductId},
    receipt::{Receipt, ReceiptError, ReceiptLine, write_catalog},
};
