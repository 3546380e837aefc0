//! Catalog

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    fixtures::FixtureError,
    products::{Product, ProductId},
};

/// Seed catalog shown on the storefront.
const STOREFRONT_FIXTURE: &str = include_str!("../fixtures/storefront.yaml");

/// Errors related to catalog construction.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// Two products share an id.
    #[error("Duplicate product id {0}")]
    DuplicateProduct(ProductId),

    /// A product has a price below zero.
    #[error("Product {0} has a negative price")]
    NegativePrice(ProductId),

    /// A product's currency differs from the catalog currency (index, product currency, catalog currency).
    #[error("Product {0} has currency {1}, but catalog has currency {2}")]
    CurrencyMismatch(usize, &'static str, &'static str),
}

/// Immutable, id-indexed product catalog.
#[derive(Debug, Clone)]
pub struct Catalog<'a> {
    products: Vec<Product<'a>>,
    index: FxHashMap<ProductId, usize>,
    currency: &'static Currency,
}

impl<'a> Catalog<'a> {
    /// Create a catalog from the given products, preserving their order.
    ///
    /// # Errors
    ///
    /// Returns a `CatalogError` on duplicate ids, a negative price or a currency mismatch.
    pub fn with_products(
        products: impl Into<Vec<Product<'a>>>,
        currency: &'static Currency,
    ) -> Result<Self, CatalogError> {
        let products = products.into();
        let mut index = FxHashMap::default();

        for (i, product) in products.iter().enumerate() {
            let product_currency = product.price.currency();

            if product_currency != currency {
                return Err(CatalogError::CurrencyMismatch(
                    i,
                    product_currency.iso_alpha_code,
                    currency.iso_alpha_code,
                ));
            }

            if product.price.to_minor_units() < 0 {
                return Err(CatalogError::NegativePrice(product.id));
            }

            if index.insert(product.id, i).is_some() {
                return Err(CatalogError::DuplicateProduct(product.id));
            }
        }

        Ok(Catalog {
            products,
            index,
            currency,
        })
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product<'a>> {
        self.index
            .get(&id)
            .and_then(|&idx| self.products.get(idx))
    }

    /// Iterate over the products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product<'a>> {
        self.products.iter()
    }

    /// Get the number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Get the currency of the catalog.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

impl Catalog<'static> {
    /// The built-in storefront catalog.
    ///
    /// # Errors
    ///
    /// Returns a `FixtureError` if the embedded fixture fails to parse.
    pub fn storefront() -> Result<Self, FixtureError> {
        Self::from_yaml_str(STOREFRONT_FIXTURE)
    }
}
