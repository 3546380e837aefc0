//! Fixtures
//!
//! Catalogs are described in YAML:
//!
//! ```yaml
//! currency: USD
//! products:
//!   - id: 1
//!     name: Wireless Headphones
//!     price: "89.99 USD"
//!     image: https://placehold.co/400x400?text=Headphones
//!     description: High-quality wireless headphones.
//! ```

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    products::Product,
};

pub mod products;

pub use products::{ProductFixture, parse_currency, parse_price};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Catalog construction error
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Catalog Fixture
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// ISO currency code every product must be priced in
    pub currency: String,

    /// Products in display order
    pub products: Vec<ProductFixture>,
}

impl TryFrom<CatalogFixture> for Catalog<'static> {
    type Error = FixtureError;

    fn try_from(fixture: CatalogFixture) -> Result<Self, Self::Error> {
        let currency = parse_currency(&fixture.currency)?;

        let products = fixture
            .products
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Catalog::with_products(products, currency)?)
    }
}

impl Catalog<'static> {
    /// Load a catalog from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed, a price is invalid, or
    /// the products do not form a valid catalog.
    pub fn from_yaml_str(contents: &str) -> Result<Self, FixtureError> {
        let fixture: CatalogFixture = serde_norway::from_str(contents)?;

        fixture.try_into()
    }

    /// Load a catalog from a YAML fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or for any reason listed
    /// on [`Catalog::from_yaml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml_str(&contents)
    }
}
