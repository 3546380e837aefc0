//! Products

use std::{fmt, num::ParseIntError, str::FromStr};

use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

/// Catalog-assigned product identifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u32);

impl ProductId {
    /// Creates a new product id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl FromStr for ProductId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(Self)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product<'a> {
    /// Product id
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Product price
    pub price: Money<'a, Currency>,

    /// Product image URL
    pub image: String,

    /// Product description
    pub description: String,
}

impl<'a> Product<'a> {
    /// Creates a product with no image or description.
    pub fn new(id: u32, name: impl Into<String>, price: Money<'a, Currency>) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            price,
            image: String::new(),
            description: String::new(),
        }
    }
}
