//! Cart commands
//!
//! A small textual form of the cart mutations, used by the command line:
//! `add:<id>`, `remove:<id>` and `qty:<id>=<quantity>`.

use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{cart::Cart, catalog::Catalog, products::ProductId};

/// Errors raised while parsing or applying a cart command.
#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    /// The command text was not understood.
    #[error("Invalid cart command '{0}': expected add:<id>, remove:<id> or qty:<id>=<n>")]
    Parse(String),

    /// `add` referenced a product the catalog does not have.
    #[error("Product {0} is not in the catalog")]
    UnknownProduct(ProductId),
}

/// One cart mutation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CartCommand {
    /// Add one unit of a catalog product.
    Add(ProductId),

    /// Remove a product's line item.
    Remove(ProductId),

    /// Set a line item's quantity.
    Quantity(ProductId, i64),
}

impl CartCommand {
    /// Apply the command to `cart`, resolving products through `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::UnknownProduct`] if an `add` names a product
    /// missing from the catalog. `remove` and `qty` never fail.
    pub fn apply<'a>(self, cart: &mut Cart<'a>, catalog: &Catalog<'a>) -> Result<(), CommandError> {
        match self {
            CartCommand::Add(id) => {
                let product = catalog.get(id).ok_or(CommandError::UnknownProduct(id))?;

                cart.add(product);
            }
            CartCommand::Remove(id) => cart.remove(id),
            CartCommand::Quantity(id, quantity) => cart.update_quantity(id, quantity),
        }

        Ok(())
    }
}

impl FromStr for CartCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || CommandError::Parse(s.to_string());

        let (verb, args) = s.trim().split_once(':').ok_or_else(parse_err)?;

        match verb {
            "add" => Ok(CartCommand::Add(args.parse().map_err(|_err| parse_err())?)),
            "remove" => Ok(CartCommand::Remove(args.parse().map_err(|_err| parse_err())?)),
            "qty" => {
                let (id, quantity) = args.split_once('=').ok_or_else(parse_err)?;

                Ok(CartCommand::Quantity(
                    id.parse().map_err(|_err| parse_err())?,
                    quantity.trim().parse().map_err(|_err| parse_err())?,
                ))
            }
            _ => Err(parse_err()),
        }
    }
}

impl fmt::Display for CartCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartCommand::Add(id) => write!(f, "add:{id}"),
            CartCommand::Remove(id) => write!(f, "remove:{id}"),
            CartCommand::Quantity(id, quantity) => write!(f, "qty:{id}={quantity}"),
        }
    }
}
