//! Receipt

use std::{io, ops::Range};

use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{cart::Cart, catalog::Catalog, pricing::TotalPriceError};

/// Errors that can occur when building or writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Error calculating the cart or a line total.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// One priced line on a receipt.
#[derive(Debug, Clone)]
pub struct ReceiptLine<'a> {
    /// Product name as stored in the cart
    pub name: String,

    /// Price of a single unit
    pub unit_price: Money<'a, Currency>,

    /// Units ordered
    pub quantity: u32,

    /// `unit_price × quantity`
    pub line_total: Money<'a, Currency>,
}

/// Snapshot of a cart's line items and totals at the moment it was taken.
#[derive(Debug, Clone)]
pub struct Receipt<'a> {
    /// Line items in cart order
    lines: Vec<ReceiptLine<'a>>,

    /// Amount payable for every line item
    total: Money<'a, Currency>,

    /// Sum of quantities
    units: u64,
}

impl<'a> Receipt<'a> {
    /// Build a receipt from the current state of `cart`.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError`] if a line total or the cart total cannot be calculated.
    pub fn from_cart(cart: &Cart<'a>) -> Result<Self, ReceiptError> {
        let lines = cart
            .iter()
            .map(|item| -> Result<_, ReceiptError> {
                Ok(ReceiptLine {
                    name: item.product().name.clone(),
                    unit_price: item.product().price,
                    quantity: item.quantity().get(),
                    line_total: item.total()?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Receipt {
            lines,
            total: cart.total()?,
            units: cart.units(),
        })
    }

    /// Line items in cart order
    #[must_use]
    pub fn lines(&self) -> &[ReceiptLine<'a>] {
        &self.lines
    }

    /// Amount payable for every line item
    #[must_use]
    pub fn total(&self) -> Money<'a, Currency> {
        self.total
    }

    /// Number of distinct line items
    #[must_use]
    pub fn count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities
    #[must_use]
    pub fn units(&self) -> u64 {
        self.units
    }

    /// Write the receipt as a table of line items followed by the totals.
    ///
    /// # Errors
    ///
    /// Returns [`ReceiptError::IO`] if writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        if self.lines.is_empty() {
            return writeln!(out, "Your cart is empty").map_err(|_err| ReceiptError::IO);
        }

        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Unit Price", "Qty", "Line Total"]);

        for (idx, line) in self.lines.iter().enumerate() {
            builder.push_record([
                format!("#{:<3}", idx + 1),
                line.name.clone(),
                format!("{}", line.unit_price),
                line.quantity.to_string(),
                format!("{}", line.line_total),
            ]);
        }

        write_table(&mut out, builder, Columns::new(2..5))?;

        write_summary(
            &mut out,
            &[
                ("Items:", self.count().to_string()),
                ("Units:", self.units.to_string()),
                ("Total:", self.total.to_string()),
            ],
        )
    }
}

/// Write the catalog as a table of products.
///
/// # Errors
///
/// Returns [`ReceiptError::IO`] if writing fails.
pub fn write_catalog(mut out: impl io::Write, catalog: &Catalog<'_>) -> Result<(), ReceiptError> {
    let mut builder = Builder::default();

    builder.push_record(["Id", "Product", "Price", "Description"]);

    for product in catalog.iter() {
        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            format!("{}", product.price),
            product.description.clone(),
        ]);
    }

    write_table(&mut out, builder, Columns::new(2..3))
}

fn write_table(
    out: &mut impl io::Write,
    builder: Builder,
    money_columns: Columns<Range<usize>>,
) -> Result<(), ReceiptError> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(money_columns, Alignment::right());

    writeln!(out, "\n{table}").map_err(|_err| ReceiptError::IO)
}

/// Right-aligned `label  value` rows under the table. The last row, the
/// total, is printed in bold.
fn write_summary(out: &mut impl io::Write, rows: &[(&str, String)]) -> Result<(), ReceiptError> {
    let label_width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let value_width = rows.iter().map(|(_, value)| value.len()).max().unwrap_or(0);

    for (i, (label, value)) in rows.iter().enumerate() {
        let line = format!(" {label:>label_width$}  {value:>value_width$}  ");

        if i + 1 == rows.len() {
            writeln!(out, "\x1b[1m{line}\x1b[0m")
        } else {
            writeln!(out, "{line}")
        }
        .map_err(|_err| ReceiptError::IO)?;
    }

    writeln!(out).map_err(|_err| ReceiptError::IO)
}
