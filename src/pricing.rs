//! Pricing

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::cart::LineItem;

/// Errors that can occur while calculating total price.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// A line total did not fit in minor units.
    #[error("line total for product {0} overflowed")]
    Overflow(u32),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates `price × quantity` for a single line item.
///
/// # Errors
///
/// Returns [`TotalPriceError::Overflow`] if the product does not fit in minor units.
pub fn line_total<'a>(item: &LineItem<'a>) -> Result<Money<'a, Currency>, TotalPriceError> {
    let price = item.product().price;

    let minor = price
        .to_minor_units()
        .checked_mul(i64::from(item.quantity().get()))
        .ok_or(TotalPriceError::Overflow(item.id().get()))?;

    Ok(Money::from_minor(minor, price.currency()))
}

/// Calculates the total price of a list of line items, starting from zero in `currency`.
///
/// # Errors
///
/// - [`TotalPriceError::Overflow`]: A line total overflowed.
/// - [`TotalPriceError::Money`]: Wrapped money arithmetic or currency mismatch error.
pub fn total_price<'a>(
    items: &[LineItem<'a>],
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, TotalPriceError> {
    let total = items.iter().try_fold(
        Money::from_minor(0, currency),
        |acc, item| -> Result<_, TotalPriceError> { Ok(acc.add(line_total(item)?)?) },
    )?;

    Ok(total)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, USD};
    use testresult::TestResult;

    use crate::{
        cart::Cart,
        products::{Product, ProductId},
    };

    use super::*;

    #[test]
    fn line_total_multiplies_by_quantity() -> TestResult {
        let mut cart = Cart::new(USD);
        let stand = Product::new(2, "Smartphone Stand", Money::from_minor(1999, USD));

        cart.add(&stand);
        cart.add(&stand);

        let item = cart.iter().next().ok_or("expected a line item")?;

        assert_eq!(line_total(item)?, Money::from_minor(3998, USD));

        Ok(())
    }

    #[test]
    fn line_total_overflow_is_reported() -> TestResult {
        let mut cart = Cart::new(USD);
        cart.add(&Product::new(9, "Yacht", Money::from_minor(1_000_000_000_000, USD)));
        cart.update_quantity(ProductId::new(9), i64::from(u32::MAX));

        let item = cart.iter().next().ok_or("expected a line item")?;

        assert_eq!(line_total(item), Err(TotalPriceError::Overflow(9)));

        Ok(())
    }

    #[test]
    fn total_price_sums_line_totals() -> TestResult {
        let mut cart = Cart::new(USD);
        cart.add(&Product::new(1, "Wireless Headphones", Money::from_minor(8999, USD)));
        cart.add(&Product::new(2, "Smartphone Stand", Money::from_minor(1999, USD)));
        cart.add(&Product::new(2, "Smartphone Stand", Money::from_minor(1999, USD)));

        let items: Vec<_> = cart.iter().cloned().collect();

        assert_eq!(total_price(&items, USD)?, Money::from_minor(12997, USD));

        Ok(())
    }

    #[test]
    fn total_price_empty_is_zero_in_given_currency() -> TestResult {
        let items: [LineItem<'static>; 0] = [];

        assert_eq!(total_price(&items, GBP)?, Money::from_minor(0, GBP));

        Ok(())
    }

    #[test]
    fn total_price_currency_mismatch() {
        let mut dollars = Cart::new(USD);
        dollars.add(&Product::new(1, "Headphones", Money::from_minor(100, USD)));

        let mut pounds = Cart::new(GBP);
        pounds.add(&Product::new(2, "Tea", Money::from_minor(100, GBP)));

        let items: Vec<_> = dollars.iter().chain(pounds.iter()).cloned().collect();

        assert!(matches!(
            total_price(&items, USD),
            Err(TotalPriceError::Money(MoneyError::CurrencyMismatch { .. }))
        ));
    }
}
