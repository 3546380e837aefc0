//! Cart
//!
//! The cart owns an ordered list of line items, at most one per product id.
//! Mutations never fail: unknown ids and out-of-range quantities are ignored,
//! leaving the cart exactly as it was.

use std::num::NonZeroU32;

use rusty_money::{Money, iso::Currency};
use tracing::debug;

use crate::{
    pricing::{TotalPriceError, line_total, total_price},
    products::{Product, ProductId},
};

/// A product in the cart together with how many of it were ordered.
#[derive(Clone, Debug, PartialEq)]
pub struct LineItem<'a> {
    product: Product<'a>,
    quantity: NonZeroU32,
}

impl<'a> LineItem<'a> {
    /// Returns the product snapshot taken when the line item was created.
    pub fn product(&self) -> &Product<'a> {
        &self.product
    }

    /// Returns the product id of the line item.
    pub fn id(&self) -> ProductId {
        self.product.id
    }

    /// Returns the quantity, always at least one.
    pub fn quantity(&self) -> NonZeroU32 {
        self.quantity
    }

    /// Returns `price × quantity`.
    ///
    /// # Errors
    ///
    /// Returns a [`TotalPriceError`] if the line total overflows.
    pub fn total(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        line_total(self)
    }
}

/// Shopping cart
#[derive(Clone, Debug)]
pub struct Cart<'a> {
    items: Vec<LineItem<'a>>,
    currency: &'static Currency,
}

impl<'a> Cart<'a> {
    /// Create a new, empty cart.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            items: Vec::new(),
            currency,
        }
    }

    /// Add one unit of `product` to the cart.
    ///
    /// A product already in the cart has its quantity incremented; the
    /// snapshot stored on first add is kept as-is. Products priced in a
    /// currency other than the cart's are ignored.
    pub fn add(&mut self, product: &Product<'a>) {
        let product_currency = product.price.currency();

        if product_currency != self.currency {
            debug!(
                product = %product.id,
                currency = product_currency.iso_alpha_code,
                cart_currency = self.currency.iso_alpha_code,
                "add ignored; currency mismatch"
            );

            return;
        }

        if let Some(item) = self.item_mut(product.id) {
            item.quantity = item.quantity.saturating_add(1);

            debug!(product = %product.id, quantity = item.quantity.get(), "incremented cart item");

            return;
        }

        self.items.push(LineItem {
            product: product.clone(),
            quantity: NonZeroU32::MIN,
        });

        debug!(product = %product.id, "added cart item");
    }

    /// Remove the line item for `id`, if present.
    pub fn remove(&mut self, id: ProductId) {
        let before = self.items.len();

        self.items.retain(|item| item.id() != id);

        if self.items.len() == before {
            debug!(product = %id, "remove ignored; product not in cart");
        } else {
            debug!(product = %id, "removed cart item");
        }
    }

    /// Set the quantity of the line item for `id`.
    ///
    /// Quantities below one, or too large to represent, are ignored.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) {
        let Some(quantity) = u32::try_from(quantity).ok().and_then(NonZeroU32::new) else {
            debug!(product = %id, quantity, "quantity update rejected");

            return;
        };

        match self.item_mut(id) {
            Some(item) => {
                item.quantity = quantity;

                debug!(product = %id, quantity = quantity.get(), "updated cart item quantity");
            }
            None => debug!(product = %id, "quantity update ignored; product not in cart"),
        }
    }

    /// Calculate the total of the cart, `Σ price × quantity`.
    ///
    /// # Errors
    ///
    /// Returns a `TotalPriceError` if a line total overflows.
    pub fn total(&self) -> Result<Money<'a, Currency>, TotalPriceError> {
        total_price(&self.items, self.currency)
    }

    /// Number of distinct line items.
    #[must_use]
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities across all line items.
    #[must_use]
    pub fn units(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    /// Get the line item for `id`.
    pub fn get(&self, id: ProductId) -> Option<&LineItem<'a>> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Iterate over the line items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem<'a>> {
        self.items.iter()
    }

    /// Check if the cart is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    fn item_mut(&mut self, id: ProductId) -> Option<&mut LineItem<'a>> {
        self.items.iter_mut().find(|item| item.id() == id)
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, USD};
    use testresult::TestResult;

    use super::*;

    fn headphones<'a>() -> Product<'a> {
        Product::new(1, "Wireless Headphones", Money::from_minor(8999, USD))
    }

    fn stand<'a>() -> Product<'a> {
        Product::new(2, "Smartphone Stand", Money::from_minor(1999, USD))
    }

    fn quantities(cart: &Cart<'_>) -> Vec<(u32, u32)> {
        cart.iter()
            .map(|item| (item.id().get(), item.quantity().get()))
            .collect()
    }

    #[test]
    fn new_cart_is_empty() {
        let cart = Cart::new(GBP);

        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.currency(), GBP);
    }

    #[test]
    fn add_appends_with_quantity_one() {
        let mut cart = Cart::new(USD);

        cart.add(&headphones());

        assert_eq!(quantities(&cart), vec![(1, 1)]);
    }

    #[test]
    fn repeat_add_increments_instead_of_duplicating() {
        let mut cart = Cart::new(USD);

        cart.add(&headphones());
        cart.add(&headphones());

        assert_eq!(quantities(&cart), vec![(1, 2)]);
    }

    #[test]
    fn repeat_add_keeps_first_snapshot() -> TestResult {
        let mut cart = Cart::new(USD);
        let mut repriced = headphones();
        repriced.name = "Headphones (sale)".to_string();
        repriced.price = Money::from_minor(4999, USD);

        cart.add(&headphones());
        cart.add(&repriced);

        let item = cart.get(ProductId::new(1)).ok_or("expected line item")?;

        assert_eq!(item.product().name, "Wireless Headphones");
        assert_eq!(item.product().price, Money::from_minor(8999, USD));
        assert_eq!(item.quantity().get(), 2);

        Ok(())
    }

    #[test]
    fn add_ignores_product_in_other_currency() -> TestResult {
        let mut cart = Cart::new(USD);
        let tea = Product::new(7, "Tea", Money::from_minor(350, GBP));

        cart.add(&tea);

        assert!(cart.is_empty());
        assert_eq!(cart.total()?, Money::from_minor(0, USD));

        cart.add(&headphones());
        cart.add(&tea);

        assert_eq!(quantities(&cart), vec![(1, 1)]);
        assert_eq!(cart.total()?, Money::from_minor(8999, USD));

        Ok(())
    }

    #[test]
    fn repeat_add_saturates_at_max() -> TestResult {
        let mut cart = Cart::new(USD);
        cart.add(&stand());
        cart.update_quantity(ProductId::new(2), i64::from(u32::MAX));

        cart.add(&stand());

        let item = cart.get(ProductId::new(2)).ok_or("expected line item")?;

        assert_eq!(item.quantity().get(), u32::MAX);
        assert_eq!(cart.count(), 1);

        Ok(())
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut cart = Cart::new(USD);

        cart.add(&stand());
        cart.add(&headphones());
        cart.add(&stand());

        assert_eq!(quantities(&cart), vec![(2, 2), (1, 1)]);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut cart = Cart::new(USD);
        cart.add(&headphones());
        cart.add(&stand());

        cart.remove(ProductId::new(2));
        let after_first = quantities(&cart);

        cart.remove(ProductId::new(2));

        assert_eq!(quantities(&cart), after_first);
        assert_eq!(after_first, vec![(1, 1)]);
    }

    #[test]
    fn remove_missing_id_is_noop() {
        let mut cart = Cart::new(USD);
        cart.add(&headphones());

        cart.remove(ProductId::new(99));

        assert_eq!(quantities(&cart), vec![(1, 1)]);
    }

    #[test]
    fn update_quantity_sets_exact_value() {
        let mut cart = Cart::new(USD);
        cart.add(&headphones());

        cart.update_quantity(ProductId::new(1), 3);

        assert_eq!(quantities(&cart), vec![(1, 3)]);
    }

    #[test]
    fn update_quantity_below_one_is_rejected() {
        let mut cart = Cart::new(USD);
        cart.add(&headphones());
        cart.add(&headphones());

        cart.update_quantity(ProductId::new(1), 0);
        cart.update_quantity(ProductId::new(1), -5);

        assert_eq!(quantities(&cart), vec![(1, 2)]);
    }

    #[test]
    fn update_quantity_too_large_is_rejected() {
        let mut cart = Cart::new(USD);
        cart.add(&headphones());

        cart.update_quantity(ProductId::new(1), i64::from(u32::MAX) + 1);

        assert_eq!(quantities(&cart), vec![(1, 1)]);
    }

    #[test]
    fn update_quantity_missing_id_is_noop() {
        let mut cart = Cart::new(USD);
        cart.add(&headphones());

        cart.update_quantity(ProductId::new(7), 4);

        assert_eq!(quantities(&cart), vec![(1, 1)]);
    }

    #[test]
    fn total_sums_price_times_quantity() -> TestResult {
        let mut cart = Cart::new(USD);
        cart.add(&headphones());
        cart.add(&stand());
        cart.add(&stand());

        assert_eq!(cart.total()?, Money::from_minor(12997, USD));

        Ok(())
    }

    #[test]
    fn total_of_empty_cart_is_zero() -> TestResult {
        let cart = Cart::new(USD);

        assert_eq!(cart.total()?, Money::from_minor(0, USD));

        Ok(())
    }

    #[test]
    fn count_is_distinct_items_and_units_is_quantity_sum() {
        let mut cart = Cart::new(USD);
        cart.add(&headphones());
        cart.add(&headphones());
        cart.add(&stand());

        assert_eq!(cart.count(), 2);
        assert_eq!(cart.units(), 3);
    }

    #[test]
    fn clone_keeps_previous_snapshot() {
        let mut cart = Cart::new(USD);
        cart.add(&headphones());

        let snapshot = cart.clone();
        cart.add(&stand());

        assert_eq!(quantities(&snapshot), vec![(1, 1)]);
        assert_eq!(quantities(&cart), vec![(1, 1), (2, 1)]);
    }

    #[test]
    fn line_item_total() -> TestResult {
        let mut cart = Cart::new(USD);
        cart.add(&stand());
        cart.update_quantity(ProductId::new(2), 5);

        let item = cart.get(ProductId::new(2)).ok_or("expected line item")?;

        assert_eq!(item.total()?, Money::from_minor(9995, USD));

        Ok(())
    }
}
