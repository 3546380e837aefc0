//! Navigation chrome
//!
//! Visibility of the cart sidebar and the mobile menu. Independent of the
//! cart contents apart from the header badge.

use tracing::debug;

use crate::cart::Cart;

/// Viewport width, in logical pixels, at which the desktop navigation takes over.
pub const MOBILE_BREAKPOINT: u32 = 768;

/// Open/closed state of the cart sidebar and the mobile menu.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    cart_open: bool,
    mobile_menu_open: bool,
}

impl NavState {
    /// Both panels closed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the cart sidebar is showing.
    pub fn cart_open(&self) -> bool {
        self.cart_open
    }

    /// Whether the mobile menu is showing.
    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Show the cart sidebar if hidden, hide it if shown.
    pub fn toggle_cart(&mut self) {
        self.cart_open = !self.cart_open;
    }

    /// Show the mobile menu if hidden, hide it if shown.
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// React to a viewport resize: at desktop widths the mobile menu closes.
    pub fn handle_resize(&mut self, width: u32) {
        if width >= MOBILE_BREAKPOINT && self.mobile_menu_open {
            self.mobile_menu_open = false;

            debug!(width, "closed mobile menu on resize");
        }
    }
}

/// Header badge value: the number of distinct line items, hidden for an empty cart.
pub fn badge(cart: &Cart<'_>) -> Option<usize> {
    if cart.is_empty() {
        None
    } else {
        Some(cart.count())
    }
}
