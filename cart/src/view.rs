//! Pure projection of the cart into what the floating cart widget shows.
//!
//! The widget repaints from a [`CartView`] on mount and after every change
//! notification; nothing here touches the DOM.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use crate::item::{CartItem, ItemId};
use crate::price::Price;

/// Shown in the item list when the cart is empty.
pub const EMPTY_MESSAGE: &str = "No hay productos en el carrito";
/// Where the checkout link points on static pages.
pub const DEFAULT_CHECKOUT_HREF: &str = "./checkout.html";
/// Placeholder for a zero total.
pub const NO_TOTAL: &str = "—";

/// Class toggled on the cart button after each change.
pub const PULSE_CLASS: &str = "is-pulse";
pub const PULSE_DURATION_MS: u32 = 480;

/// Element ids of the widget's DOM surface.
pub mod dom_ids {
    pub const CART_BUTTON: &str = "cartButton";
    pub const CART_COUNT: &str = "cartCount";
    pub const CART_DROPDOWN: &str = "cartDropdown";
    pub const CART_ITEMS: &str = "cartItems";
    pub const CART_TOTAL: &str = "cartTotal";
    pub const CART_CHECKOUT: &str = "cartCheckout";
    pub const CART_CLEAR: &str = "cartClear";
}

/// One row of the item list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartLine {
    pub id: ItemId,
    pub name: String,
    pub price_label: String,
    pub thumbnail_style: Option<String>,
}

/// State of the checkout link.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutLink {
    pub enabled: bool,
    pub href: String,
}

impl CheckoutLink {
    #[must_use]
    pub fn class(&self) -> &'static str {
        if self.enabled {
            "btn btn--primary"
        } else {
            "btn btn--primary is-disabled"
        }
    }

    /// `aria-disabled` value; `None` removes the attribute.
    #[must_use]
    pub fn aria_disabled(&self) -> Option<&'static str> {
        if self.enabled { None } else { Some("true") }
    }
}

/// Everything the widget renders for one cart state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CartView {
    /// Entry count as shown in the badge.
    pub badge: String,
    pub lines: Vec<CartLine>,
    pub total: Price,
    pub total_label: String,
    pub checkout: CheckoutLink,
}

impl CartView {
    /// Project `items`; `checkout_href` is used only when the cart has items.
    #[must_use]
    pub fn project(items: &[CartItem], checkout_href: &str) -> Self {
        let lines = items
            .iter()
            .map(|item| CartLine {
                id: item.id.clone(),
                name: item.display_name().to_owned(),
                price_label: item.price.format(),
                thumbnail_style: item.thumbnail_style(),
            })
            .collect::<Vec<_>>();
        let total = cart_total(items);
        let enabled = !items.is_empty();
        let href = if enabled {
            checkout_href.to_owned()
        } else {
            "#".to_owned()
        };

        Self {
            badge: items.len().to_string(),
            lines,
            total,
            total_label: total_label(total),
            checkout: CheckoutLink { enabled, href },
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Empty-state text for the item list, if the cart is empty.
    #[must_use]
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_MESSAGE)
    }
}

impl Default for CartView {
    fn default() -> Self {
        Self::project(&[], DEFAULT_CHECKOUT_HREF)
    }
}

/// Sum of all entry prices.
#[must_use]
pub fn cart_total(items: &[CartItem]) -> Price {
    items.iter().map(|item| item.price).sum()
}

/// `Total: 15.500`, or `Total: —` when the total is zero.
#[must_use]
pub fn total_label(total: Price) -> String {
    if total.is_zero() {
        format!("Total: {NO_TOTAL}")
    } else {
        format!("Total: {}", total.format())
    }
}
