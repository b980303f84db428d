//! Product hand-off from a catalog card to the product page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Clicking a catalog card stores what the card shows under
//! [`SELECTED_PRODUCT_KEY`] and navigates to the product page, which reads it
//! back and offers to add it to the cart. Prices travel as the display string
//! printed on the card and are parsed only when the entry is created.

#[cfg(test)]
#[path = "product_test.rs"]
mod product_test;

use serde::{Deserialize, Serialize};

use crate::item::{CartItem, DEFAULT_ITEM_NAME};
use crate::price::Price;
use crate::storage::{KeyValueStore, StorageAdapter, StorageError};

/// Storage key holding the selected product as a JSON object.
pub const SELECTED_PRODUCT_KEY: &str = "cyberduck:selectedProduct";

const UNKNOWN_PRICE: &str = "—";

/// What a catalog card shows about one product.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSelection {
    pub name: String,
    /// Price as printed on the card, e.g. `"85.000"`.
    pub price: String,
    #[serde(default)]
    pub desc: String,
    /// CSS `background-image` value of the card image, or empty.
    #[serde(default)]
    pub image: String,
}

impl ProductSelection {
    /// Build from card fields, substituting defaults for blank ones.
    #[must_use]
    pub fn from_card(
        name: Option<&str>,
        price: Option<&str>,
        desc: Option<&str>,
        image: Option<&str>,
    ) -> Self {
        Self {
            name: non_blank(name).unwrap_or(DEFAULT_ITEM_NAME).to_owned(),
            price: non_blank(price).unwrap_or(UNKNOWN_PRICE).to_owned(),
            desc: non_blank(desc).unwrap_or_default().to_owned(),
            image: non_blank(image)
                .filter(|v| *v != "none")
                .unwrap_or_default()
                .to_owned(),
        }
    }

    /// Parsed card price; zero when the card shows no number.
    #[must_use]
    pub fn parsed_price(&self) -> Price {
        Price::parse_lenient(&self.price)
    }

    /// New cart entry for this product.
    #[must_use]
    pub fn to_cart_item(&self) -> CartItem {
        CartItem::new(self.name.clone(), self.parsed_price())
            .with_image(self.image.clone())
            .with_desc(self.desc.clone())
    }
}

impl<S: KeyValueStore> StorageAdapter<S> {
    /// Remember `selection` for the product page.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the selection could not be stored.
    pub fn save_selection(&self, selection: &ProductSelection) -> Result<(), StorageError> {
        self.write_json(SELECTED_PRODUCT_KEY, selection)
    }

    /// The last stored selection, if any.
    pub fn load_selection(&self) -> Option<ProductSelection> {
        self.read_json(SELECTED_PRODUCT_KEY)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
