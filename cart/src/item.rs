//! Cart entry schema as persisted under the cart storage key.

#[cfg(test)]
#[path = "item_test.rs"]
mod item_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::price::Price;

/// Namespace for ids derived from legacy entries.
const LEGACY_NAMESPACE: Uuid = Uuid::from_u128(0x5c0f_d0c4_7a1e_4e0b_9c3d_8b2a_6f41_c0de);

/// Label shown for entries persisted without a name.
pub const DEFAULT_ITEM_NAME: &str = "Producto";

/// Stable identifier of one cart entry.
///
/// Duplicated products are distinct entries, so removal goes by id rather
/// than by position. Entries written by the old storefront script have no id;
/// they deserialize to the unassigned (empty) id and the storage adapter
/// assigns [`ItemId::for_legacy`] on read.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Fresh random id (UUID v4).
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Id for an entry persisted without one, derived from its position and
    /// content (UUID v5), so repeated reads agree even when the assigned id
    /// could not be written back.
    #[must_use]
    pub fn for_legacy(index: usize, item: &CartItem) -> Self {
        let key = format!(
            "{index}\u{1f}{}\u{1f}{}\u{1f}{}\u{1f}{}",
            item.name,
            item.price.minor(),
            item.image,
            item.desc
        );
        Self(Uuid::new_v5(&LEGACY_NAMESPACE, key.as_bytes()).to_string())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_unassigned(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry in the cart.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(default)]
    pub id: ItemId,
    /// Display label.
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(default)]
    pub price: Price,
    /// CSS `background-image` value (`url(...)`) or a bare image URL.
    #[serde(default, deserialize_with = "nullable_string")]
    pub image: String,
    #[serde(
        default,
        deserialize_with = "nullable_string",
        skip_serializing_if = "String::is_empty"
    )]
    pub desc: String,
}

impl CartItem {
    /// New entry with a freshly generated id.
    #[must_use]
    pub fn new(name: impl Into<String>, price: Price) -> Self {
        Self {
            id: ItemId::generate(),
            name: name.into(),
            price,
            image: String::new(),
            desc: String::new(),
        }
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    #[must_use]
    pub fn with_desc(mut self, desc: impl Into<String>) -> Self {
        self.desc = desc.into();
        self
    }

    /// Name to render, falling back to [`DEFAULT_ITEM_NAME`].
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            DEFAULT_ITEM_NAME
        } else {
            &self.name
        }
    }

    /// Inline `background-image` value for the thumbnail, if the entry has an
    /// image. Bare URLs are wrapped in `url(...)`.
    #[must_use]
    pub fn thumbnail_style(&self) -> Option<String> {
        let image = self.image.trim();
        if image.is_empty() {
            return None;
        }
        let value = if image.starts_with("url(") {
            image.to_owned()
        } else {
            format!("url({image})")
        };
        Some(format!("background-image: {value}"))
    }
}

fn nullable_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
