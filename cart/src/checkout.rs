//! Checkout notification payload shared by the checkout page and the
//! notification server.
//!
//! The server accepts whatever the page sends, so every field defaults and
//! `total` / item prices tolerate both numbers and strings.

#[cfg(test)]
#[path = "checkout_test.rs"]
mod checkout_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::item::{CartItem, DEFAULT_ITEM_NAME};
use crate::price::Price;
use crate::view::cart_total;

const DEFAULT_CUSTOMER: &str = "Cliente";

/// Order summary posted to the notification endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutNotice {
    #[serde(default, deserialize_with = "lossy_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lossy_string")]
    pub email: String,
    #[serde(default, deserialize_with = "lossy_string")]
    pub phone: String,
    /// Order total in pesos.
    #[serde(default, deserialize_with = "lossy_pesos")]
    pub total: f64,
    /// `null` or a non-array reads as no items; an unreadable entry reads as
    /// a default item.
    #[serde(default, deserialize_with = "lossy_items")]
    pub items: Vec<NoticeItem>,
}

/// One ordered product as listed in the notification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeItem {
    #[serde(default, deserialize_with = "lossy_string")]
    pub name: String,
    /// Display price, e.g. `"85.000"`.
    #[serde(default, deserialize_with = "lossy_string")]
    pub price: String,
}

impl CheckoutNotice {
    /// Summary of `items` for the given customer.
    #[must_use]
    pub fn from_cart(name: &str, email: &str, phone: &str, items: &[CartItem]) -> Self {
        #[allow(clippy::cast_precision_loss)]
        let total = cart_total(items).minor() as f64 / 100.0;
        Self {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            phone: phone.trim().to_owned(),
            total,
            items: items
                .iter()
                .map(|item| NoticeItem {
                    name: item.display_name().to_owned(),
                    price: item.price.format(),
                })
                .collect(),
        }
    }

    /// Total rounded to whole pesos, as a [`Price`].
    #[must_use]
    pub fn total_price(&self) -> Price {
        #[allow(clippy::cast_possible_truncation)]
        let pesos = if self.total.is_finite() {
            self.total.round() as i64
        } else {
            0
        };
        Price::from_pesos(pesos)
    }

    /// Plain-text message sent to the shop owner.
    #[must_use]
    pub fn message(&self) -> String {
        let mut lines = vec![
            "Nuevo pedido en Cyberduck".to_owned(),
            format!("Nombre: {}", or_default(&self.name, DEFAULT_CUSTOMER)),
            format!("Correo: {}", self.email),
            format!("Celular: {}", self.phone),
            format!("Total: ${}", self.total_price().format()),
            "Productos:".to_owned(),
        ];
        for item in &self.items {
            let name = or_default(&item.name, DEFAULT_ITEM_NAME);
            lines.push(format!("- {name} — {}", item.price));
        }
        lines.join("\n")
    }

    /// Customer name for logs.
    #[must_use]
    pub fn customer(&self) -> &str {
        or_default(&self.name, DEFAULT_CUSTOMER)
    }
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

fn lossy_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lossy_pesos<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or_default(),
        #[allow(clippy::cast_precision_loss)]
        serde_json::Value::String(s) => Price::parse_lenient(&s).minor() as f64 / 100.0,
        _ => 0.0,
    })
}

fn lossy_items<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<NoticeItem>, D::Error> {
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(entries) => entries
            .into_iter()
            .map(|entry| NoticeItem::deserialize(entry).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    })
}
