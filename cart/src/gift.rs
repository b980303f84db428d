//! Gift-card purchase: validate the requested value and build the cart entry.

#[cfg(test)]
#[path = "gift_test.rs"]
mod gift_test;

use crate::item::CartItem;
use crate::price::Price;

/// Smallest accepted gift-card value, in pesos.
pub const MINIMUM_PESOS: i64 = 10_000;

pub const GIFT_CARD_IMAGE: &str = "url(./imgs/gift.png)";
pub const GIFT_CARD_DESC: &str = "Tarjeta de regalo con pequeño regalo sorpresa incluido.";

/// Alert text for a rejected value.
pub const INVALID_VALUE_MESSAGE: &str = "Por favor ingresa un valor válido (mínimo $10.000 COP)";
/// Alert text after the card was added.
pub const ADDED_MESSAGE: &str = "Tarjeta de regalo añadida al carrito!";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GiftCardError {
    #[error("gift card value is not a number")]
    NotANumber,
    #[error("gift card value {value} is below the minimum of {minimum}")]
    BelowMinimum { value: i64, minimum: i64 },
    /// The value cannot be represented as a price.
    #[error("gift card value {value} is too large")]
    TooLarge { value: String },
}

impl GiftCardError {
    /// Text shown to the customer; every rejection reads the same.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        INVALID_VALUE_MESSAGE
    }
}

/// A validated gift-card value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GiftCard {
    pesos: i64,
}

impl GiftCard {
    /// # Errors
    ///
    /// Returns [`GiftCardError::BelowMinimum`] for values under
    /// [`MINIMUM_PESOS`], or [`GiftCardError::TooLarge`] when the value in
    /// centavos overflows.
    pub fn new(pesos: i64) -> Result<Self, GiftCardError> {
        if pesos < MINIMUM_PESOS {
            return Err(GiftCardError::BelowMinimum {
                value: pesos,
                minimum: MINIMUM_PESOS,
            });
        }
        if Price::checked_from_pesos(pesos).is_none() {
            return Err(GiftCardError::TooLarge {
                value: pesos.to_string(),
            });
        }
        Ok(Self { pesos })
    }

    /// Validate the raw text of the value input. Only the leading integer is
    /// read, so `"25000.99"` and `"25000 pesos"` both mean 25000.
    ///
    /// # Errors
    ///
    /// Returns [`GiftCardError::NotANumber`] when no integer leads the input,
    /// [`GiftCardError::BelowMinimum`] when it is under the minimum, or
    /// [`GiftCardError::TooLarge`] when it cannot be priced.
    pub fn from_input(raw: &str) -> Result<Self, GiftCardError> {
        let pesos = parse_leading_int(raw)?;
        Self::new(pesos)
    }

    #[must_use]
    pub fn pesos(self) -> i64 {
        self.pesos
    }

    #[must_use]
    pub fn price(self) -> Price {
        // `new` only admits values whose centavo amount fits.
        Price::from_pesos(self.pesos)
    }

    /// Cart entry for this card, e.g. `Tarjeta de Regalo - $25.000 COP`.
    #[must_use]
    pub fn into_item(self) -> CartItem {
        let price = self.price();
        let name = format!("Tarjeta de Regalo - ${} COP", price.format());
        CartItem::new(name, price)
            .with_image(GIFT_CARD_IMAGE)
            .with_desc(GIFT_CARD_DESC)
    }
}

/// `[whitespace] [sign] digits`, ignoring whatever follows.
fn parse_leading_int(raw: &str) -> Result<i64, GiftCardError> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Err(GiftCardError::NotANumber);
    }
    let digits = &rest[..digits_len];
    match digits.parse::<i64>() {
        Ok(value) if negative => Ok(-value),
        Ok(value) => Ok(value),
        Err(_) if negative => Err(GiftCardError::BelowMinimum {
            value: i64::MIN,
            minimum: MINIMUM_PESOS,
        }),
        Err(_) => Err(GiftCardError::TooLarge {
            value: digits.to_owned(),
        }),
    }
}
