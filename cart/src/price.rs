//! Colombian peso amounts and es-CO display formatting.
//!
//! Amounts are held as integer minor units (centavos). Display strings such
//! as `"15.500"` are only produced at render time, and parsed back only when
//! reading legacy cart entries or product cards that carry a formatted price.

#[cfg(test)]
#[path = "price_test.rs"]
mod price_test;

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Centavos per peso.
pub const MINOR_PER_UNIT: i64 = 100;

const GROUP_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

/// A peso amount in minor units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Self = Self(0);

    #[must_use]
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Whole pesos; saturates instead of overflowing.
    #[must_use]
    pub const fn from_pesos(pesos: i64) -> Self {
        Self(pesos.saturating_mul(MINOR_PER_UNIT))
    }

    /// Whole pesos, or `None` when the amount in centavos does not fit.
    #[must_use]
    pub const fn checked_from_pesos(pesos: i64) -> Option<Self> {
        match pesos.checked_mul(MINOR_PER_UNIT) {
            Some(minor) => Some(Self(minor)),
            None => None,
        }
    }

    #[must_use]
    pub const fn minor(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Amount rounded half-away-from-zero to whole pesos.
    #[must_use]
    pub const fn round_to_pesos(self) -> i64 {
        let units = self.0 / MINOR_PER_UNIT;
        let rest = self.0 % MINOR_PER_UNIT;
        if rest >= MINOR_PER_UNIT / 2 {
            units + 1
        } else if rest <= -MINOR_PER_UNIT / 2 {
            units - 1
        } else {
            units
        }
    }

    /// Parse an es-CO display string (`"10.000"`, `"12,5"`).
    ///
    /// Every `.` is dropped as a thousands separator and the first `,` becomes
    /// the decimal point. The longest leading numeric prefix is then read, so
    /// `"12.000 COP"` parses as 12000. Returns `None` when no digits lead the
    /// string or the amount does not fit.
    #[must_use]
    pub fn parse_display(raw: &str) -> Option<Self> {
        let normalized = raw
            .replace(GROUP_SEPARATOR, "")
            .replacen(DECIMAL_SEPARATOR, ".", 1);
        parse_decimal_prefix(normalized.trim_start())
    }

    /// Like [`Price::parse_display`], with un-parseable input counted as zero.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        Self::parse_display(raw).unwrap_or_default()
    }

    /// Format with es-CO grouping: `15500` pesos renders as `"15.500"`,
    /// `10.50` as `"10,5"`.
    #[must_use]
    pub fn format(self) -> String {
        let abs = self.0.unsigned_abs();
        let units = abs / MINOR_PER_UNIT.unsigned_abs();
        let cents = abs % MINOR_PER_UNIT.unsigned_abs();

        let mut out = String::new();
        if self.0 < 0 {
            out.push('-');
        }
        out.push_str(&group_thousands(units));
        if cents != 0 {
            out.push(DECIMAL_SEPARATOR);
            out.push_str(format!("{cents:02}").trim_end_matches('0'));
        }
        out
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.0)
    }
}

/// Stored prices are minor-unit integers; entries written by the old
/// storefront script carry the es-CO display string instead.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredPrice {
    Minor(i64),
    Display(String),
    Other(serde_json::Value),
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match StoredPrice::deserialize(deserializer)? {
            StoredPrice::Minor(minor) => Self(minor),
            StoredPrice::Display(raw) => Self::parse_lenient(&raw),
            StoredPrice::Other(_) => Self::ZERO,
        })
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Read `[sign] digits [. digits]` from the start of `s` into minor units,
/// rounding the fraction half-up at the third decimal.
fn parse_decimal_prefix(s: &str) -> Option<Price> {
    let bytes = s.as_bytes();
    let mut pos = 0;
    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let mut units: i64 = 0;
    let mut saw_digit = false;
    while let Some(&b) = bytes.get(pos) {
        if !b.is_ascii_digit() {
            break;
        }
        units = units.checked_mul(10)?.checked_add(i64::from(b - b'0'))?;
        saw_digit = true;
        pos += 1;
    }

    let mut fraction = [0_u8; 3];
    if bytes.get(pos) == Some(&b'.') {
        pos += 1;
        let mut idx = 0;
        while let Some(&b) = bytes.get(pos) {
            if !b.is_ascii_digit() {
                break;
            }
            if idx < fraction.len() {
                fraction[idx] = b - b'0';
            }
            idx += 1;
            saw_digit = true;
            pos += 1;
        }
    }

    if !saw_digit {
        return None;
    }

    let mut cents = i64::from(fraction[0]) * 10 + i64::from(fraction[1]);
    if fraction[2] >= 5 {
        cents += 1;
    }
    let minor = units.checked_mul(MINOR_PER_UNIT)?.checked_add(cents)?;
    Some(Price(if negative { -minor } else { minor }))
}
