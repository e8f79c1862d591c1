//! Type-safe price representation.
//!
//! Prices are stored as integer cents so that totals are exact, and cross the
//! JSON boundary as decimal strings ("19.99"). `rust_decimal` handles parsing
//! and formatting; no floating point is involved anywhere.

use core::fmt;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is negative.
    #[error("price cannot be negative")]
    Negative,
    /// The input is not a valid decimal amount.
    #[error("price is not a valid decimal amount")]
    Invalid,
    /// The amount does not fit in the supported range.
    #[error("price exceeds the supported range")]
    OutOfRange,
}

/// A non-negative monetary amount in integer cents.
///
/// Amounts with more than two decimal places are rounded half-away-from-zero
/// to the nearest cent on construction.
///
/// ## Examples
///
/// ```
/// use paper_lantern_core::Price;
///
/// let price = Price::parse("19.99").unwrap();
/// assert_eq!(price.as_cents(), 1999);
/// assert_eq!(price.to_string(), "19.99");
///
/// assert!(Price::parse("-1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(i64);

impl Price {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Create a price from integer cents.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Negative` if `cents` is negative.
    pub const fn from_cents(cents: i64) -> Result<Self, PriceError> {
        if cents < 0 {
            return Err(PriceError::Negative);
        }
        Ok(Self(cents))
    }

    /// Create a price from a decimal amount in the currency's standard unit.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Negative` for negative amounts and
    /// `PriceError::OutOfRange` if the amount does not fit in cents.
    pub fn from_decimal(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative);
        }

        let cents = (amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            * Decimal::ONE_HUNDRED)
            .to_i64()
            .ok_or(PriceError::OutOfRange)?;

        Ok(Self(cents))
    }

    /// Parse a price from a decimal string such as "19.99".
    ///
    /// # Errors
    ///
    /// Returns `PriceError::Invalid` if the string is not a decimal number,
    /// and the `from_decimal` errors otherwise.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let amount: Decimal = s.trim().parse().map_err(|_| PriceError::Invalid)?;
        Self::from_decimal(amount)
    }

    /// Get the amount in integer cents.
    #[must_use]
    pub const fn as_cents(&self) -> i64 {
        self.0
    }

    /// Get the amount as a `Decimal` in the currency's standard unit.
    #[must_use]
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, 2)
    }

    /// Multiply by a quantity, returning `None` on overflow.
    #[must_use]
    pub const fn checked_mul(&self, quantity: i64) -> Option<Self> {
        match self.0.checked_mul(quantity) {
            Some(cents) if cents >= 0 => Some(Self(cents)),
            _ => None,
        }
    }

    /// Add another price, returning `None` on overflow.
    #[must_use]
    pub const fn checked_add(&self, other: Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_decimal().to_string())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PriceVisitor;

        impl Visitor<'_> for PriceVisitor {
            type Value = Price;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a non-negative decimal amount as a string or number")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Price, E> {
                Price::parse(v).map_err(de::Error::custom)
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Price, E> {
                let amount = Decimal::try_from(v).map_err(de::Error::custom)?;
                Price::from_decimal(amount).map_err(de::Error::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Price, E> {
                Price::from_decimal(Decimal::from(v)).map_err(de::Error::custom)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Price, E> {
                Price::from_decimal(Decimal::from(v)).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(PriceVisitor)
    }
}

// SQLx support (with sqlite feature): stored as INTEGER cents.
#[cfg(feature = "sqlite")]
impl sqlx::Type<sqlx::Sqlite> for Price {
    fn type_info() -> sqlx::sqlite::SqliteTypeInfo {
        <i64 as sqlx::Type<sqlx::Sqlite>>::type_info()
    }

    fn compatible(ty: &sqlx::sqlite::SqliteTypeInfo) -> bool {
        <i64 as sqlx::Type<sqlx::Sqlite>>::compatible(ty)
    }
}

#[cfg(feature = "sqlite")]
impl<'r> sqlx::Decode<'r, sqlx::Sqlite> for Price {
    fn decode(value: sqlx::sqlite::SqliteValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let cents = <i64 as sqlx::Decode<sqlx::Sqlite>>::decode(value)?;
        // Database values are constrained non-negative by the schema
        Ok(Self(cents))
    }
}

#[cfg(feature = "sqlite")]
impl<'q> sqlx::Encode<'q, sqlx::Sqlite> for Price {
    fn encode_by_ref(
        &self,
        buf: &mut Vec<sqlx::sqlite::SqliteArgumentValue<'q>>,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <i64 as sqlx::Encode<'q, sqlx::Sqlite>>::encode_by_ref(&self.0, buf)
    }
}
