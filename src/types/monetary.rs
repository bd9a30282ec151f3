use crate::types::errors::MonetaryError;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const DECIMAL_PLACES: u32 = 2;

/// An amount in lei with exactly two fractional digits.
///
/// Every constructor rounds half-to-even to two places and rescales, so `Display`
/// always prints two decimals (`1234.50`). On the wire it is a plain JSON number, and a
/// number with more than two decimals is rejected on load rather than rounded.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Monetary(Decimal);

impl Monetary {
    pub fn new() -> Self {
        Self::from_decimal(Decimal::ZERO)
    }

    /// Whole lei, e.g. `Monetary::from_units(10000)` is `10000.00`.
    pub fn from_units(units: i64) -> Self {
        Self::from_decimal(Decimal::from(units))
    }

    /// Amount expressed in bani (hundredths of a leu).
    pub fn from_cents(cents: i64) -> Self {
        Self::from_decimal(Decimal::new(cents, DECIMAL_PLACES))
    }

    pub fn from_f64(value: f64) -> Result<Self, MonetaryError> {
        Decimal::from_f64(value)
            .map(Self::from_decimal)
            .ok_or(MonetaryError::NotRepresentable(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        let mut rounded = value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);
        rounded.rescale(DECIMAL_PLACES);
        Monetary(rounded)
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn to_f64(&self) -> Option<f64> {
        self.0.to_f64()
    }

    /// The amount without trailing zeros (`10000.00` becomes `10000`, `9999.50` becomes `9999.5`).
    pub fn trimmed(&self) -> Decimal {
        self.0.normalize()
    }
}

impl Default for Monetary {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Monetary {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for Monetary {
    type Err = MonetaryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();

        if value.is_empty() {
            return Err(MonetaryError::InvalidFormat("Value is an empty string".to_string()));
        }

        let parsed = Decimal::from_str(value).map_err(|error| {
            MonetaryError::InvalidFormat(format!("Value '{value}' is not a decimal number: {error}"))
        })?;

        if parsed.scale() > DECIMAL_PLACES {
            return Err(MonetaryError::InvalidFormat("Value has too many decimal places".to_string()));
        }

        Ok(Self::from_decimal(parsed))
    }
}

impl Serialize for Monetary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.to_f64() {
            Some(value) => serializer.serialize_f64(value),
            None => Err(ser::Error::custom(format!("amount {self} does not fit in a JSON number")))
        }
    }
}

impl<'de> Deserialize<'de> for Monetary {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(MonetaryVisitor)
    }
}

struct MonetaryVisitor;

impl<'de> de::Visitor<'de> for MonetaryVisitor {
    type Value = Monetary;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("a number with at most two decimal places")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        Ok(Monetary::from_units(value))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Monetary::from_decimal(Decimal::from(value)))
    }

    //NOTE: `f64` Display prints the shortest digits that round-trip, i.e. the digits written in the file
    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        Monetary::from_str(&value.to_string()).map_err(de::Error::custom)
    }
}
